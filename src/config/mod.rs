#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::OverflowPolicy;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::{LogFormat, TimeZoneSetting, TomlConfig};

/// Effective encoder settings after merging the settings file with flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderOptions {
    pub time_zone: TimeZoneSetting,
    pub overflow: OverflowPolicy,
    pub log_format: LogFormat,
}

impl EncoderOptions {
    /// Flags win over the file; the file wins over defaults.
    pub fn from_sources(
        file: Option<&TomlConfig>,
        time_zone: Option<TimeZoneSetting>,
        overflow: Option<OverflowPolicy>,
        json_logs: bool,
    ) -> Result<Self> {
        let mut options = EncoderOptions::default();

        if let Some(file) = file {
            file.validate()?;
            options.time_zone = file.time_zone()?;
            options.overflow = file.overflow_policy();
            options.log_format = file.log_format();
        }

        if let Some(time_zone) = time_zone {
            options.time_zone = time_zone;
        }
        if let Some(overflow) = overflow {
            options.overflow = overflow;
        }
        if json_logs {
            options.log_format = LogFormat::Json;
        }

        Ok(options)
    }
}
