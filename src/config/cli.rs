use crate::app::commands::Conversion;
use crate::config::toml_config::{TimeZoneSetting, TomlConfig};
use crate::config::EncoderOptions;
use crate::domain::model::{DateBean, OverflowPolicy};
use crate::utils::error::{EncoderError, Result};
use crate::utils::validation::{validate_readable_file, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "date-bean")]
#[command(about = "Convert dates to day/month/year template beans and back")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "local, utc or a fixed offset such as +09:00")]
    pub time_zone: Option<TimeZoneSetting>,

    #[arg(long, global = true, help = "lenient or strict handling of out-of-range fields")]
    pub overflow: Option<OverflowPolicy>,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Encode a date (YYYY-MM-DD or RFC 3339) into a bean; no date prints null
    Encode { date: Option<String> },

    /// Decode a bean into the start of its day
    Decode {
        #[arg(long, conflicts_with_all = ["day", "month", "year"], help = "Bean as JSON, e.g. '{\"day\":\"5\",\"month\":\"3\",\"year\":\"2019\"}'")]
        json: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        day: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        month: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        year: Option<String>,
    },
}

impl CliConfig {
    pub fn options(&self) -> Result<EncoderOptions> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        EncoderOptions::from_sources(file.as_ref(), self.time_zone, self.overflow, self.json_logs)
    }

    pub fn conversion(&self) -> Result<Conversion> {
        match &self.command {
            Command::Encode { date } => Ok(Conversion::Encode(date.clone())),
            Command::Decode {
                json: Some(json), ..
            } => {
                let bean: Option<DateBean> = serde_json::from_str(json)?;
                Ok(Conversion::Decode(bean))
            }
            Command::Decode {
                json: None,
                day,
                month,
                year,
            } => match (day, month, year) {
                (Some(day), Some(month), Some(year)) => Ok(Conversion::Decode(Some(
                    DateBean::new(day.as_str(), month.as_str(), year.as_str()),
                ))),
                (None, None, None) => Ok(Conversion::Decode(None)),
                _ => Err(EncoderError::ConfigError {
                    message: "decode needs --day, --month and --year together".to_string(),
                }),
            },
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_readable_file("config", path)?;
        }
        Ok(())
    }
}
