use crate::domain::model::OverflowPolicy;
use crate::utils::error::{EncoderError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Settings file, e.g.
///
/// ```toml
/// [encoder]
/// time_zone = "+09:00"
/// overflow = "strict"
///
/// [logging]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub encoder: EncoderSettings,
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncoderSettings {
    pub time_zone: Option<String>,
    pub overflow: Option<OverflowPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Zone used to read and build calendar fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeZoneSetting {
    /// Platform default zone, resolved at call time.
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl FromStr for TimeZoneSetting {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "local" => return Ok(TimeZoneSetting::Local),
            "utc" | "z" => return Ok(TimeZoneSetting::Utc),
            _ => {}
        }
        parse_offset(s)
            .map(TimeZoneSetting::Fixed)
            .ok_or_else(|| format!("expected 'local', 'utc' or an offset like '+09:00', got '{}'", s))
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => write!(f, "local"),
            TimeZoneSetting::Utc => write!(f, "utc"),
            TimeZoneSetting::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Parses `+HH:MM`, `-HH:MM` or `+HHMM`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    if !rest.is_ascii() {
        return None;
    }
    let digits = match rest.len() {
        4 => rest.to_string(),
        5 if rest.as_bytes()[2] == b':' => format!("{}{}", &rest[..2], &rest[3..]),
        _ => return None,
    };
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl TomlConfig {
    /// 從檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EncoderError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EncoderError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn time_zone(&self) -> Result<TimeZoneSetting> {
        match &self.encoder.time_zone {
            Some(raw) => raw
                .parse()
                .map_err(|reason| EncoderError::InvalidConfigValueError {
                    field: "encoder.time_zone".to_string(),
                    value: raw.clone(),
                    reason,
                }),
            None => Ok(TimeZoneSetting::default()),
        }
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.encoder.overflow.unwrap_or_default()
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.as_ref().map(|l| l.format).unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(raw) = &self.encoder.time_zone {
            validate_non_empty_string("encoder.time_zone", raw)?;
        }
        self.time_zone()?;
        Ok(())
    }
}
