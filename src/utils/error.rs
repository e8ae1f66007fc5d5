use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncoderError {
    #[error("Field '{field}' is not a base-10 integer: '{value}'")]
    NumberFormat {
        field: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidDateField {
        field: String,
        value: i32,
        reason: String,
    },

    #[error("Cannot read '{value}' as a date: {reason}")]
    InvalidModelValue { value: String, reason: String },

    #[error("Date {year}-{month}-{day} is outside the supported calendar range")]
    DateOutOfRange { year: i64, month: i64, day: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EncoderError {
    /// 轉換錯誤 (輸入資料問題) 與設定錯誤分開處理
    pub fn is_conversion_error(&self) -> bool {
        matches!(
            self,
            EncoderError::NumberFormat { .. }
                | EncoderError::InvalidDateField { .. }
                | EncoderError::DateOutOfRange { .. }
                | EncoderError::InvalidModelValue { .. }
                | EncoderError::SerializationError(_)
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_conversion_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, EncoderError>;
