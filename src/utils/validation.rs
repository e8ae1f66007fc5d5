use crate::utils::error::{EncoderError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// The settings file must exist, be a regular file and open for reading.
pub fn validate_readable_file(field_name: &str, path: &Path) -> Result<()> {
    let invalid = |reason: String| EncoderError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.display().to_string(),
        reason,
    };

    if path.as_os_str().is_empty() {
        return Err(invalid("Path cannot be empty".to_string()));
    }

    let metadata = std::fs::metadata(path).map_err(|e| invalid(format!("Cannot access file: {}", e)))?;
    if !metadata.is_file() {
        return Err(invalid("Not a regular file".to_string()));
    }

    std::fs::File::open(path).map_err(|e| invalid(format!("Cannot open file for reading: {}", e)))?;
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EncoderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects a calendar field outside `min..=max`.
pub fn validate_field_range(field_name: &str, value: i32, min: i32, max: i32) -> Result<()> {
    if value < min || value > max {
        return Err(EncoderError::InvalidDateField {
            field: field_name.to_string(),
            value,
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
