use crate::config::toml_config::TimeZoneSetting;
use crate::config::EncoderOptions;
use crate::core::calendar::start_of_day;
use crate::core::date_encoder::DateToDateBeanEncoder;
use crate::domain::model::DateBean;
use crate::domain::ports::ModelEncoder;
use crate::utils::error::{EncoderError, Result};
use chrono::{DateTime, NaiveDate, TimeZone};
use std::fmt::Display;

/// One request handled by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Date text to encode, `None` for the absent value.
    Encode(Option<String>),
    Decode(Option<DateBean>),
}

/// Runs `conversion` with an encoder built from `options` and returns the text
/// to print: bean JSON for encode, an RFC 3339 timestamp for decode, `null`
/// for absent results.
pub fn run_conversion(options: &EncoderOptions, conversion: &Conversion) -> Result<String> {
    tracing::debug!(
        "Running {:?} in zone {} with {:?} overflow",
        conversion,
        options.time_zone,
        options.overflow
    );

    match options.time_zone {
        TimeZoneSetting::Local => run_with(
            &DateToDateBeanEncoder::local().with_overflow_policy(options.overflow),
            conversion,
        ),
        TimeZoneSetting::Utc => run_with(
            &DateToDateBeanEncoder::utc().with_overflow_policy(options.overflow),
            conversion,
        ),
        TimeZoneSetting::Fixed(offset) => run_with(
            &DateToDateBeanEncoder::with_time_zone(offset).with_overflow_policy(options.overflow),
            conversion,
        ),
    }
}

fn run_with<Tz>(encoder: &DateToDateBeanEncoder<Tz>, conversion: &Conversion) -> Result<String>
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Display,
{
    match conversion {
        Conversion::Encode(input) => {
            let value = input
                .as_deref()
                .map(|text| parse_model_value(encoder.time_zone(), text))
                .transpose()?;
            let bean = encoder.encode(value.as_ref());
            Ok(serde_json::to_string(&bean)?)
        }
        Conversion::Decode(bean) => {
            let value = encoder.decode(bean.as_ref())?;
            Ok(value
                .map(|v| v.to_rfc3339())
                .unwrap_or_else(|| "null".to_string()))
        }
    }
}

/// Reads an RFC 3339 timestamp, or a plain `YYYY-MM-DD` taken as the start of
/// that day in `tz`.
pub fn parse_model_value<Tz: TimeZone>(tz: &Tz, input: &str) -> Result<DateTime<Tz>> {
    let input = input.trim();

    if let Ok(value) = DateTime::parse_from_rfc3339(input) {
        return Ok(value.with_timezone(tz));
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| {
        EncoderError::InvalidModelValue {
            value: input.to_string(),
            reason: format!("expected YYYY-MM-DD or RFC 3339 ({})", e),
        }
    })?;
    start_of_day(tz, date)
}
