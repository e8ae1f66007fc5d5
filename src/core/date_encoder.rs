use crate::core::calendar::{build_date, start_of_day};
use crate::domain::model::{DateBean, OverflowPolicy};
use crate::domain::ports::ModelEncoder;
use crate::utils::error::{EncoderError, Result};
use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

/// Converts a [`DateTime`] to a [`DateBean`] and back, reading and building
/// calendar fields in `Tz`.
///
/// Decoded dates are anchored at the start of the day; time-of-day on the
/// encode side is dropped.
#[derive(Debug, Clone)]
pub struct DateToDateBeanEncoder<Tz: TimeZone> {
    time_zone: Tz,
    overflow: OverflowPolicy,
}

impl DateToDateBeanEncoder<Local> {
    /// Encoder using the platform's default time zone.
    pub fn local() -> Self {
        Self::with_time_zone(Local)
    }
}

impl DateToDateBeanEncoder<Utc> {
    pub fn utc() -> Self {
        Self::with_time_zone(Utc)
    }
}

impl<Tz: TimeZone> DateToDateBeanEncoder<Tz> {
    pub fn with_time_zone(time_zone: Tz) -> Self {
        Self {
            time_zone,
            overflow: OverflowPolicy::default(),
        }
    }

    pub fn with_overflow_policy(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn time_zone(&self) -> &Tz {
        &self.time_zone
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }
}

fn parse_field(field: &str, value: &str) -> Result<i32> {
    value
        .parse::<i32>()
        .map_err(|source| EncoderError::NumberFormat {
            field: field.to_string(),
            value: value.to_string(),
            source,
        })
}

impl<Tz> ModelEncoder<DateTime<Tz>, DateBean> for DateToDateBeanEncoder<Tz>
where
    Tz: TimeZone + Send + Sync,
{
    fn encode(&self, model_value: Option<&DateTime<Tz>>) -> Option<DateBean> {
        let value = model_value?;
        let local = value.with_timezone(&self.time_zone);

        let bean = DateBean {
            day: local.day().to_string(),
            month: local.month().to_string(),
            year: local.year().to_string(),
        };
        tracing::debug!("Encoded {:?} as {}", local.naive_local(), bean);
        Some(bean)
    }

    fn decode(&self, presentation_value: Option<&DateBean>) -> Result<Option<DateTime<Tz>>> {
        let Some(bean) = presentation_value else {
            return Ok(None);
        };

        let year = parse_field("year", &bean.year)?;
        let day = parse_field("day", &bean.day)?;
        // 畫面上的月份從 1 開始
        let month0 = i64::from(parse_field("month", &bean.month)?) - 1;

        let date = build_date(year, month0, day, self.overflow)?;
        let value = start_of_day(&self.time_zone, date)?;
        tracing::debug!("Decoded {} as {:?}", bean, value.naive_local());
        Ok(Some(value))
    }
}
