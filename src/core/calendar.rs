//! Calendar construction for decoded dates.
//!
//! Fields arrive as raw integers (month already 0-based) and are turned into a
//! [`NaiveDate`] under an [`OverflowPolicy`], then anchored at the start of the
//! day in a time zone.

use crate::domain::model::OverflowPolicy;
use crate::utils::error::{EncoderError, Result};
use crate::utils::validation::validate_field_range;
use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// Granularity used to find the first valid instant when midnight falls in a
/// DST gap.
const GAP_STEP_MINUTES: i64 = 15;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Build a date from `year`, a 0-based `month0` and `day`.
pub fn build_date(year: i32, month0: i64, day: i32, policy: OverflowPolicy) -> Result<NaiveDate> {
    match policy {
        OverflowPolicy::Lenient => lenient_date(year, month0, day),
        OverflowPolicy::Strict => strict_date(year, month0, day),
    }
}

/// Number of days in a 1-based `month`, `None` when the year is outside
/// chrono's range.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

fn out_of_range(year: i32, month0: i64, day: i32) -> EncoderError {
    EncoderError::DateOutOfRange {
        year: i64::from(year),
        month: month0 + 1,
        day: i64::from(day),
    }
}

fn lenient_date(year: i32, month0: i64, day: i32) -> Result<NaiveDate> {
    let total_months = i64::from(year) * 12 + month0;
    let norm_year = i32::try_from(total_months.div_euclid(12))
        .map_err(|_| out_of_range(year, month0, day))?;
    // rem_euclid(12) is always 0..=11
    let norm_month = total_months.rem_euclid(12) as u32 + 1;

    let first = NaiveDate::from_ymd_opt(norm_year, norm_month, 1)
        .ok_or_else(|| out_of_range(year, month0, day))?;
    let date = first
        .checked_add_signed(Duration::days(i64::from(day) - 1))
        .ok_or_else(|| out_of_range(year, month0, day))?;

    let rolled = date.year() != year
        || i64::from(date.month0()) != month0
        || i64::from(date.day()) != i64::from(day);
    if rolled {
        tracing::warn!(
            "Date fields {}-{}-{} out of range, rolled over to {}",
            year,
            month0 + 1,
            day,
            date
        );
    }

    Ok(date)
}

fn strict_date(year: i32, month0: i64, day: i32) -> Result<NaiveDate> {
    let month = i32::try_from(month0 + 1).map_err(|_| out_of_range(year, month0, day))?;
    validate_field_range("month", month, 1, 12)?;
    let month = month as u32;

    let max_day = days_in_month(year, month).ok_or_else(|| out_of_range(year, month0, day))?;
    validate_field_range("day", day, 1, max_day as i32)?;

    NaiveDate::from_ymd_opt(year, month, day as u32).ok_or_else(|| out_of_range(year, month0, day))
}

/// First instant of `date` in `tz`, normally local midnight.
///
/// An ambiguous midnight resolves to the earlier instant; a midnight skipped by
/// a DST transition resolves to the first local time of the day that exists.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Result<DateTime<Tz>> {
    let midnight = date.and_time(NaiveTime::MIN);

    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            let mut minutes = GAP_STEP_MINUTES;
            while minutes < MINUTES_PER_DAY {
                let candidate = midnight.checked_add_signed(Duration::minutes(minutes));
                if let Some(dt) = candidate.and_then(|t| tz.from_local_datetime(&t).earliest()) {
                    tracing::debug!("Midnight of {} does not exist, using {:?}", date, dt.naive_local());
                    return Ok(dt);
                }
                minutes += GAP_STEP_MINUTES;
            }
            Err(EncoderError::DateOutOfRange {
                year: i64::from(date.year()),
                month: i64::from(date.month()),
                day: i64::from(date.day()),
            })
        }
    }
}
