use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation record bound to the template: day, month (1-12) and year as
/// decimal strings. Carries no range invariants of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateBean {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateBean {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }
}

impl fmt::Display for DateBean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// How decode treats day/month values outside the calendar's ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Roll into neighbouring months and years (month 13 is next January).
    #[default]
    Lenient,
    /// Reject month outside 1-12 and days that do not exist in the month.
    Strict,
}

impl std::str::FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(OverflowPolicy::Lenient),
            "strict" => Ok(OverflowPolicy::Strict),
            other => Err(format!(
                "unknown overflow policy '{}', expected 'lenient' or 'strict'",
                other
            )),
        }
    }
}
