//! A single contiguous worked interval.

use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

/// One worked interval on a naive local clock, with its description.
///
/// Duration is `end - start` and is not checked for sign here. The parser
/// rejects reversed ranges before they reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimePeriod {
    start: NaiveTime,
    end: NaiveTime,
    description: String,
}

impl TimePeriod {
    pub fn new(start: NaiveTime, end: NaiveTime, description: impl Into<String>) -> Self {
        Self {
            start,
            end,
            description: description.into(),
        }
    }

    /// Builds a period from clock components, or `None` if any is out of range.
    pub fn from_clock(
        (start_hour, start_minute): (u32, u32),
        (end_hour, end_minute): (u32, u32),
        description: impl Into<String>,
    ) -> Option<Self> {
        let start = NaiveTime::from_hms_opt(start_hour, start_minute, 0)?;
        let end = NaiveTime::from_hms_opt(end_hour, end_minute, 0)?;
        Some(Self::new(start, end, description))
    }

    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Worked minutes; negative when `end` precedes `start`.
    pub fn minutes(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_minutes()
    }

    pub fn hours(&self) -> f64 {
        minutes_to_hours(self.minutes())
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )?;
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        Ok(())
    }
}

/// Converts whole minutes to fractional hours.
#[allow(clippy::cast_precision_loss)]
pub fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}
