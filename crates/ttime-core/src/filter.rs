//! Day- and period-level filtering of parsed work days.

use chrono::NaiveDate;
use thiserror::Error;

use crate::period::TimePeriod;
use crate::work_day::WorkDay;

/// Expected format for date arguments.
pub const DATE_ARGUMENT_FORMAT: &str = "%Y-%m-%d";

/// Errors for user-supplied filter arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("invalid value {value:?}, expected {expected}")]
    InvalidArgumentValue { value: String, expected: &'static str },
}

/// Length of a zero-padded `YYYY-MM-DD` date.
const DATE_ARGUMENT_LEN: usize = 10;

/// Parses a `YYYY-MM-DD` date argument. Month and day must be zero-padded.
pub fn parse_date_argument(value: &str) -> Result<NaiveDate, ArgumentError> {
    let invalid = || ArgumentError::InvalidArgumentValue {
        value: value.to_string(),
        expected: "a date as YYYY-MM-DD",
    };
    let trimmed = value.trim();
    if trimmed.len() != DATE_ARGUMENT_LEN {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, DATE_ARGUMENT_FORMAT).map_err(|_| invalid())
}

/// A predicate over a work day's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPredicate {
    /// Date on or after the given date.
    Since(NaiveDate),
    /// Date on or before the given date.
    Until(NaiveDate),
    /// Exactly the given date.
    On(NaiveDate),
}

impl DayPredicate {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Since(from) => date >= from,
            Self::Until(to) => date <= to,
            Self::On(on) => date == on,
        }
    }
}

/// A predicate over a single period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodPredicate {
    /// Case-sensitive substring match on the description.
    DescriptionContains(String),
}

impl PeriodPredicate {
    pub fn matches(&self, period: &TimePeriod) -> bool {
        match self {
            Self::DescriptionContains(needle) => period.description().contains(needle.as_str()),
        }
    }
}

/// A conjunction of day and period predicates.
///
/// Days must satisfy every day predicate. Within a surviving day only the
/// periods satisfying every period predicate are kept, and a day left
/// without periods is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    day: Vec<DayPredicate>,
    period: Vec<PeriodPredicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_day(mut self, predicate: DayPredicate) -> Self {
        self.day.push(predicate);
        self
    }

    #[must_use]
    pub fn with_period(mut self, predicate: PeriodPredicate) -> Self {
        self.period.push(predicate);
        self
    }

    #[must_use]
    pub fn since(self, date: NaiveDate) -> Self {
        self.with_day(DayPredicate::Since(date))
    }

    #[must_use]
    pub fn until(self, date: NaiveDate) -> Self {
        self.with_day(DayPredicate::Until(date))
    }

    #[must_use]
    pub fn on(self, date: NaiveDate) -> Self {
        self.with_day(DayPredicate::On(date))
    }

    #[must_use]
    pub fn containing(self, text: impl Into<String>) -> Self {
        self.with_period(PeriodPredicate::DescriptionContains(text.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_empty() && self.period.is_empty()
    }

    /// Applies the filter, preserving input order.
    ///
    /// An empty filter hands the input back untouched. Otherwise every kept
    /// day is rebuilt from its surviving periods so its derived totals match.
    pub fn apply(&self, days: Vec<WorkDay>) -> Vec<WorkDay> {
        if self.is_empty() {
            return days;
        }

        let before = days.len();
        let kept: Vec<WorkDay> = days
            .into_iter()
            .filter(|day| self.day.iter().all(|p| p.matches(day.date())))
            .filter_map(|day| {
                let periods: Vec<TimePeriod> = day
                    .periods()
                    .iter()
                    .filter(|period| self.period.iter().all(|p| p.matches(period)))
                    .cloned()
                    .collect();
                if periods.is_empty() {
                    None
                } else {
                    Some(WorkDay::new(day.date(), periods))
                }
            })
            .collect();

        tracing::debug!(before, after = kept.len(), "filtered work days");
        kept
    }
}
