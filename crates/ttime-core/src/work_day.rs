//! All periods recorded for one calendar date.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::period::{TimePeriod, minutes_to_hours};
use crate::week::CalendarWeek;

/// Joins the non-empty period descriptions of a day.
pub const DESCRIPTION_SEPARATOR: &str = " * ";

/// One calendar date with its periods in insertion order.
///
/// Week, weekday, totals and the combined description are computed once in
/// [`WorkDay::new`]. Changing the periods means building a new value.
/// Equality only looks at the date.
#[derive(Debug, Clone)]
pub struct WorkDay {
    date: NaiveDate,
    periods: Vec<TimePeriod>,
    week: CalendarWeek,
    weekday: Weekday,
    minutes: i64,
    description: String,
}

impl WorkDay {
    pub fn new(date: NaiveDate, periods: Vec<TimePeriod>) -> Self {
        let minutes = periods.iter().map(TimePeriod::minutes).sum();
        let description = periods
            .iter()
            .map(TimePeriod::description)
            .filter(|d| !d.is_empty())
            .collect::<Vec<_>>()
            .join(DESCRIPTION_SEPARATOR);

        Self {
            date,
            week: CalendarWeek::of(date),
            weekday: date.weekday(),
            periods,
            minutes,
            description,
        }
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn periods(&self) -> &[TimePeriod] {
        &self.periods
    }

    #[must_use]
    pub const fn week(&self) -> CalendarWeek {
        self.week
    }

    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// ISO weekday index, 1 for Monday through 7 for Sunday.
    pub fn weekday_number(&self) -> u32 {
        self.weekday.number_from_monday()
    }

    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn hours(&self) -> f64 {
        minutes_to_hours(self.minutes)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for WorkDay {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for WorkDay {}
