//! ISO calendar week identity.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// An ISO (year, week) pair.
///
/// Field order matters: the derived ordering compares `year` first, so
/// week 52 of 2021 sorts before week 1 of 2022.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CalendarWeek {
    year: i32,
    week: u32,
}

impl CalendarWeek {
    #[must_use]
    pub const fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    /// The ISO week containing `date`. Early January days may belong to the
    /// previous ISO year.
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self::new(iso.year(), iso.week())
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn week(self) -> u32 {
        self.week
    }
}

impl fmt::Display for CalendarWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}
