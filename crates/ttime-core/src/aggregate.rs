//! Week grouping and totals.
//!
//! Walks work days in the given order and opens a new week group whenever
//! the ISO week changes. One subtotal is produced per contiguous run of
//! days sharing a week, so unsorted input can report the same week twice.
//! Use [`sort_chronologically`] first when that is not wanted.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::period::minutes_to_hours;
use crate::week::CalendarWeek;
use crate::work_day::WorkDay;

/// Hours in one reported work day.
pub const HOURS_PER_DAY: f64 = 8.0;

/// One reported day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub minutes: i64,
    pub hours: f64,
    pub periods: usize,
    pub description: String,
}

/// A contiguous run of days in the same ISO week, with its subtotal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSummary {
    pub week: CalendarWeek,
    pub days: Vec<DaySummary>,
    pub minutes: i64,
    pub hours: f64,
}

/// Per-week groups plus grand totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub weeks: Vec<WeekSummary>,
    pub total_minutes: i64,
    pub total_hours: f64,
    pub total_days: f64,
}

impl WeekSummary {
    const fn open(week: CalendarWeek) -> Self {
        Self {
            week,
            days: Vec::new(),
            minutes: 0,
            hours: 0.0,
        }
    }

    fn close(mut self, weeks: &mut Vec<Self>) {
        self.hours = minutes_to_hours(self.minutes);
        tracing::trace!(week = %self.week, hours = self.hours, "week subtotal");
        weeks.push(self);
    }
}

impl From<&WorkDay> for DaySummary {
    fn from(day: &WorkDay) -> Self {
        Self {
            date: day.date(),
            weekday: day.weekday(),
            minutes: day.minutes(),
            hours: day.hours(),
            periods: day.periods().len(),
            description: day.description().to_string(),
        }
    }
}

/// Stable sort by date. Entries sharing a date keep their relative order.
pub fn sort_chronologically(days: &mut [WorkDay]) {
    days.sort_by_key(WorkDay::date);
}

/// Groups days into weeks and totals them. Expects chronological input.
pub fn aggregate(days: &[WorkDay]) -> Summary {
    let mut weeks = Vec::new();
    let mut current: Option<WeekSummary> = None;
    let mut total_minutes = 0;

    for day in days {
        let week = day.week();
        if current.as_ref().is_none_or(|c| c.week != week) {
            if let Some(done) = current.replace(WeekSummary::open(week)) {
                done.close(&mut weeks);
            }
        }

        if let Some(group) = current.as_mut() {
            group.days.push(DaySummary::from(day));
            group.minutes += day.minutes();
        }
        total_minutes += day.minutes();
    }

    if let Some(done) = current {
        done.close(&mut weeks);
    }

    let total_hours = minutes_to_hours(total_minutes);
    Summary {
        weeks,
        total_minutes,
        total_hours,
        total_days: total_hours / HOURS_PER_DAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::TimePeriod;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(y: i32, m: u32, d: u32, hours: u32) -> WorkDay {
        let period = TimePeriod::from_clock((8, 0), (8 + hours, 0), "work").unwrap();
        WorkDay::new(date(y, m, d), vec![period])
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact binary fractions")]
    fn same_week_days_share_one_subtotal() {
        let days = [day(2021, 1, 4, 7), day(2021, 1, 5, 3)];
        let summary = aggregate(&days);

        assert_eq!(summary.weeks.len(), 1);
        assert_eq!(summary.weeks[0].week, CalendarWeek::new(2021, 1));
        assert_eq!(summary.weeks[0].days.len(), 2);
        assert_eq!(summary.weeks[0].hours, 10.0);
        assert_eq!(summary.total_hours, 10.0);
        assert_eq!(summary.total_days, 1.25);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "whole hours")]
    fn different_weeks_get_separate_subtotals() {
        let days = [day(2021, 1, 4, 7), day(2021, 1, 11, 3)];
        let summary = aggregate(&days);

        let subtotals: Vec<f64> = summary.weeks.iter().map(|w| w.hours).collect();
        assert_eq!(subtotals, [7.0, 3.0]);
        assert_eq!(summary.weeks[1].week, CalendarWeek::new(2021, 2));
    }

    #[test]
    fn unsorted_input_splits_a_week() {
        let days = [day(2021, 1, 4, 1), day(2021, 1, 11, 1), day(2021, 1, 5, 1)];
        let summary = aggregate(&days);

        let weeks: Vec<u32> = summary.weeks.iter().map(|w| w.week.week()).collect();
        assert_eq!(weeks, [1, 2, 1]);
    }

    #[test]
    fn sorting_first_merges_the_split_week() {
        let mut days = [day(2021, 1, 4, 1), day(2021, 1, 11, 1), day(2021, 1, 5, 1)];
        sort_chronologically(&mut days);
        let summary = aggregate(&days);

        assert_eq!(summary.weeks.len(), 2);
        assert_eq!(summary.weeks[0].minutes, 120);
        assert_eq!(summary.weeks[1].minutes, 60);
    }

    #[test]
    fn week_boundary_across_new_year() {
        let days = [day(2021, 12, 31, 2), day(2022, 1, 2, 2), day(2022, 1, 3, 2)];
        let summary = aggregate(&days);

        let weeks: Vec<CalendarWeek> = summary.weeks.iter().map(|w| w.week).collect();
        assert_eq!(weeks, [CalendarWeek::new(2021, 52), CalendarWeek::new(2022, 1)]);
        assert_eq!(summary.weeks[0].days.len(), 2);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact binary fractions")]
    fn total_days_uses_eight_hour_days() {
        let days = [
            day(2021, 1, 4, 8),
            day(2021, 1, 5, 8),
            day(2021, 1, 6, 4),
        ];
        let summary = aggregate(&days);
        assert_eq!(summary.total_hours, 20.0);
        assert_eq!(summary.total_days, 2.5);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "zero")]
    fn empty_input_has_no_weeks() {
        let summary = aggregate(&[]);
        assert!(summary.weeks.is_empty());
        assert_eq!(summary.total_minutes, 0);
        assert_eq!(summary.total_days, 0.0);
    }

    #[test]
    fn day_summary_carries_weekday_and_description() {
        let summary = aggregate(&[day(2021, 1, 6, 2)]);
        let line = &summary.weeks[0].days[0];
        assert_eq!(line.weekday, Weekday::Wed);
        assert_eq!(line.description, "work");
        assert_eq!(line.periods, 1);
    }
}
