//! Text and JSON rendering of an aggregated report.

use std::fmt::Write;

use anyhow::Result;
use chrono::Weekday;
use serde::Serialize;
use ttime_core::{DaySummary, Summary, WeekSummary};

use crate::labels::Labels;

const DEFAULT_TOTAL: &str = "total";
const DEFAULT_TOTAL_HOURS: &str = "total hrs.";
const DEFAULT_TOTAL_DAYS: &str = "total days";
const DEFAULT_CALENDAR_WEEK: &str = "CW";
const DEFAULT_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const WEEK_RULE: &str = "----------";
const TOTAL_RULE: &str = "=======================================================";

/// Formats `value` with at least one and at most `max_decimals` decimals.
fn format_decimal(value: f64, max_decimals: usize) -> String {
    let fixed = format!("{value:.max_decimals$}");
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

/// Formats hours with one or two decimals: `7.0`, `1.25`, `0.33`.
pub fn format_hours(hours: f64) -> String {
    format_decimal(hours, 2)
}

/// Formats work days with up to three decimals, enough to show any
/// quarter-hour total divided by eight exactly: `0.125`, `1.5`.
pub fn format_days(days: f64) -> String {
    format_decimal(days, 3)
}

fn weekday_name(labels: &Labels, weekday: Weekday) -> &str {
    labels
        .weekday(weekday)
        .unwrap_or(DEFAULT_WEEKDAYS[weekday.num_days_from_monday() as usize])
}

fn write_day(output: &mut String, labels: &Labels, day: &DaySummary) {
    let line = format!(
        "{}, {}  {:>5}  {}",
        weekday_name(labels, day.weekday),
        day.date.format("%d.%m."),
        format_hours(day.hours),
        day.description
    );
    writeln!(output, "{}", line.trim_end()).unwrap();
}

fn write_week(output: &mut String, labels: &Labels, week: &WeekSummary) {
    let cw = labels.calendar_week.as_deref().unwrap_or(DEFAULT_CALENDAR_WEEK);
    let total = labels.total.as_deref().unwrap_or(DEFAULT_TOTAL);

    writeln!(output, "{cw}{}:", week.week.week()).unwrap();
    writeln!(output, "{WEEK_RULE}").unwrap();
    for day in &week.days {
        write_day(output, labels, day);
    }
    writeln!(output, "{WEEK_RULE}").unwrap();
    writeln!(output, "{total}: {}", format_hours(week.hours)).unwrap();
    writeln!(output).unwrap();
}

/// Formats the human-readable report.
///
/// Labels missing from `labels` fall back to English defaults.
pub fn format_report(summary: &Summary, labels: &Labels) -> String {
    let mut output = String::new();

    for week in &summary.weeks {
        write_week(&mut output, labels, week);
    }

    let total_hours = labels.total_hours.as_deref().unwrap_or(DEFAULT_TOTAL_HOURS);
    let total_days = labels.total_days.as_deref().unwrap_or(DEFAULT_TOTAL_DAYS);
    writeln!(output, "{TOTAL_RULE}").unwrap();
    writeln!(output, "{total_hours}: {}", format_hours(summary.total_hours)).unwrap();
    writeln!(output, "{total_days}: {}", format_days(summary.total_days)).unwrap();

    output
}

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub language: &'a str,
    #[serde(flatten)]
    pub summary: &'a Summary,
}

/// Formats the report as pretty-printed JSON.
pub fn format_report_json(summary: &Summary, language: &str) -> Result<String> {
    let report = JsonReport { language, summary };
    Ok(serde_json::to_string_pretty(&report)?)
}
