//! Parser for the plain-text time log notation.
//!
//! ```text
//! [01/2021]
//! 04. 0900-1200 task A
//! 04. 1300-1700 task B
//!     1730-1800 continuation of day 04
//! 05. 0900-1200 task C
//! ```
//!
//! `[MM/YYYY]` opens a section. Each following line is a period
//! `HHMM-HHMM description`, optionally prefixed by a `DD.` day key. A line
//! without a key continues the last day key of the section. Blank lines and
//! lines starting with `#` are ignored. The first malformed line aborts the
//! whole parse.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use thiserror::Error;

use crate::period::TimePeriod;
use crate::work_day::WorkDay;

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d{2})/(\d{4})\]$").unwrap());

static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d{2})\.\s*)?(\d{2})(\d{2})-(\d{2})(\d{2})(?:\s+(.*))?$").unwrap()
});

/// Errors raised while parsing a time log. Line numbers are 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: invalid section header {content:?}, expected [MM/YYYY]")]
    InvalidSectionHeader { line: usize, content: String },

    #[error("line {line}: invalid period line {content:?}, expected [DD.] HHMM-HHMM description")]
    InvalidPeriodLine { line: usize, content: String },

    #[error("line {line}: {date} is not a valid calendar date")]
    InvalidDateValue { line: usize, date: String },

    #[error("line {line}: period before any [MM/YYYY] section header")]
    EntryOutsideSection { line: usize },

    #[error("line {line}: period line without a day key and no previous day in this section")]
    MissingDay { line: usize },

    #[error("line {line}: period ends at {end} before it starts at {start}")]
    ReversedPeriod {
        line: usize,
        start: NaiveTime,
        end: NaiveTime,
    },
}

/// Work days of one `[MM/YYYY]` block, keyed by date in first-seen order.
#[derive(Debug)]
struct Section {
    year: i32,
    month: u32,
    days: Vec<(NaiveDate, Vec<TimePeriod>)>,
    index: HashMap<NaiveDate, usize>,
    last_date: Option<NaiveDate>,
}

impl Section {
    fn open(line: usize, month: u32, year: i32) -> Result<Self, ParseError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ParseError::InvalidDateValue {
                line,
                date: format!("{year:04}-{month:02}"),
            });
        }
        Ok(Self {
            year,
            month,
            days: Vec::new(),
            index: HashMap::new(),
            last_date: None,
        })
    }

    fn date_for(&self, line: usize, day: u32) -> Result<NaiveDate, ParseError> {
        NaiveDate::from_ymd_opt(self.year, self.month, day).ok_or_else(|| {
            ParseError::InvalidDateValue {
                line,
                date: format!("{:04}-{:02}-{day:02}", self.year, self.month),
            }
        })
    }

    fn push(&mut self, date: NaiveDate, period: TimePeriod) {
        let slot = *self.index.entry(date).or_insert_with(|| {
            self.days.push((date, Vec::new()));
            self.days.len() - 1
        });
        self.days[slot].1.push(period);
        self.last_date = Some(date);
    }

    fn close(self, out: &mut Vec<WorkDay>) {
        tracing::trace!(
            year = self.year,
            month = self.month,
            days = self.days.len(),
            "closing section"
        );
        out.extend(
            self.days
                .into_iter()
                .map(|(date, periods)| WorkDay::new(date, periods)),
        );
    }
}

/// Parses a whole time log held in memory.
pub fn parse_str(input: &str) -> Result<Vec<WorkDay>, ParseError> {
    parse_lines(input.lines())
}

/// Parses a time log line by line.
///
/// Work days come out in the order their sections and day keys first appear.
/// The result is not sorted. A day key repeated later in the same section
/// adds periods to the existing day; the same date under a later section
/// header becomes a separate work day.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<WorkDay>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut days = Vec::new();
    let mut section: Option<Section> = None;

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let line = raw.as_ref().trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let (month, year) = parse_section_header(line_no, line)?;
            let next = Section::open(line_no, month, year)?;
            if let Some(done) = section.replace(next) {
                done.close(&mut days);
            }
            continue;
        }

        let current = section
            .as_mut()
            .ok_or(ParseError::EntryOutsideSection { line: line_no })?;
        let (day, period) = parse_period_line(line_no, line)?;
        let date = match day {
            Some(day) => current.date_for(line_no, day)?,
            None => current
                .last_date
                .ok_or(ParseError::MissingDay { line: line_no })?,
        };
        current.push(date, period);
    }

    if let Some(done) = section {
        done.close(&mut days);
    }

    tracing::debug!(days = days.len(), "parsed time log");
    Ok(days)
}

fn parse_section_header(line_no: usize, line: &str) -> Result<(u32, i32), ParseError> {
    let invalid = || ParseError::InvalidSectionHeader {
        line: line_no,
        content: line.to_string(),
    };
    let caps = SECTION_RE.captures(line).ok_or_else(invalid)?;
    let month = caps[1].parse().map_err(|_| invalid())?;
    let year = caps[2].parse().map_err(|_| invalid())?;
    Ok((month, year))
}

fn parse_period_line(line_no: usize, line: &str) -> Result<(Option<u32>, TimePeriod), ParseError> {
    let invalid = || ParseError::InvalidPeriodLine {
        line: line_no,
        content: line.to_string(),
    };
    let caps = PERIOD_RE.captures(line).ok_or_else(invalid)?;

    let day = caps
        .get(1)
        .map(|m| m.as_str().parse::<u32>())
        .transpose()
        .map_err(|_| invalid())?;
    let start = clock(&caps[2], &caps[3]).ok_or_else(invalid)?;
    let end = clock(&caps[4], &caps[5]).ok_or_else(invalid)?;
    if end < start {
        return Err(ParseError::ReversedPeriod {
            line: line_no,
            start,
            end,
        });
    }
    let description = caps.get(6).map_or("", |m| m.as_str().trim());

    Ok((day, TimePeriod::new(start, end, description)))
}

fn clock(hour: &str, minute: &str) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}
