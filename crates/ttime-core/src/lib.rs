//! Core logic for plain-text time logs.
//!
//! This crate contains:
//! - The model: [`TimePeriod`], [`CalendarWeek`], [`WorkDay`]
//! - Parsing the `[MM/YYYY]` / `DD. HHMM-HHMM` log notation
//! - Filtering by date range and description text
//! - Grouping days into ISO weeks with subtotals and grand totals

pub mod aggregate;
pub mod filter;
pub mod parser;
mod period;
mod week;
mod work_day;

pub use aggregate::{
    DaySummary, HOURS_PER_DAY, Summary, WeekSummary, aggregate, sort_chronologically,
};
pub use filter::{ArgumentError, DayPredicate, Filter, PeriodPredicate, parse_date_argument};
pub use parser::{ParseError, parse_lines, parse_str};
pub use period::{TimePeriod, minutes_to_hours};
pub use week::CalendarWeek;
pub use work_day::{DESCRIPTION_SEPARATOR, WorkDay};
