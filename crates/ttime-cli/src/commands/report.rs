//! Report command: parse, filter, group by week and print.

use std::io::Write;

use anyhow::Result;
use ttime_core::{Filter, Summary, WorkDay, aggregate, sort_chronologically};

use crate::cli::ReportArgs;
use crate::config::Config;
use crate::input::read_work_days;
use crate::labels::{lookup, resolve_language};
use crate::render::{format_report, format_report_json};

/// Builds the filter described by the report flags.
pub fn build_filter(args: &ReportArgs) -> Filter {
    let mut filter = Filter::new();
    if let Some(from) = args.from {
        filter = filter.since(from);
    }
    if let Some(to) = args.to {
        filter = filter.until(to);
    }
    if let Some(on) = args.on {
        filter = filter.on(on);
    }
    for text in &args.grep {
        filter = filter.containing(text.clone());
    }
    filter
}

/// Filters, optionally sorts, and aggregates parsed work days.
pub fn generate_summary(days: Vec<WorkDay>, filter: &Filter, sort: bool) -> Summary {
    let mut days = filter.apply(days);
    if sort {
        sort_chronologically(&mut days);
    }
    aggregate(&days)
}

/// Runs the report command.
pub fn run<W: Write>(writer: &mut W, args: &ReportArgs, config: &Config) -> Result<()> {
    let days = read_work_days(&args.files)?;
    let sort = config.sort_days && !args.keep_order;
    let summary = generate_summary(days, &build_filter(args), sort);

    let language = resolve_language(args.lang.as_deref(), config.language.as_deref());
    tracing::debug!(%language, weeks = summary.weeks.len(), "rendering report");

    if args.json {
        writeln!(writer, "{}", format_report_json(&summary, &language)?)?;
    } else {
        let labels = lookup(&language, &config.labels);
        write!(writer, "{}", format_report(&summary, &labels))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use chrono::NaiveDate;
    use insta::assert_snapshot;
    use ttime_core::parse_str;

    const UNSORTED: &str = "\
[01/2021]
11. 0900-1100 later week
04. 0900-1200 task A
05. 0900-1000 task B
";

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, d).unwrap()
    }

    #[test]
    fn test_sorting_merges_weeks() {
        let days = parse_str(UNSORTED).unwrap();
        let summary = generate_summary(days, &Filter::new(), true);
        let weeks: Vec<u32> = summary.weeks.iter().map(|w| w.week.week()).collect();
        assert_eq!(weeks, [1, 2]);
    }

    #[test]
    fn test_keep_order_reports_runs() {
        let days = parse_str(UNSORTED).unwrap();
        let summary = generate_summary(days, &Filter::new(), false);
        let weeks: Vec<u32> = summary.weeks.iter().map(|w| w.week.week()).collect();
        assert_eq!(weeks, [2, 1]);
    }

    #[test]
    fn test_build_filter_from_args() {
        let args = ReportArgs {
            from: Some(date(5)),
            grep: vec!["task".to_string()],
            ..ReportArgs::default()
        };
        let days = parse_str(UNSORTED).unwrap();
        let summary = generate_summary(days, &build_filter(&args), true);
        let dates: Vec<NaiveDate> = summary
            .weeks
            .iter()
            .flat_map(|w| w.days.iter().map(|d| d.date))
            .collect();
        assert_eq!(dates, [date(5)]);
    }

    #[test]
    fn test_no_flags_means_no_filter() {
        assert!(build_filter(&ReportArgs::default()).is_empty());
    }

    #[test]
    fn test_run_writes_german_report() {
        let temp = tempfile::tempdir().unwrap();
        let log = temp.path().join("hours.log");
        std::fs::write(&log, UNSORTED).unwrap();

        let args = ReportArgs {
            files: vec![PathBuf::from(&log)],
            on: Some(date(4)),
            lang: Some("de".to_string()),
            ..ReportArgs::default()
        };
        let mut output = Vec::new();
        run(&mut output, &args, &Config::default()).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        KW1:
        ----------
        Mo, 04.01.    3.0  task A
        ----------
        gesamt: 3.0

        =======================================================
        gesamt Std.: 3.0
        gesamt Tage: 0.375
        ");
    }

    #[test]
    fn test_run_json_uses_resolved_language() {
        let temp = tempfile::tempdir().unwrap();
        let log = temp.path().join("hours.log");
        std::fs::write(&log, UNSORTED).unwrap();

        let config = Config {
            language: Some("xx".to_string()),
            ..Config::default()
        };
        let args = ReportArgs {
            files: vec![log],
            json: true,
            ..ReportArgs::default()
        };
        let mut output = Vec::new();
        run(&mut output, &args, &config).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["language"], "xx");
        assert_eq!(value["total_minutes"], 360);
        assert_eq!(value["weeks"].as_array().unwrap().len(), 2);
    }
}
