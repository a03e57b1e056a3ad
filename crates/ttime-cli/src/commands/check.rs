//! Check command: parse time logs and summarize what was found.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use ttime_core::{WorkDay, minutes_to_hours};

use crate::input::read_work_days;
use crate::render::format_hours;

pub fn run<W: Write>(writer: &mut W, files: &[PathBuf]) -> Result<()> {
    let days = read_work_days(files)?;
    let periods: usize = days.iter().map(|d| d.periods().len()).sum();
    let minutes: i64 = days.iter().map(WorkDay::minutes).sum();

    writeln!(
        writer,
        "{} days, {periods} periods, {} hours",
        days.len(),
        format_hours(minutes_to_hours(minutes))
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_counts_days_and_periods() {
        let temp = tempfile::tempdir().unwrap();
        let log = temp.path().join("hours.log");
        std::fs::write(
            &log,
            "[01/2021]\n04. 0900-1200 a\n04. 1300-1700 b\n05. 0900-1200 c\n",
        )
        .unwrap();

        let mut output = Vec::new();
        run(&mut output, &[log]).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "2 days, 3 periods, 10.0 hours\n");
    }

    #[test]
    fn check_reports_fractional_hours() {
        let temp = tempfile::tempdir().unwrap();
        let log = temp.path().join("hours.log");
        std::fs::write(&log, "[01/2021]\n04. 0900-0920 a\n05. 0900-0945 b\n").unwrap();

        let mut output = Vec::new();
        run(&mut output, &[log]).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "2 days, 2 periods, 1.08 hours\n");
    }

    #[test]
    fn check_fails_on_malformed_log() {
        let temp = tempfile::tempdir().unwrap();
        let log = temp.path().join("hours.log");
        std::fs::write(&log, "[2021/01]\n").unwrap();

        let mut output = Vec::new();
        let err = run(&mut output, &[log]).unwrap_err();
        assert!(format!("{err:#}").contains("invalid section header"));
        assert!(output.is_empty());
    }
}
