//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use ttime_core::parse_date_argument;

/// Plain-text time tracking reports.
///
/// Reads time logs written as `[MM/YYYY]` sections of `DD. HHMM-HHMM
/// description` lines and prints worked hours per day, per ISO week and in
/// total.
#[derive(Debug, Parser)]
#[command(name = "ttime", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the weekly time report.
    Report(ReportArgs),

    /// Parse time logs and report what was found, without the report.
    Check {
        /// Time log files; `-` or none reads standard input.
        files: Vec<PathBuf>,
    },
}

/// Options for `ttime report`.
#[derive(Debug, Default, Args)]
pub struct ReportArgs {
    /// Time log files; `-` or none reads standard input.
    pub files: Vec<PathBuf>,

    /// Only days on or after this date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date_argument)]
    pub from: Option<NaiveDate>,

    /// Only days on or before this date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date_argument)]
    pub to: Option<NaiveDate>,

    /// Only this exact date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date_argument)]
    pub on: Option<NaiveDate>,

    /// Only periods whose description contains this text (case-sensitive).
    /// May be repeated; every value must match.
    #[arg(long, short = 'g', value_name = "TEXT")]
    pub grep: Vec<String>,

    /// Two-letter language code for report labels (e.g. `en`, `de`).
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Keep days in file order instead of sorting them by date.
    #[arg(long)]
    pub keep_order: bool,
}
