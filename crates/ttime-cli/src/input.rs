//! Reading time logs from files or standard input.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ttime_core::WorkDay;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read standard input")?;
        Ok(content)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Parses every source in order and concatenates the work days.
///
/// Each source is parsed on its own, so a file must open its own
/// `[MM/YYYY]` section. No sources means standard input.
pub fn read_work_days(files: &[PathBuf]) -> Result<Vec<WorkDay>> {
    let stdin = [PathBuf::from(STDIN_PATH)];
    let sources = if files.is_empty() { &stdin[..] } else { files };

    let mut days = Vec::new();
    for path in sources {
        let content = read_source(path)?;
        let parsed = ttime_core::parse_str(&content)
            .with_context(|| format!("failed to parse {}", source_name(path)))?;
        tracing::debug!(source = %source_name(path), days = parsed.len(), "read time log");
        days.extend(parsed);
    }
    Ok(days)
}

fn source_name(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
