//! Report labels per language.
//!
//! The active language is resolved once at startup and passed down; nothing
//! here reads or writes process-wide locale state after that.

use std::collections::HashMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Locale environment variables, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Optional label texts for the report. Absent fields fall back to the
/// renderer's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub total: Option<String>,
    pub total_hours: Option<String>,
    pub total_days: Option<String>,
    pub calendar_week: Option<String>,
    /// Monday through Sunday.
    pub weekdays: Option<Vec<String>>,
}

impl Labels {
    /// Short weekday name, if a full table of seven is present.
    pub fn weekday(&self, weekday: Weekday) -> Option<&str> {
        let names = self.weekdays.as_ref().filter(|names| names.len() == 7)?;
        names
            .get(weekday.num_days_from_monday() as usize)
            .map(String::as_str)
    }

    /// Fields set in `other` replace ours.
    #[must_use]
    pub fn overlay(self, other: &Self) -> Self {
        Self {
            total: other.total.clone().or(self.total),
            total_hours: other.total_hours.clone().or(self.total_hours),
            total_days: other.total_days.clone().or(self.total_days),
            calendar_week: other.calendar_week.clone().or(self.calendar_week),
            weekdays: other.weekdays.clone().or(self.weekdays),
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Built-in label set for a two-letter language code.
pub fn builtin(language: &str) -> Option<Labels> {
    match language {
        "en" => Some(Labels {
            total: Some("total".into()),
            total_hours: Some("total hrs.".into()),
            total_days: Some("total days".into()),
            calendar_week: Some("CW".into()),
            weekdays: Some(owned(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"])),
        }),
        "de" => Some(Labels {
            total: Some("gesamt".into()),
            total_hours: Some("gesamt Std.".into()),
            total_days: Some("gesamt Tage".into()),
            calendar_week: Some("KW".into()),
            weekdays: Some(owned(&["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"])),
        }),
        _ => None,
    }
}

/// Labels for `language`: the built-in set overlaid with user overrides.
///
/// Unknown languages without overrides give empty labels, not an error.
pub fn lookup(language: &str, overrides: &HashMap<String, Labels>) -> Labels {
    let base = builtin(language);
    match (base, overrides.get(language)) {
        (Some(base), Some(user)) => base.overlay(user),
        (Some(base), None) => base,
        (None, Some(user)) => user.clone(),
        (None, None) => {
            tracing::debug!(language, "no labels for language, using renderer defaults");
            Labels::default()
        }
    }
}

/// Extracts a two-letter language code from a locale string such as
/// `de_DE.UTF-8`. `C` and `POSIX` carry no language.
pub fn language_from_locale(locale: &str) -> Option<String> {
    let code: String = locale
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .collect::<String>()
        .to_ascii_lowercase();
    if code.len() < 2 || code == "posix" {
        return None;
    }
    Some(code[..2].to_string())
}

/// Picks the report language: explicit flag, then config, then the locale
/// environment, then [`DEFAULT_LANGUAGE`].
pub fn resolve_language(flag: Option<&str>, configured: Option<&str>) -> String {
    resolve_language_with(flag, configured, |var| std::env::var(var).ok())
}

fn resolve_language_with(
    flag: Option<&str>,
    configured: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> String {
    flag.or(configured)
        .map(str::to_ascii_lowercase)
        .or_else(|| {
            LOCALE_VARS
                .iter()
                .filter_map(|&var| env(var))
                .find(|value| !value.is_empty())
                .and_then(|value| language_from_locale(&value))
        })
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}
