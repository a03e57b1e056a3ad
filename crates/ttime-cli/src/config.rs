//! Configuration loading and management.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::labels::Labels;

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Two-letter language code for report labels. Detected from the locale
    /// when unset.
    pub language: Option<String>,

    /// Sort work days by date before grouping them into weeks.
    pub sort_days: bool,

    /// Label overrides keyed by language code.
    pub labels: HashMap<String, Labels>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut languages: Vec<_> = self.labels.keys().collect();
        languages.sort();
        f.debug_struct("Config")
            .field("language", &self.language)
            .field("sort_days", &self.sort_days)
            .field("labels", &languages)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            sort_days: true,
            labels: HashMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location, then `config_path`
    /// if given, then `TTIME_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // TTIME_LANGUAGE, TTIME_SORT_DAYS, ...
        figment = figment.merge(Env::prefixed("TTIME_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for ttime.
///
/// On Linux: `~/.config/ttime`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ttime"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use figment::Jail;

    #[test]
    fn test_dirs_config_path_ends_with_ttime() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "ttime");
    }

    #[test]
    fn test_default_config_sorts_days() {
        let config = Config::default();
        assert!(config.sort_days);
        assert!(config.language.is_none());
        assert!(config.labels.is_empty());
    }

    #[test]
    fn test_load_from_file_and_env() {
        Jail::expect_with(|jail| {
            let dir = jail.directory().to_path_buf();
            jail.set_env("HOME", dir.display());
            jail.set_env("XDG_CONFIG_HOME", dir.join("xdg").display());
            jail.create_file(
                "custom.toml",
                r#"
                    language = "de"
                    sort_days = false

                    [labels.de]
                    total = "Summe"
                "#,
            )?;
            jail.set_env("TTIME_LANGUAGE", "fr");

            let config = Config::load_from(Some(Path::new("custom.toml")))?;
            assert_eq!(config.language.as_deref(), Some("fr"));
            assert!(!config.sort_days);
            assert_eq!(config.labels["de"].total.as_deref(), Some("Summe"));
            assert!(config.labels["de"].calendar_week.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|jail| {
            let dir = jail.directory().to_path_buf();
            jail.set_env("HOME", dir.display());
            jail.set_env("XDG_CONFIG_HOME", dir.join("xdg").display());

            let config = Config::load_from(Some(Path::new("does-not-exist.toml")))?;
            assert!(config.sort_days);
            assert!(config.language.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_debug_lists_label_languages() {
        let mut config = Config::default();
        config.labels.insert("de".to_string(), Labels::default());
        let debug = format!("{config:?}");
        assert!(debug.contains(r#"labels: ["de"]"#), "{debug}");
    }
}
