//! Runtime settings.

use crate::portfolio::PortfolioStore;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Saved portfolio file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "portfolio_data.csv";

/// Environment variable overriding the saved portfolio file.
pub const DATA_FILE_ENV: &str = "FOLIO_DATA_FILE";

/// Default bar chart width in columns.
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Widest bar chart accepted; larger requests are clamped.
pub const MAX_CHART_WIDTH: usize = 200;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Path to the saved portfolio CSV
    pub data_file: PathBuf,
    /// Width of the longest bar in charts
    pub chart_width: usize,
    pub format: OutputFormat,
}

impl Settings {
    /// Resolve settings from command-line values and the environment.
    ///
    /// The data file comes from `data_file`, then `FOLIO_DATA_FILE`, then
    /// `portfolio_data.csv` in the working directory.
    pub fn resolve(data_file: Option<PathBuf>, chart_width: Option<usize>, json: bool) -> Self {
        Self {
            data_file: resolve_data_file(data_file, env::var(DATA_FILE_ENV).ok()),
            chart_width: chart_width
                .unwrap_or(DEFAULT_CHART_WIDTH)
                .clamp(1, MAX_CHART_WIDTH),
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }

    /// Store backed by the configured data file.
    pub fn store(&self) -> PortfolioStore {
        PortfolioStore::new(self.data_file.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            chart_width: DEFAULT_CHART_WIDTH,
            format: OutputFormat::Text,
        }
    }
}

fn resolve_data_file(flag: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    flag.or_else(|| {
        env_value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_file_precedence() {
        let flag = Some(PathBuf::from("flag.csv"));
        let env_value = Some("env.csv".to_string());

        assert_eq!(
            resolve_data_file(flag, env_value.clone()),
            PathBuf::from("flag.csv")
        );
        assert_eq!(resolve_data_file(None, env_value), PathBuf::from("env.csv"));
        assert_eq!(
            resolve_data_file(None, None),
            PathBuf::from(DEFAULT_DATA_FILE)
        );
    }

    #[test]
    fn test_blank_env_ignored() {
        assert_eq!(
            resolve_data_file(None, Some("  ".to_string())),
            PathBuf::from(DEFAULT_DATA_FILE)
        );
    }

    #[test]
    fn test_resolve_chart_width_and_format() {
        let settings = Settings::resolve(Some(PathBuf::from("x.csv")), Some(0), true);
        assert_eq!(settings.chart_width, 1);
        assert_eq!(settings.format, OutputFormat::Json);

        let settings = Settings::resolve(Some(PathBuf::from("x.csv")), None, false);
        assert_eq!(settings.chart_width, DEFAULT_CHART_WIDTH);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.store().path(), PathBuf::from("x.csv").as_path());

        let settings = Settings::resolve(Some(PathBuf::from("x.csv")), Some(usize::MAX), false);
        assert_eq!(settings.chart_width, MAX_CHART_WIDTH);
    }
}
