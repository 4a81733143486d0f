//! Configuration management for the moodlog application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODLOG_FILE`: Path to the entry store (defaults to ~/.local/share/moodlog/entries.json)
//! - `MOODLOG_CHART_DAYS`: Default number of days shown by `moodlog chart` (defaults to 30)
//! - `MOODLOG_LOG_FORMAT`: `text` or `json` log output (defaults to `text`)
//! - `HOME`: Used for expanding the default store path

use crate::constants::{
    DEFAULT_CHART_DAYS, DEFAULT_STORE_SUBPATH, ENV_VAR_HOME, ENV_VAR_MOODLOG_CHART_DAYS,
    ENV_VAR_MOODLOG_FILE, ENV_VAR_MOODLOG_LOG_FORMAT, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
    MAX_CHART_DAYS, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> AppResult<Self> {
        match raw.trim().to_lowercase().as_str() {
            LOG_FORMAT_TEXT => Ok(LogFormat::Text),
            LOG_FORMAT_JSON => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "Unknown log format '{}'. Expected '{}' or '{}'",
                other, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            ))),
        }
    }
}

/// Configuration for the moodlog application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodlog::Config;
/// use moodlog::config::LogFormat;
/// use std::path::PathBuf;
///
/// let config = Config {
///     store_path: PathBuf::from("/path/to/entries.json"),
///     chart_days: 14,
///     log_format: LogFormat::Text,
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// File holding all mood entries.
    pub store_path: PathBuf,

    /// Number of days in the chart series when none is given on the command line.
    pub chart_days: usize,

    /// Format of log output written to stderr.
    pub log_format: LogFormat,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("store_path", &REDACTED_PLACEHOLDER)
            .field("chart_days", &self.chart_days)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values.
    fn default() -> Self {
        Config {
            store_path: PathBuf::from(""),
            chart_days: DEFAULT_CHART_DAYS,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The store path is expanded with `shellexpand`, so `~` and `$VAR`
    /// references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The store path expansion fails or yields an empty path
    /// - `MOODLOG_CHART_DAYS` is not a positive integer
    /// - `MOODLOG_LOG_FORMAT` is neither `text` nor `json`
    pub fn load() -> AppResult<Self> {
        let store_path_str = env::var(ENV_VAR_MOODLOG_FILE).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_STORE_SUBPATH)
        });

        let expanded_path = shellexpand::full(&store_path_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let store_path = PathBuf::from(expanded_path.into_owned());

        if store_path.as_os_str().is_empty() {
            return Err(AppError::Config("Store path is empty".to_string()));
        }

        let chart_days = match env::var(ENV_VAR_MOODLOG_CHART_DAYS) {
            Ok(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_VAR_MOODLOG_CHART_DAYS, raw
                ))
            })?,
            Err(_) => DEFAULT_CHART_DAYS,
        };

        let log_format = match env::var(ENV_VAR_MOODLOG_LOG_FORMAT) {
            Ok(raw) => LogFormat::parse(&raw)?,
            Err(_) => LogFormat::default(),
        };

        Ok(Config {
            store_path,
            chart_days,
            log_format,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Store path is empty"
    /// - "Store path must be absolute"
    /// - "Chart window must be at least one day"
    /// - "Chart window must be at most 3650 days"
    pub fn validate(&self) -> AppResult<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(AppError::Config("Store path is empty".to_string()));
        }

        if !self.store_path.is_absolute() {
            return Err(AppError::Config("Store path must be absolute".to_string()));
        }

        if self.chart_days == 0 {
            return Err(AppError::Config(
                "Chart window must be at least one day".to_string(),
            ));
        }

        if self.chart_days > MAX_CHART_DAYS {
            return Err(AppError::Config(format!(
                "Chart window must be at most {} days",
                MAX_CHART_DAYS
            )));
        }

        Ok(())
    }
}
