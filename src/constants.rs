//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodlog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal mood journal with analytics and reports";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the entry store file.
pub const ENV_VAR_MOODLOG_FILE: &str = "MOODLOG_FILE";
/// Environment variable for the default chart window length in days.
pub const ENV_VAR_MOODLOG_CHART_DAYS: &str = "MOODLOG_CHART_DAYS";
/// Environment variable selecting the log output format.
pub const ENV_VAR_MOODLOG_LOG_FORMAT: &str = "MOODLOG_LOG_FORMAT";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default location of the entry store relative to the home directory.
pub const DEFAULT_STORE_SUBPATH: &str = ".local/share/moodlog/entries.json";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Logging Configuration
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// Store Format
/// Version string written into store and export files.
pub const STORE_FORMAT_VERSION: &str = "1.0.0";
/// Suffix of the advisory lock file kept next to the store.
pub const STORE_LOCK_SUFFIX: &str = ".lock";
/// Lowest accepted entry intensity.
pub const MIN_INTENSITY: u8 = 1;
/// Highest accepted entry intensity.
pub const MAX_INTENSITY: u8 = 10;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Format of the month label in monthly reports.
pub const MONTH_LABEL_FORMAT: &str = "%Y-%m";

// Analytics
/// Number of entries in each trend comparison window.
pub const TREND_WINDOW_SIZE: usize = 7;
/// Difference between window averages (on the 1-9 scale) needed to call a trend.
pub const TREND_THRESHOLD: f64 = 1.0;
/// Default number of days in a chart series.
pub const DEFAULT_CHART_DAYS: usize = 30;
/// Longest chart series accepted (ten years).
pub const MAX_CHART_DAYS: usize = 3650;
/// Minimum weight difference between consecutive entries counted as a swing.
pub const MOOD_SWING_THRESHOLD: u8 = 3;

// Reports
/// Words tallied as mood triggers in monthly reports, in tie-break order.
pub const TRIGGER_WORDS: &[&str] = &[
    "work",
    "stress",
    "family",
    "friend",
    "exercise",
    "sleep",
    "food",
    "weather",
    "meeting",
    "deadline",
    "celebration",
    "travel",
    "health",
    "money",
    "relationship",
];
/// Maximum number of triggers listed in a monthly report.
pub const MAX_TOP_TRIGGERS: usize = 5;
/// Maximum number of recommendations in a monthly report.
pub const MAX_RECOMMENDATIONS: usize = 3;
/// Average mood below which supportive suggestions are given.
pub const LOW_MOOD_THRESHOLD: f64 = 4.0;
/// Share of anxious entries above which calming suggestions are given.
pub const ANXIOUS_SHARE_THRESHOLD: f64 = 0.3;
/// Streak length below which a consistency nudge is given.
pub const MIN_HEALTHY_STREAK: u32 = 3;

// Output
/// Width in characters of a full bar in the text distribution display.
pub const MOOD_BAR_WIDTH: usize = 20;
