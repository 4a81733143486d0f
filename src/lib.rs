/*!
# moodlog

moodlog is a personal mood journal. Each entry records one of seven moods with a
short note, and the library turns a list of entries into aggregate statistics,
a fixed-length daily series for charting, filtered views and weekly/monthly
reports with trigger words and recommendations.

## Architecture

The analytical core is a set of pure functions over `&[MoodEntry]`:

- `analytics`: totals, weighted average, distribution, trend and streak
- `chart`: one data point per calendar day over a trailing window
- `filter`: date range, mood set and free-text search
- `reports`: weekly and monthly summaries

Everything stateful sits around that core:

- `store`: the JSON entry file, with atomic writes and an advisory lock
- `clock`: the injected source of "today"
- `config`: environment-driven settings
- `cli` / `commands`: argument parsing and command execution

## Usage Example

```rust
use moodlog::{compute_analytics, Mood, MoodEntry, MoodTrend};

let entries = vec![
    MoodEntry::new("1", Mood::Happy, "Great day!", "2024-01-15", 1_705_312_800_000),
    MoodEntry::new("2", Mood::Calm, "Quiet evening", "2024-01-14", 1_705_226_400_000),
];

let analytics = compute_analytics(&entries);
assert_eq!(analytics.total_entries, 2);
assert_eq!(analytics.average_mood, 8.0);
assert_eq!(analytics.mood_trend, MoodTrend::Stable);
assert_eq!(analytics.streak_days, 2);
```
*/

/// Aggregate statistics over a set of entries
pub mod analytics;
/// Daily series for charting
pub mod chart;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Source of the current date and time
pub mod clock;
/// Execution and rendering of CLI commands
pub mod commands;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Calendar helpers shared by the analytics functions
pub mod dates;
/// Error types and utilities for error handling
pub mod errors;
/// Entry filtering
pub mod filter;
/// Moods, weights and the entry record
pub mod mood;
/// Weekly and monthly reports
pub mod reports;
/// Persistent entry storage
pub mod store;

// Re-export important types for convenience
pub use analytics::{compute_analytics, MoodAnalytics, MoodTrend};
pub use chart::{generate_chart_data, ChartDataPoint};
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use filter::{filter_entries, MoodFilter};
pub use mood::{Mood, MoodDistribution, MoodEntry, RecordedMood};
pub use reports::{generate_monthly_report, generate_weekly_report, MonthlyReport, WeeklyReport};
pub use store::EntryStore;
