//! Weekly and monthly mood reports.
//!
//! A report narrows the journal to one calendar window (Monday-Sunday week or
//! calendar month) by comparing `date` strings, runs the analytics over that
//! subset and adds window-specific insights:
//!
//! - weekly: number of sharp mood swings between consecutive entries
//! - monthly: most mentioned trigger words and rule-based recommendations

pub mod recommendations;
pub mod triggers;

pub use recommendations::generate_recommendations;
pub use triggers::extract_top_triggers;

use crate::analytics::compute_analytics;
use crate::constants::{MONTH_LABEL_FORMAT, MOOD_SWING_THRESHOLD};
use crate::dates::{month_range, week_range, DateRange};
use crate::mood::{Mood, MoodDistribution, MoodEntry};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

/// Mood summary for one Monday-to-Sunday week.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub week_start: String,
    pub week_end: String,
    pub entries: Vec<MoodEntry>,
    pub average_mood: f64,
    pub dominant_mood: Mood,
    pub mood_swings: usize,
}

/// Mood summary for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    /// Month label in `YYYY-MM` form.
    pub month: String,
    pub entries: Vec<MoodEntry>,
    pub average_mood: f64,
    pub mood_distribution: MoodDistribution,
    pub top_triggers: Vec<String>,
    pub recommendations: Vec<String>,
}

fn entries_within(entries: &[MoodEntry], range: &DateRange) -> Vec<MoodEntry> {
    entries
        .iter()
        .filter(|entry| range.contains(&entry.date))
        .cloned()
        .collect()
}

/// Builds the report for the week containing `anchor`.
///
/// # Examples
///
/// ```
/// use moodlog::mood::{Mood, MoodEntry};
/// use moodlog::reports::generate_weekly_report;
/// use chrono::NaiveDate;
///
/// let entries = vec![
///     MoodEntry::new("1", Mood::Happy, "", "2024-01-15", 1),
///     MoodEntry::new("2", Mood::Anxious, "", "2024-01-16", 2),
///     MoodEntry::new("3", Mood::Happy, "", "2024-01-22", 3),
/// ];
///
/// let report = generate_weekly_report(&entries, NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
/// assert_eq!(report.week_start, "2024-01-15");
/// assert_eq!(report.entries.len(), 2);
/// assert_eq!(report.mood_swings, 1);
/// ```
pub fn generate_weekly_report(entries: &[MoodEntry], anchor: NaiveDate) -> WeeklyReport {
    let range = week_range(anchor);
    let week_entries = entries_within(entries, &range);
    info!(
        "Generating weekly report for {}..{} ({} entries)",
        range.start,
        range.end,
        week_entries.len()
    );

    let analytics = compute_analytics(&week_entries);
    let mood_swings = count_mood_swings(&week_entries);

    WeeklyReport {
        week_start: range.start,
        week_end: range.end,
        entries: week_entries,
        average_mood: analytics.average_mood,
        dominant_mood: analytics.most_frequent_mood,
        mood_swings,
    }
}

/// Builds the report for the month containing `anchor`.
pub fn generate_monthly_report(entries: &[MoodEntry], anchor: NaiveDate) -> MonthlyReport {
    let range = month_range(anchor);
    let month_entries = entries_within(entries, &range);
    info!(
        "Generating monthly report for {} ({} entries)",
        anchor.format(MONTH_LABEL_FORMAT),
        month_entries.len()
    );

    let analytics = compute_analytics(&month_entries);
    let top_triggers = extract_top_triggers(&month_entries);
    let recommendations = generate_recommendations(&analytics);
    debug!("Top triggers: {:?}", top_triggers);

    MonthlyReport {
        month: anchor.format(MONTH_LABEL_FORMAT).to_string(),
        entries: month_entries,
        average_mood: analytics.average_mood,
        mood_distribution: analytics.mood_distribution,
        top_triggers,
        recommendations,
    }
}

/// Counts consecutive entry pairs (by timestamp) whose weights differ by 3 or more.
pub fn count_mood_swings(entries: &[MoodEntry]) -> usize {
    let mut weights: Vec<(i64, u8)> = entries
        .iter()
        .map(|entry| (entry.timestamp, entry.weight()))
        .collect();
    weights.sort_by_key(|&(timestamp, _)| timestamp);

    weights
        .windows(2)
        .filter(|pair| pair[0].1.abs_diff(pair[1].1) >= MOOD_SWING_THRESHOLD)
        .count()
}
