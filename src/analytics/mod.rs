//! Aggregate mood statistics over a set of journal entries.
//!
//! Everything here is a pure function of the entries passed in: nothing is
//! cached and nothing reads the clock. Callers recompute on every change.

use crate::constants::{TREND_THRESHOLD, TREND_WINDOW_SIZE};
use crate::dates::parse_entry_date;
use crate::mood::{Mood, MoodDistribution, MoodEntry};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Direction of recent mood compared to the period before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
}

impl fmt::Display for MoodTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MoodTrend::Improving => "improving",
            MoodTrend::Declining => "declining",
            MoodTrend::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Summary statistics for a collection of entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalytics {
    pub total_entries: usize,
    /// Mean mood weight per entry (not per day).
    pub average_mood: f64,
    pub mood_distribution: MoodDistribution,
    pub most_frequent_mood: Mood,
    pub mood_trend: MoodTrend,
    pub streak_days: u32,
    /// Date of the most recent entry by timestamp, or empty when there are none.
    pub last_entry_date: String,
}

impl MoodAnalytics {
    /// The analytics of an empty journal.
    pub fn empty() -> Self {
        MoodAnalytics {
            total_entries: 0,
            average_mood: 0.0,
            mood_distribution: MoodDistribution::default(),
            most_frequent_mood: Mood::Neutral,
            mood_trend: MoodTrend::Stable,
            streak_days: 0,
            last_entry_date: String::new(),
        }
    }
}

/// Computes distribution, average, trend and streak for `entries`.
///
/// # Examples
///
/// ```
/// use moodlog::analytics::{compute_analytics, MoodTrend};
/// use moodlog::mood::{Mood, MoodEntry};
///
/// let entries = vec![
///     MoodEntry::new("1", Mood::Happy, "Great day!", "2024-01-15", 3),
///     MoodEntry::new("2", Mood::Sad, "", "2024-01-14", 2),
///     MoodEntry::new("3", Mood::Excited, "", "2024-01-13", 1),
/// ];
///
/// let analytics = compute_analytics(&entries);
/// assert_eq!(analytics.total_entries, 3);
/// assert_eq!(analytics.most_frequent_mood, Mood::Happy);
/// assert_eq!(analytics.mood_trend, MoodTrend::Stable);
/// assert_eq!(analytics.streak_days, 3);
/// ```
pub fn compute_analytics(entries: &[MoodEntry]) -> MoodAnalytics {
    if entries.is_empty() {
        return MoodAnalytics::empty();
    }

    let mood_distribution = MoodDistribution::from_entries(entries);
    let average_mood = average_weight(entries);

    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.timestamp);

    let mood_trend = detect_trend(&sorted);
    let streak_days = calculate_streak_days(entries);
    let last_entry_date = sorted
        .last()
        .map(|entry| entry.date.clone())
        .unwrap_or_default();

    debug!(
        "Computed analytics over {} entries: average {:.2}, trend {}, streak {}",
        entries.len(),
        average_mood,
        mood_trend,
        streak_days
    );

    MoodAnalytics {
        total_entries: entries.len(),
        average_mood,
        most_frequent_mood: mood_distribution.most_frequent(),
        mood_distribution,
        mood_trend,
        streak_days,
        last_entry_date,
    }
}

/// Mean mood weight of `entries`, or 0 when empty.
pub fn average_weight<'a, I>(entries: I) -> f64
where
    I: IntoIterator<Item = &'a MoodEntry>,
{
    let (sum, count) = entries
        .into_iter()
        .fold((0u64, 0usize), |(sum, count), entry| {
            (sum + u64::from(entry.weight()), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Compares the last seven entries with the seven before them.
///
/// `sorted` must be in ascending timestamp order.
fn detect_trend(sorted: &[&MoodEntry]) -> MoodTrend {
    let n = sorted.len();
    let recent = &sorted[n.saturating_sub(TREND_WINDOW_SIZE)..];
    let older = &sorted[n.saturating_sub(2 * TREND_WINDOW_SIZE)..n.saturating_sub(TREND_WINDOW_SIZE)];

    if recent.is_empty() || older.is_empty() {
        return MoodTrend::Stable;
    }

    let recent_avg = average_weight(recent.iter().copied());
    let older_avg = average_weight(older.iter().copied());

    if recent_avg > older_avg + TREND_THRESHOLD {
        MoodTrend::Improving
    } else if recent_avg < older_avg - TREND_THRESHOLD {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    }
}

/// Counts consecutive journaling days ending at the latest entry date.
///
/// The walk starts from the most recent distinct `date`, not from today, so a
/// user who stopped journaling last week still reports the streak they had
/// then. Dates that are not valid `YYYY-MM-DD` strings are ignored.
///
/// # Examples
///
/// ```
/// use moodlog::analytics::calculate_streak_days;
/// use moodlog::mood::{Mood, MoodEntry};
///
/// let entries = vec![
///     MoodEntry::new("1", Mood::Calm, "", "2024-01-10", 1),
///     MoodEntry::new("2", Mood::Calm, "", "2024-01-09", 2),
///     MoodEntry::new("3", Mood::Calm, "", "2024-01-07", 3),
/// ];
/// assert_eq!(calculate_streak_days(&entries), 2);
/// ```
pub fn calculate_streak_days(entries: &[MoodEntry]) -> u32 {
    let days: BTreeSet<_> = entries
        .iter()
        .filter_map(|entry| parse_entry_date(&entry.date))
        .collect();

    let Some(&latest) = days.last() else {
        return 0;
    };

    let mut streak = 0;
    let mut cursor = Some(latest);
    while let Some(day) = cursor.filter(|day| days.contains(day)) {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::RecordedMood;

    fn entry(mood: Mood, date: &str, timestamp: i64) -> MoodEntry {
        MoodEntry::new(timestamp.to_string(), mood, "", date, timestamp)
    }

    #[test]
    fn test_empty_input_yields_zeroed_analytics() {
        let analytics = compute_analytics(&[]);
        assert_eq!(analytics, MoodAnalytics::empty());
        assert_eq!(analytics.mood_distribution.iter().count(), 7);
        assert_eq!(analytics.most_frequent_mood, Mood::Neutral);
        assert_eq!(analytics.last_entry_date, "");
    }

    #[test]
    fn test_average_divides_by_entry_count() {
        let entries = vec![
            entry(Mood::Happy, "2024-01-15", 3),
            entry(Mood::Sad, "2024-01-14", 2),
            entry(Mood::Excited, "2024-01-13", 1),
        ];
        let analytics = compute_analytics(&entries);
        assert!((analytics.average_mood - 19.0 / 3.0).abs() < 1e-9);
        assert_eq!(analytics.most_frequent_mood, Mood::Happy);
        assert_eq!(analytics.last_entry_date, "2024-01-15");
    }

    #[test]
    fn test_unrecognized_mood_counts_toward_total_with_zero_weight() {
        let entries = vec![
            entry(Mood::Happy, "2024-01-15", 1),
            MoodEntry::new("x", RecordedMood::Unrecognized("meh".into()), "", "2024-01-15", 2),
        ];
        let analytics = compute_analytics(&entries);
        assert_eq!(analytics.total_entries, 2);
        assert_eq!(analytics.mood_distribution.total(), 1);
        assert!((analytics.average_mood - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_strict_majority_wins_most_frequent() {
        let entries = vec![
            entry(Mood::Angry, "2024-01-01", 1),
            entry(Mood::Angry, "2024-01-02", 2),
            entry(Mood::Happy, "2024-01-03", 3),
        ];
        assert_eq!(compute_analytics(&entries).most_frequent_mood, Mood::Angry);
    }

    #[test]
    fn test_trend_improving_when_recent_window_beats_older() {
        let mut entries: Vec<MoodEntry> = (0..7)
            .map(|i| entry(Mood::Neutral, "2024-01-01", i))
            .collect();
        entries.extend((7..14).map(|i| entry(Mood::Excited, "2024-01-02", i)));
        assert_eq!(compute_analytics(&entries).mood_trend, MoodTrend::Improving);
    }

    #[test]
    fn test_trend_declining_and_stable() {
        let mut entries: Vec<MoodEntry> = (0..7)
            .map(|i| entry(Mood::Happy, "2024-01-01", i))
            .collect();
        entries.extend((7..14).map(|i| entry(Mood::Neutral, "2024-01-02", i)));
        assert_eq!(compute_analytics(&entries).mood_trend, MoodTrend::Declining);

        // A one-point difference is inside the threshold
        let mut entries: Vec<MoodEntry> = (0..7)
            .map(|i| entry(Mood::Excited, "2024-01-01", i))
            .collect();
        entries.extend((7..14).map(|i| entry(Mood::Calm, "2024-01-02", i)));
        assert_eq!(compute_analytics(&entries).mood_trend, MoodTrend::Stable);
    }

    #[test]
    fn test_trend_uses_partial_older_window() {
        // Eight entries: recent window holds seven, older window holds one
        let mut entries = vec![entry(Mood::Angry, "2024-01-01", 0)];
        entries.extend((1..8).map(|i| entry(Mood::Happy, "2024-01-02", i)));
        assert_eq!(compute_analytics(&entries).mood_trend, MoodTrend::Improving);

        let few: Vec<MoodEntry> = (0..7).map(|i| entry(Mood::Happy, "2024-01-01", i)).collect();
        assert_eq!(compute_analytics(&few).mood_trend, MoodTrend::Stable);
    }

    #[test]
    fn test_trend_follows_timestamp_not_input_order() {
        let mut entries: Vec<MoodEntry> = (7..14)
            .map(|i| entry(Mood::Happy, "2024-01-02", i))
            .collect();
        entries.extend((0..7).map(|i| entry(Mood::Angry, "2024-01-01", i)));
        assert_eq!(compute_analytics(&entries).mood_trend, MoodTrend::Improving);
    }

    #[test]
    fn test_single_entry_streak_is_one() {
        assert_eq!(calculate_streak_days(&[entry(Mood::Calm, "2020-05-05", 1)]), 1);
    }

    #[test]
    fn test_streak_counts_duplicate_days_once() {
        let entries = vec![
            entry(Mood::Calm, "2024-01-10", 1),
            entry(Mood::Sad, "2024-01-10", 2),
            entry(Mood::Calm, "2024-01-09", 3),
        ];
        assert_eq!(calculate_streak_days(&entries), 2);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let entries = vec![
            entry(Mood::Calm, "2024-03-01", 1),
            entry(Mood::Calm, "2024-02-29", 2),
            entry(Mood::Calm, "2024-02-28", 3),
        ];
        assert_eq!(calculate_streak_days(&entries), 3);
    }

    #[test]
    fn test_streak_anchors_on_latest_date_not_latest_timestamp() {
        // The newest timestamp was back-dated; the walk still starts from the latest date
        let entries = vec![
            entry(Mood::Calm, "2024-01-05", 1),
            entry(Mood::Calm, "2024-01-04", 2),
            entry(Mood::Calm, "2023-12-01", 3),
        ];
        assert_eq!(calculate_streak_days(&entries), 2);
    }

    #[test]
    fn test_streak_ignores_malformed_dates() {
        let entries = vec![
            entry(Mood::Calm, "not-a-date", 1),
            entry(Mood::Calm, "2024-01-04", 2),
        ];
        assert_eq!(calculate_streak_days(&entries), 1);
        assert_eq!(calculate_streak_days(&[entry(Mood::Calm, "garbage", 1)]), 0);
    }
}
