//! Daily mood series for charting.

use crate::analytics::average_weight;
use crate::clock::Clock;
use crate::constants::MAX_CHART_DAYS;
use crate::dates::{format_date, last_n_days};
use crate::mood::{Mood, MoodEntry};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// One day of the chart series.
///
/// Days without entries carry `value == 0.0` and mood neutral. Recognized
/// moods weigh at least 1, so only empty days (or days holding nothing but
/// unrecognized moods) come out at zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataPoint {
    pub date: String,
    pub mood: Mood,
    pub value: f64,
}

impl ChartDataPoint {
    /// Whether this point is the placeholder for a day with no entries.
    pub fn is_empty_day(&self) -> bool {
        self.value == 0.0
    }
}

/// Builds a series of exactly `days` points ending on the clock's today.
///
/// Each point averages the weights of that day's entries and is labelled with
/// the mood of the day's earliest entry by timestamp. Windows longer than
/// [`MAX_CHART_DAYS`] are cut to that length; the CLI and configuration reject
/// them before they get here.
///
/// # Examples
///
/// ```
/// use moodlog::chart::generate_chart_data;
/// use moodlog::clock::FixedClock;
/// use moodlog::mood::{Mood, MoodEntry};
/// use chrono::NaiveDate;
///
/// let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// let entries = vec![MoodEntry::new("1", Mood::Happy, "", "2024-01-15", 1)];
///
/// let points = generate_chart_data(&entries, 7, &clock);
/// assert_eq!(points.len(), 7);
/// assert_eq!(points[6].date, "2024-01-15");
/// assert_eq!(points[6].value, 9.0);
/// assert!(points[0].is_empty_day());
/// ```
pub fn generate_chart_data(entries: &[MoodEntry], days: usize, clock: &dyn Clock) -> Vec<ChartDataPoint> {
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.timestamp);

    let mut by_date: HashMap<&str, Vec<&MoodEntry>> = HashMap::new();
    for entry in sorted {
        by_date.entry(entry.date.as_str()).or_default().push(entry);
    }

    let days = if days > MAX_CHART_DAYS {
        warn!("Chart window of {} days cut to {}", days, MAX_CHART_DAYS);
        MAX_CHART_DAYS
    } else {
        days
    };

    let today = clock.today();
    debug!("Generating {} chart points ending {}", days, today);

    last_n_days(today, days)
        .into_iter()
        .map(|day| {
            let date = format_date(day);
            match by_date.get(date.as_str()) {
                Some(day_entries) => ChartDataPoint {
                    mood: day_entries
                        .first()
                        .and_then(|entry| entry.mood.known())
                        .unwrap_or(Mood::Neutral),
                    value: average_weight(day_entries.iter().copied()),
                    date,
                },
                None => ChartDataPoint {
                    date,
                    mood: Mood::Neutral,
                    value: 0.0,
                },
            }
        })
        .collect()
}
