//! Rule-based suggestions attached to monthly reports.

use crate::analytics::{MoodAnalytics, MoodTrend};
use crate::constants::{
    ANXIOUS_SHARE_THRESHOLD, LOW_MOOD_THRESHOLD, MAX_RECOMMENDATIONS, MIN_HEALTHY_STREAK,
};
use crate::mood::Mood;

const TALK_TO_SOMEONE: &str = "Consider talking to a friend or family member about your feelings";
const LIGHT_EXERCISE: &str = "Try some light exercise or outdoor activities";
const BREATHING: &str = "Practice deep breathing exercises or meditation";
const LESS_CAFFEINE: &str = "Consider reducing caffeine intake";
const LOG_DAILY: &str = "Try to log your mood daily to build a consistent habit";
const SEEK_PROFESSIONAL: &str = "Consider reaching out to a mental health professional";
const KEEP_GOING: &str = "Keep up the great work! Your mood tracking is consistent";

/// Produces at most three suggestions from `analytics`.
///
/// Rules are checked in a fixed order (low average, frequent anxiety, short
/// streak, declining trend) and their suggestions accumulate; the first three
/// are kept. When no rule applies a single encouragement is returned.
pub fn generate_recommendations(analytics: &MoodAnalytics) -> Vec<String> {
    let mut recommendations: Vec<&str> = Vec::new();

    if analytics.average_mood < LOW_MOOD_THRESHOLD {
        recommendations.extend([TALK_TO_SOMEONE, LIGHT_EXERCISE]);
    }

    let anxious = analytics.mood_distribution.get(Mood::Anxious) as f64;
    if anxious > analytics.total_entries as f64 * ANXIOUS_SHARE_THRESHOLD {
        recommendations.extend([BREATHING, LESS_CAFFEINE]);
    }

    if analytics.streak_days < MIN_HEALTHY_STREAK {
        recommendations.push(LOG_DAILY);
    }

    if analytics.mood_trend == MoodTrend::Declining {
        recommendations.push(SEEK_PROFESSIONAL);
    }

    if recommendations.is_empty() {
        recommendations.push(KEEP_GOING);
    }

    recommendations
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(str::to_string)
        .collect()
}
