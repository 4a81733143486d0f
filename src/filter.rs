//! Compound filtering of journal entries.

use crate::mood::{Mood, MoodEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Criteria for selecting entries. Every field is optional and all provided
/// fields must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodFilter {
    /// Earliest `date` to keep, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Latest `date` to keep, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Moods to keep. An empty list keeps every mood.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_types: Option<Vec<Mood>>,
    /// Case-insensitive text matched against the note or mood label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl MoodFilter {
    /// Whether `entry` satisfies every criterion.
    pub fn matches(&self, entry: &MoodEntry) -> bool {
        if let Some(start) = self.start_date.as_deref() {
            if entry.date.as_str() < start {
                return false;
            }
        }
        if let Some(end) = self.end_date.as_deref() {
            if entry.date.as_str() > end {
                return false;
            }
        }
        if let Some(moods) = self.mood_types.as_deref().filter(|moods| !moods.is_empty()) {
            match entry.mood.known() {
                Some(mood) if moods.contains(&mood) => {}
                _ => return false,
            }
        }
        if let Some(term) = self.search_term.as_deref().filter(|term| !term.is_empty()) {
            let needle = term.to_lowercase();
            let in_note = entry.note.to_lowercase().contains(&needle);
            let in_mood = entry.mood.label().to_lowercase().contains(&needle);
            if !in_note && !in_mood {
                return false;
            }
        }
        true
    }
}

/// Returns the entries matching `filter`, newest timestamp first.
///
/// The input slice is left untouched; the result is always re-sorted
/// regardless of the input order.
///
/// # Examples
///
/// ```
/// use moodlog::filter::{filter_entries, MoodFilter};
/// use moodlog::mood::{Mood, MoodEntry};
///
/// let entries = vec![
///     MoodEntry::new("1", Mood::Happy, "Great day!", "2024-01-15", 1),
///     MoodEntry::new("2", Mood::Sad, "rainy", "2024-01-16", 2),
/// ];
/// let filter = MoodFilter {
///     search_term: Some("great".to_string()),
///     ..MoodFilter::default()
/// };
///
/// let found = filter_entries(&entries, &filter);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id, "1");
/// ```
pub fn filter_entries(entries: &[MoodEntry], filter: &MoodFilter) -> Vec<MoodEntry> {
    let mut filtered: Vec<MoodEntry> = entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    debug!("Filter kept {} of {} entries", filtered.len(), entries.len());
    filtered
}
