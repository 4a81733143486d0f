//! Trigger-word extraction from entry notes.

use crate::constants::{MAX_TOP_TRIGGERS, TRIGGER_WORDS};
use crate::mood::MoodEntry;

/// Returns up to five trigger words mentioned most often across `entries`.
///
/// Each note counts at most once per word, matched case-insensitively as a
/// substring. Ties keep the vocabulary order. Words never mentioned are left
/// out, so the result may be shorter than five.
///
/// # Examples
///
/// ```
/// use moodlog::mood::{Mood, MoodEntry};
/// use moodlog::reports::extract_top_triggers;
///
/// let entries = vec![
///     MoodEntry::new("1", Mood::Anxious, "Work deadline", "2024-01-02", 1),
///     MoodEntry::new("2", Mood::Sad, "work again", "2024-01-03", 2),
/// ];
/// assert_eq!(extract_top_triggers(&entries), vec!["work", "deadline"]);
/// ```
pub fn extract_top_triggers(entries: &[MoodEntry]) -> Vec<String> {
    let notes: Vec<String> = entries.iter().map(|entry| entry.note.to_lowercase()).collect();

    let mut counts: Vec<(&str, usize)> = TRIGGER_WORDS
        .iter()
        .map(|&word| {
            let count = notes.iter().filter(|note| note.contains(word)).count();
            (word, count)
        })
        .filter(|&(_, count)| count > 0)
        .collect();

    // Stable sort keeps vocabulary order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_TOP_TRIGGERS)
        .map(|(word, _)| word.to_string())
        .collect()
}
