//! Mood vocabulary and the journal entry type.
//!
//! This module contains the closed seven-mood enumeration together with its
//! fixed weight scale, plus the `MoodEntry` record every computation consumes.
//! Mood labels read from disk that fall outside the enumeration are kept
//! verbatim as [`RecordedMood::Unrecognized`] so that bad data never stops a
//! computation; such entries carry zero weight and are absent from every
//! distribution.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the seven moods a journal entry can record.
///
/// The declaration order (happy, sad, anxious, excited, calm, angry, neutral)
/// is canonical: distributions are listed in this order and ties between
/// equally frequent moods resolve to the earliest mood in it.
///
/// # Examples
///
/// ```
/// use moodlog::mood::Mood;
///
/// assert_eq!(Mood::Happy.weight(), 9);
/// assert_eq!(Mood::Angry.weight(), 1);
/// assert_eq!("calm".parse::<Mood>().unwrap(), Mood::Calm);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Excited,
    Calm,
    Angry,
    Neutral,
}

impl Mood {
    /// All moods in declaration order.
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Excited,
        Mood::Calm,
        Mood::Angry,
        Mood::Neutral,
    ];

    /// Numeric weight of the mood on the 1-9 scale used by every aggregate.
    ///
    /// The scale is intentionally uneven: sad and angry are not mirror images
    /// of happy and excited.
    pub fn weight(self) -> u8 {
        match self {
            Mood::Happy => 9,
            Mood::Excited => 8,
            Mood::Calm => 7,
            Mood::Neutral => 5,
            Mood::Anxious => 3,
            Mood::Sad => 2,
            Mood::Angry => 1,
        }
    }

    /// Lowercase label used in storage and output.
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Angry => "angry",
            Mood::Neutral => "neutral",
        }
    }

    /// Position of the mood in declaration order.
    pub fn index(self) -> usize {
        match self {
            Mood::Happy => 0,
            Mood::Sad => 1,
            Mood::Anxious => 2,
            Mood::Excited => 3,
            Mood::Calm => 4,
            Mood::Angry => 5,
            Mood::Neutral => 6,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name one of the seven moods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mood '{0}'. Expected one of: happy, sad, anxious, excited, calm, angry, neutral")]
pub struct ParseMoodError(pub String);

impl FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == lowered)
            .ok_or_else(|| ParseMoodError(s.to_string()))
    }
}

/// The mood label as it was found in stored data.
///
/// Serialized as a bare string either way, so unknown labels survive a
/// load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordedMood {
    /// One of the seven moods.
    Known(Mood),
    /// A label outside the enumeration (legacy or corrupted data).
    Unrecognized(String),
}

impl RecordedMood {
    /// The recognized mood, if any.
    pub fn known(&self) -> Option<Mood> {
        match self {
            RecordedMood::Known(mood) => Some(*mood),
            RecordedMood::Unrecognized(_) => None,
        }
    }

    /// Weight of the mood; unrecognized labels weigh nothing.
    pub fn weight(&self) -> u8 {
        self.known().map(Mood::weight).unwrap_or(0)
    }

    /// The label text, recognized or not.
    pub fn label(&self) -> &str {
        match self {
            RecordedMood::Known(mood) => mood.as_str(),
            RecordedMood::Unrecognized(raw) => raw,
        }
    }
}

impl From<Mood> for RecordedMood {
    fn from(mood: Mood) -> Self {
        RecordedMood::Known(mood)
    }
}

impl fmt::Display for RecordedMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single mood journal entry.
///
/// `date` is the calendar day the entry belongs to (`YYYY-MM-DD`), while
/// `timestamp` is the creation instant in milliseconds since the epoch. The two
/// usually agree but may drift apart when an entry is edited; computations use
/// `date` for day bucketing and `timestamp` for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub mood: RecordedMood,
    #[serde(default)]
    pub note: String,
    pub date: String,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl MoodEntry {
    /// Creates an entry without intensity or tags.
    pub fn new(
        id: impl Into<String>,
        mood: impl Into<RecordedMood>,
        note: impl Into<String>,
        date: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        MoodEntry {
            id: id.into(),
            mood: mood.into(),
            note: note.into(),
            date: date.into(),
            timestamp,
            intensity: None,
            tags: None,
        }
    }

    /// Sets the intensity.
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Sets the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Weight of the entry's mood (0 when unrecognized).
    pub fn weight(&self) -> u8 {
        self.mood.weight()
    }
}

/// Count of entries per mood, always covering all seven moods.
///
/// Serializes as a JSON object keyed by mood label in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodDistribution {
    counts: [usize; 7],
}

impl MoodDistribution {
    /// Tallies the recognized moods of `entries`.
    pub fn from_entries(entries: &[MoodEntry]) -> Self {
        let mut distribution = MoodDistribution::default();
        for mood in entries.iter().filter_map(|entry| entry.mood.known()) {
            distribution.counts[mood.index()] += 1;
        }
        distribution
    }

    /// Number of entries recorded with `mood`.
    pub fn get(&self, mood: Mood) -> usize {
        self.counts[mood.index()]
    }

    /// Iterates `(mood, count)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Mood, usize)> + '_ {
        Mood::ALL.into_iter().map(move |mood| (mood, self.get(mood)))
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// The mood with the strictly highest count.
    ///
    /// Ties resolve to the earliest mood in declaration order; an all-zero
    /// distribution yields happy, the first mood.
    pub fn most_frequent(&self) -> Mood {
        self.iter()
            .fold(None, |best: Option<(Mood, usize)>, (mood, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((mood, count)),
            })
            .map(|(mood, _)| mood)
            .unwrap_or(Mood::Happy)
    }
}

impl Serialize for MoodDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Mood::ALL.len()))?;
        for (mood, count) in self.iter() {
            map.serialize_entry(mood.as_str(), &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_match_scale() {
        let weights: Vec<u8> = Mood::ALL.iter().map(|m| m.weight()).collect();
        assert_eq!(weights, vec![9, 2, 3, 8, 7, 1, 5]);
    }

    #[test]
    fn test_index_follows_declaration_order() {
        for (position, mood) in Mood::ALL.iter().enumerate() {
            assert_eq!(mood.index(), position);
        }
    }

    #[test]
    fn test_parse_mood_is_case_insensitive() {
        assert_eq!("Happy".parse::<Mood>().unwrap(), Mood::Happy);
        assert_eq!(" ANXIOUS ".parse::<Mood>().unwrap(), Mood::Anxious);
        let err = "bored".parse::<Mood>().unwrap_err();
        assert!(err.to_string().contains("bored"));
    }

    #[test]
    fn test_unrecognized_mood_survives_deserialization() {
        let json = r#"{"id":"1","mood":"bored","note":"meh","date":"2024-01-01","timestamp":5}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.mood, RecordedMood::Unrecognized("bored".to_string()));
        assert_eq!(entry.weight(), 0);

        let back = serde_json::to_string(&entry).unwrap();
        assert!(back.contains(r#""mood":"bored""#));
    }

    #[test]
    fn test_known_mood_deserializes_to_enum() {
        let json = r#"{"_id":"abc","mood":"calm","note":"ok","date":"2024-01-01","timestamp":1,"intensity":4,"tags":["a"]}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "abc");
        assert_eq!(entry.mood.known(), Some(Mood::Calm));
        assert_eq!(entry.intensity, Some(4));
        assert_eq!(entry.tags, Some(vec!["a".to_string()]));
    }

    #[test]
    fn test_distribution_skips_unrecognized() {
        let entries = vec![
            MoodEntry::new("1", Mood::Sad, "", "2024-01-01", 1),
            MoodEntry::new("2", RecordedMood::Unrecognized("x".into()), "", "2024-01-01", 2),
        ];
        let distribution = MoodDistribution::from_entries(&entries);
        assert_eq!(distribution.get(Mood::Sad), 1);
        assert_eq!(distribution.total(), 1);
    }

    #[test]
    fn test_most_frequent_prefers_declaration_order_on_ties() {
        let entries = vec![
            MoodEntry::new("1", Mood::Neutral, "", "2024-01-01", 1),
            MoodEntry::new("2", Mood::Calm, "", "2024-01-01", 2),
        ];
        let distribution = MoodDistribution::from_entries(&entries);
        assert_eq!(distribution.most_frequent(), Mood::Calm);
    }

    #[test]
    fn test_distribution_serializes_all_seven_keys_in_order() {
        let json = serde_json::to_string(&MoodDistribution::default()).unwrap();
        assert_eq!(
            json,
            r#"{"happy":0,"sad":0,"anxious":0,"excited":0,"calm":0,"angry":0,"neutral":0}"#
        );
    }
}
