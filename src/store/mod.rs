//! JSON file storage for mood entries.
//!
//! The store is the only stateful piece of moodlog. It keeps every entry in a
//! single JSON document shaped like an export file:
//!
//! ```json
//! { "entries": [ ... ], "exportDate": "2024-01-15T10:00:00+01:00", "version": "1.0.0" }
//! ```
//!
//! so an export can be imported elsewhere unchanged. Each read hands the full
//! entry list to the pure analytics functions; nothing is cached between calls.
//!
//! Writes go to a temporary file in the same directory which is then renamed
//! over the store, and all read-modify-write cycles hold an exclusive advisory
//! lock on a sidecar `.lock` file.

mod lock;

use crate::clock::Clock;
use crate::constants::{MAX_INTENSITY, MIN_INTENSITY, STORE_FORMAT_VERSION};
use crate::dates::format_date;
use crate::errors::{AppResult, StoreError};
use crate::mood::{Mood, MoodEntry};
use chrono::{NaiveDate, SecondsFormat};
use lock::StoreLock;
use serde::{Deserialize, Serialize};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use uuid::Uuid;

/// On-disk layout of the store and of export files.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreDocument {
    entries: Vec<MoodEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    export_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

/// Fields of an entry about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub mood: Mood,
    pub note: String,
    /// Day the entry belongs to; defaults to today.
    pub date: Option<NaiveDate>,
    pub intensity: Option<u8>,
    pub tags: Vec<String>,
}

impl NewEntry {
    /// An entry for today with no intensity or tags.
    pub fn new(mood: Mood, note: impl Into<String>) -> Self {
        NewEntry {
            mood,
            note: note.into(),
            date: None,
            intensity: None,
            tags: Vec::new(),
        }
    }
}

/// Partial changes to an existing entry. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryUpdate {
    pub mood: Option<Mood>,
    pub note: Option<String>,
    pub date: Option<NaiveDate>,
    pub intensity: Option<u8>,
    pub tags: Option<Vec<String>>,
}

impl EntryUpdate {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &EntryUpdate::default()
    }
}

/// File-backed collection of mood entries.
pub struct EntryStore {
    path: PathBuf,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for EntryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl EntryStore {
    /// Opens the store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>, clock: Box<dyn Clock>) -> Self {
        EntryStore {
            path: path.into(),
            clock,
        }
    }

    /// Location of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every entry in stored order. A missing file is an empty journal.
    pub fn load(&self) -> AppResult<Vec<MoodEntry>> {
        read_document(&self.path).map(|doc| doc.map(|d| d.entries).unwrap_or_default())
    }

    /// Entries dated `date`, newest first.
    pub fn entries_on(&self, date: NaiveDate) -> AppResult<Vec<MoodEntry>> {
        let wanted = format_date(date);
        let mut entries: Vec<MoodEntry> = self
            .load()?
            .into_iter()
            .filter(|entry| entry.date == wanted)
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    /// Records a new entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidEntry` if the note is blank or the
    /// intensity is outside 1-10, plus any I/O or locking error.
    pub fn add(&self, new_entry: NewEntry) -> AppResult<MoodEntry> {
        validate_note(&new_entry.note)?;
        validate_intensity(new_entry.intensity)?;

        let now = self.clock.now();
        let entry = MoodEntry {
            id: Uuid::new_v4().to_string(),
            mood: new_entry.mood.into(),
            note: new_entry.note,
            date: format_date(new_entry.date.unwrap_or_else(|| now.date_naive())),
            timestamp: now.timestamp_millis(),
            intensity: new_entry.intensity,
            tags: (!new_entry.tags.is_empty()).then_some(new_entry.tags),
        };

        self.modify(|entries| {
            entries.insert(0, entry.clone());
            Ok(())
        })?;
        info!("Added {} entry {} for {}", entry.mood, entry.id, entry.date);
        Ok(entry)
    }

    /// Applies `update` to the entry with `id` and returns the new version.
    ///
    /// The timestamp is kept, so changing `date` lets the two diverge.
    pub fn update(&self, id: &str, update: EntryUpdate) -> AppResult<MoodEntry> {
        if let Some(note) = update.note.as_deref() {
            validate_note(note)?;
        }
        validate_intensity(update.intensity)?;

        let updated = self.modify(|entries| {
            let entry = entries
                .iter_mut()
                .find(|entry| entry.id == id)
                .ok_or_else(|| StoreError::EntryNotFound(id.to_string()))?;

            if let Some(mood) = update.mood {
                entry.mood = mood.into();
            }
            if let Some(note) = update.note {
                entry.note = note;
            }
            if let Some(date) = update.date {
                entry.date = format_date(date);
            }
            if let Some(intensity) = update.intensity {
                entry.intensity = Some(intensity);
            }
            if let Some(tags) = update.tags {
                entry.tags = Some(tags);
            }
            Ok(entry.clone())
        })?;
        info!("Updated entry {}", id);
        Ok(updated)
    }

    /// Removes the entry with `id` and returns it.
    pub fn delete(&self, id: &str) -> AppResult<MoodEntry> {
        let removed = self.modify(|entries| {
            let position = entries
                .iter()
                .position(|entry| entry.id == id)
                .ok_or_else(|| StoreError::EntryNotFound(id.to_string()))?;
            Ok(entries.remove(position))
        })?;
        info!("Deleted entry {}", id);
        Ok(removed)
    }

    /// Removes every entry, returning how many there were.
    pub fn clear(&self) -> AppResult<usize> {
        let removed = self.modify(|entries| {
            let count = entries.len();
            entries.clear();
            Ok(count)
        })?;
        info!("Cleared {} entries", removed);
        Ok(removed)
    }

    /// Writes all entries to `destination` as an export document.
    pub fn export_to(&self, destination: &Path) -> AppResult<usize> {
        let _lock = StoreLock::acquire(&self.path)?;
        let entries = self.load()?;
        let count = entries.len();
        self.write_document(destination, entries)?;
        info!("Exported {} entries to {:?}", count, destination);
        Ok(count)
    }

    /// Replaces every entry with those found in the export at `source`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Json` for malformed JSON and
    /// `StoreError::InvalidImport` when the document has no `entries` array.
    pub fn import_from(&self, source: &Path) -> AppResult<usize> {
        let raw = fs::read_to_string(source)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        let entries_value = value
            .get("entries")
            .filter(|entries| entries.is_array())
            .cloned()
            .ok_or_else(|| StoreError::InvalidImport("missing 'entries' array".to_string()))?;
        let imported: Vec<MoodEntry> = serde_json::from_value(entries_value)?;
        let count = imported.len();

        self.modify(move |entries| {
            *entries = imported;
            Ok(())
        })?;
        info!("Imported {} entries from {:?}", count, source);
        Ok(count)
    }

    /// Runs one locked read-modify-write cycle.
    fn modify<T, F>(&self, change: F) -> AppResult<T>
    where
        F: FnOnce(&mut Vec<MoodEntry>) -> AppResult<T>,
    {
        let _lock = StoreLock::acquire(&self.path)?;
        let mut entries = self.load()?;
        let result = change(&mut entries)?;
        self.write_document(&self.path, entries)?;
        Ok(result)
    }

    fn write_document(&self, destination: &Path, entries: Vec<MoodEntry>) -> AppResult<()> {
        let document = StoreDocument {
            entries,
            export_date: Some(self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, false)),
            version: Some(STORE_FORMAT_VERSION.to_string()),
        };

        let parent = ensure_parent_dir(destination)?;
        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(destination).map_err(|e| e.error)?;

        debug!(
            "Wrote {} entries to {:?}",
            document.entries.len(),
            destination
        );
        Ok(())
    }
}

fn read_document(path: &Path) -> AppResult<Option<StoreDocument>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Store file {:?} not found, starting empty", path);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Creates the parent directory of `path` with owner-only permissions if needed.
fn ensure_parent_dir(path: &Path) -> AppResult<&Path> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent)?;
        #[cfg(unix)]
        fs::set_permissions(parent, fs::Permissions::from_mode(0o700))?;
        debug!("Created store directory {:?}", parent);
    }
    Ok(parent)
}

fn validate_note(note: &str) -> AppResult<()> {
    if note.trim().is_empty() {
        return Err(StoreError::InvalidEntry("note cannot be empty".to_string()).into());
    }
    Ok(())
}

fn validate_intensity(intensity: Option<u8>) -> AppResult<()> {
    match intensity {
        Some(value) if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&value) => {
            Err(StoreError::InvalidEntry(format!(
                "intensity must be between {} and {}, got {}",
                MIN_INTENSITY, MAX_INTENSITY, value
            ))
            .into())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::errors::AppError;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> EntryStore {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        EntryStore::new(dir.path().join("entries.json"), Box::new(clock))
    }

    #[test]
    fn test_missing_file_is_empty_journal() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_defaults_date_to_today_and_assigns_id() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let entry = store.add(NewEntry::new(Mood::Calm, "quiet morning")).unwrap();
        assert_eq!(entry.date, "2024-01-15");
        assert!(Uuid::parse_str(&entry.id).is_ok());
        assert!(entry.tags.is_none());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![entry]);
    }

    #[test]
    fn test_add_rejects_blank_note_and_bad_intensity() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.add(NewEntry::new(Mood::Calm, "   ")).unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::InvalidEntry(_))));

        let mut new_entry = NewEntry::new(Mood::Calm, "ok");
        new_entry.intensity = Some(11);
        let err = store.add(new_entry).unwrap_err();
        assert!(err.to_string().contains("intensity"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_update_changes_only_given_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let entry = store.add(NewEntry::new(Mood::Sad, "rough day")).unwrap();

        let update = EntryUpdate {
            mood: Some(Mood::Neutral),
            date: NaiveDate::from_ymd_opt(2024, 1, 10),
            ..EntryUpdate::default()
        };
        let updated = store.update(&entry.id, update).unwrap();
        assert_eq!(updated.mood.known(), Some(Mood::Neutral));
        assert_eq!(updated.note, "rough day");
        assert_eq!(updated.date, "2024-01-10");
        assert_eq!(updated.timestamp, entry.timestamp);
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.update("nope", EntryUpdate::default()).unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::EntryNotFound(_))));
        let err = store.delete("nope").unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::EntryNotFound(_))));
    }

    #[test]
    fn test_delete_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let first = store.add(NewEntry::new(Mood::Happy, "one")).unwrap();
        store.add(NewEntry::new(Mood::Happy, "two")).unwrap();

        let removed = store.delete(&first.id).unwrap();
        assert_eq!(removed.note, "one");
        assert_eq!(store.load().unwrap().len(), 1);

        assert_eq!(store.clear().unwrap(), 1);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_entries_on_filters_by_date() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add(NewEntry::new(Mood::Happy, "today")).unwrap();
        let mut older = NewEntry::new(Mood::Sad, "earlier");
        older.date = NaiveDate::from_ymd_opt(2024, 1, 1);
        store.add(older).unwrap();

        let today = store
            .entries_on(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
            .unwrap();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].note, "today");
    }

    #[test]
    fn test_import_rejects_document_without_entries() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let source = dir.path().join("bad.json");

        fs::write(&source, r#"{"items": []}"#).unwrap();
        let err = store.import_from(&source).unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::InvalidImport(_))));

        fs::write(&source, "not json").unwrap();
        let err = store.import_from(&source).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    #[cfg(unix)]
    fn test_first_write_creates_private_directory() {
        let dir = TempDir::new().unwrap();
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        let store = EntryStore::new(dir.path().join("moodlog").join("entries.json"), Box::new(clock));

        store.add(NewEntry::new(Mood::Calm, "first")).unwrap();

        let mode = fs::metadata(dir.path().join("moodlog"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn test_store_file_uses_export_layout() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add(NewEntry::new(Mood::Excited, "launch")).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], STORE_FORMAT_VERSION);
        assert_eq!(value["entries"][0]["mood"], "excited");
        assert!(value["exportDate"].as_str().unwrap().starts_with("2024-01-15"));
    }
}
