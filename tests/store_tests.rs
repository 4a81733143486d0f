use chrono::NaiveDate;
use moodlog::clock::FixedClock;
use moodlog::errors::{AppError, LockError, StoreError};
use moodlog::store::{EntryStore, NewEntry};
use moodlog::{compute_analytics, Mood, RecordedMood};
use std::fs;
use tempfile::TempDir;

fn store_at(path: std::path::PathBuf) -> EntryStore {
    let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    EntryStore::new(path, Box::new(clock))
}

#[test]
fn test_export_then_import_round_trips_entries() {
    let dir = TempDir::new().unwrap();
    let source = store_at(dir.path().join("source.json"));

    let mut tagged = NewEntry::new(Mood::Excited, "trip planning");
    tagged.intensity = Some(8);
    tagged.tags = vec!["travel".to_string()];
    source.add(tagged).unwrap();
    source.add(NewEntry::new(Mood::Calm, "read a book")).unwrap();

    let export_path = dir.path().join("exports").join("backup.json");
    assert_eq!(source.export_to(&export_path).unwrap(), 2);

    let target = store_at(dir.path().join("target.json"));
    target.add(NewEntry::new(Mood::Sad, "will be replaced")).unwrap();
    assert_eq!(target.import_from(&export_path).unwrap(), 2);

    assert_eq!(target.load().unwrap(), source.load().unwrap());
}

#[test]
fn test_import_accepts_legacy_ids_and_unknown_moods() {
    let dir = TempDir::new().unwrap();
    let store = store_at(dir.path().join("entries.json"));
    let legacy = dir.path().join("legacy.json");
    fs::write(
        &legacy,
        r#"{
  "entries": [
    { "_id": "legacy-1", "mood": "happy", "note": "old app", "date": "2023-12-31", "timestamp": 1704020400000 },
    { "id": "legacy-2", "mood": "bored", "note": "", "date": "2023-12-30", "timestamp": 1703934000000 }
  ],
  "exportDate": "2024-01-01T00:00:00.000Z",
  "version": "1.0.0"
}"#,
    )
    .unwrap();

    assert_eq!(store.import_from(&legacy).unwrap(), 2);
    let entries = store.load().unwrap();
    assert_eq!(entries[0].id, "legacy-1");
    assert_eq!(entries[1].mood, RecordedMood::Unrecognized("bored".to_string()));

    let analytics = compute_analytics(&entries);
    assert_eq!(analytics.total_entries, 2);
    assert_eq!(analytics.average_mood, 4.5);
    assert_eq!(analytics.mood_distribution.total(), 1);
}

#[test]
fn test_empty_store_file_is_empty_journal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.json");
    fs::write(&path, "").unwrap();

    let store = store_at(path);
    assert!(store.load().unwrap().is_empty());
    store.add(NewEntry::new(Mood::Neutral, "first")).unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn test_corrupt_store_is_reported_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.json");
    fs::write(&path, "{ not json").unwrap();

    let store = store_at(path.clone());
    let err = store.add(NewEntry::new(Mood::Happy, "lost?")).unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_unknown_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = store_at(dir.path().join("entries.json"));
    match store.delete("missing") {
        Err(AppError::Store(StoreError::EntryNotFound(id))) => assert_eq!(id, "missing"),
        other => panic!("Expected EntryNotFound, got {:?}", other),
    }
}

#[test]
#[cfg(unix)]
fn test_writes_fail_while_another_handle_holds_the_lock() {
    use fs2::FileExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.json");
    let store = store_at(path.clone());

    let lock_file = fs::File::create(dir.path().join("entries.json.lock")).unwrap();
    lock_file.lock_exclusive().unwrap();

    let err = store.add(NewEntry::new(Mood::Calm, "blocked")).unwrap_err();
    assert!(matches!(err, AppError::Lock(LockError::StoreBusy { .. })));
    // Reads do not need the lock.
    assert!(store.load().unwrap().is_empty());

    FileExt::unlock(&lock_file).unwrap();
    assert!(store.add(NewEntry::new(Mood::Calm, "unblocked")).is_ok());
}
