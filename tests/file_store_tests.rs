//! Integration tests for the file-backed marker store

use std::fs;
use tempfile::TempDir;
use versiongate::{FileMarkerStore, MarkerStore, MigrationGate, StaticMetadata, StorageError};

#[test]
fn test_markers_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("markers.json");

    {
        let mut store = FileMarkerStore::open(&path).unwrap();
        store.set("Migration.lastVersion", "1.2").unwrap();
        store.set("Migration.lastBuild", "48").unwrap();
    }

    let store = FileMarkerStore::open(&path).unwrap();
    assert_eq!(
        store.get("Migration.lastVersion").unwrap(),
        Some("1.2".to_string())
    );
    assert_eq!(
        store.get("Migration.lastBuild").unwrap(),
        Some("48".to_string())
    );
}

#[test]
fn test_missing_file_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("markers.json");

    let store = FileMarkerStore::open(&path).unwrap();
    assert_eq!(store.get("Migration.lastVersion").unwrap(), None);

    // No file is created until the first write
    assert!(!path.exists());
}

#[test]
fn test_delete_persists() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("markers.json");

    {
        let mut store = FileMarkerStore::open(&path).unwrap();
        store.set("Migration.lastVersion", "1.2").unwrap();
        store.set("Migration.lastAppVersion", "1.2").unwrap();
        store.delete("Migration.lastVersion").unwrap();
    }

    let store = FileMarkerStore::open(&path).unwrap();
    assert_eq!(store.get("Migration.lastVersion").unwrap(), None);
    assert_eq!(
        store.get("Migration.lastAppVersion").unwrap(),
        Some("1.2".to_string())
    );
}

#[test]
fn test_corrupt_file_fails_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("markers.json");
    fs::write(&path, b"not json").unwrap();

    match FileMarkerStore::open(&path) {
        Err(StorageError::CorruptData(_)) => {}
        other => panic!("expected CorruptData, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_migration_not_rerun_across_sessions() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("markers.json");
    let mut runs = 0;

    // Session 1: migration fires and is recorded on disk
    {
        let store = FileMarkerStore::open(&path).unwrap();
        let mut gate = MigrationGate::new(store, StaticMetadata::new().version("1.5"));
        gate.migrate_to_version("1.5", || runs += 1);
        assert_eq!(runs, 1);
    }

    // Session 2: same app version, marker already on disk
    {
        let store = FileMarkerStore::open(&path).unwrap();
        let mut gate = MigrationGate::new(store, StaticMetadata::new().version("1.5"));
        gate.migrate_to_version("1.5", || runs += 1);
        assert_eq!(runs, 1);
    }

    // Session 3: upgraded app, next threshold fires
    {
        let store = FileMarkerStore::open(&path).unwrap();
        let mut gate = MigrationGate::new(store, StaticMetadata::new().version("2.0"));
        gate.migrate_to_version("2.0", || runs += 1);
        assert_eq!(runs, 2);
    }
}

#[test]
fn test_reset_clears_file_backed_markers() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("markers.json");
    let mut runs = 0;

    {
        let store = FileMarkerStore::open(&path).unwrap();
        let mut gate = MigrationGate::new(
            store,
            StaticMetadata::new().version("1.0").build("10"),
        );
        gate.migrate_to_version("1.0", || runs += 1);
        gate.application_update(|| runs += 1);
        gate.reset();
    }
    assert_eq!(runs, 2);

    let store = FileMarkerStore::open(&path).unwrap();
    assert_eq!(store.get("Migration.lastVersion").unwrap(), None);
    assert_eq!(store.get("Migration.lastAppVersion").unwrap(), None);
}
