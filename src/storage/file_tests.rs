use std::fs;

use tempfile::tempdir;

use super::*;

#[test]
fn test_open_missing_file() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::open(dir.path().join("storage.json")).unwrap();
    assert_eq!(storage.get("key").unwrap(), None);
    // nothing is written until the first mutation
    assert!(!storage.path().exists());
}

#[test]
fn test_set_persists_to_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("storage.json");

    let storage = FileStorage::open(&path).unwrap();
    storage.set("key", "[1,2,3]").unwrap();
    assert!(path.exists());

    let reopened = FileStorage::open(&path).unwrap();
    assert_eq!(reopened.get("key").unwrap(), Some("[1,2,3]".to_string()));
}

#[test]
fn test_remove_persists_to_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let storage = FileStorage::open(&path).unwrap();
    storage.set("a", "1").unwrap();
    storage.set("b", "2").unwrap();
    storage.remove("a").unwrap();

    let reopened = FileStorage::open(&path).unwrap();
    assert_eq!(reopened.get("a").unwrap(), None);
    assert_eq!(reopened.get("b").unwrap(), Some("2".to_string()));
}

#[test]
fn test_open_malformed_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "{ this is not json").unwrap();

    let storage = FileStorage::open(&path).unwrap();
    assert_eq!(storage.get("key").unwrap(), None);

    storage.set("key", "value").unwrap();
    let reopened = FileStorage::open(&path).unwrap();
    assert_eq!(reopened.get("key").unwrap(), Some("value".to_string()));
}

#[test]
fn test_open_directory_is_read_error() {
    let dir = tempdir().unwrap();
    let result = FileStorage::open(dir.path());
    assert!(matches!(result, Err(StorageError::Read { .. })));
}

#[test]
fn test_reads_changes_made_by_another_handle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let local = FileStorage::open(&path).unwrap();
    local.set("a", "1").unwrap();

    let other = FileStorage::open(&path).unwrap();
    other.set("b", "2").unwrap();

    assert_eq!(local.get("b").unwrap(), Some("2".to_string()));

    // a local write keeps what the other handle stored
    local.set("c", "3").unwrap();
    assert_eq!(other.get("a").unwrap(), Some("1".to_string()));
    assert_eq!(other.get("b").unwrap(), Some("2".to_string()));
    assert_eq!(other.get("c").unwrap(), Some("3".to_string()));
}

#[test]
fn test_reads_hand_edited_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let storage = FileStorage::open(&path).unwrap();
    storage.set("key", "old").unwrap();

    fs::write(&path, r#"{"key": "new"}"#).unwrap();

    assert_eq!(storage.get("key").unwrap(), Some("new".to_string()));
}

#[test]
fn test_failed_write_leaves_store_unchanged() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    let path = sub.join("storage.json");

    let storage = FileStorage::open(&path).unwrap();
    // parent becomes a regular file so the directory can't be created
    fs::write(&sub, "not a directory").unwrap();

    let result = storage.set("key", "value");

    assert!(matches!(result, Err(StorageError::Write { .. })));

    fs::remove_file(&sub).unwrap();
    assert_eq!(storage.get("key").unwrap(), None);
}

#[test]
fn test_remove_missing_key_does_not_create_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let storage = FileStorage::open(&path).unwrap();
    storage.remove("key").unwrap();

    assert!(!path.exists());
}
