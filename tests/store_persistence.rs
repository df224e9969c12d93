//! File-backed Store Tests
//!
//! - opening creates the database file and its directory
//! - records survive closing and reopening the database
//! - ids are not reused after a delete

use student_api::store::{SqliteStudentStore, StoreConfig, StudentStore};
use student_api::student::StudentFields;
use tempfile::TempDir;

fn ada() -> StudentFields {
    StudentFields::new("Ada", "ada@example.com", 36, "5551234567")
}

#[test]
fn test_open_creates_missing_directory_and_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data").join("students.db");
    assert!(!path.exists());

    let store = SqliteStudentStore::open(&path).unwrap();
    assert!(path.exists());
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_records_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let config = StoreConfig {
        path: tmp.path().join("students.db"),
    };

    let created = {
        let store = config.open().unwrap();
        store.create(&ada()).unwrap()
    };

    let store = config.open().unwrap();
    assert_eq!(store.get_by_id(created.id).unwrap(), created);
    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let tmp = TempDir::new().unwrap();
    let store = SqliteStudentStore::open(tmp.path().join("students.db")).unwrap();

    let first = store.create(&ada()).unwrap();
    store.delete(first.id).unwrap();

    let second = store.create(&ada()).unwrap();
    assert!(second.id > first.id);
}
