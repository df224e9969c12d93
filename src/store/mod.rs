//! # Record Store
//!
//! Persistence boundary for student records.
//!
//! Handlers only see the [`StudentStore`] trait and receive the concrete
//! store through application state. [`SqliteStudentStore`] keeps the rows in
//! the `student` table of a SQLite database.

mod errors;
mod sqlite;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::student::{Student, StudentFields, StudentId};

pub use errors::{StoreError, StoreResult};
pub use sqlite::SqliteStudentStore;

/// CRUD operations over student records.
///
/// Every mutating call touches exactly one row.
pub trait StudentStore: Send + Sync {
    /// All records, in id order
    fn list_all(&self) -> StoreResult<Vec<Student>>;

    /// Fails with [`StoreError::NotFound`] when no record has `id`
    fn get_by_id(&self, id: StudentId) -> StoreResult<Student>;

    /// Insert a new record and return it with its assigned id
    fn create(&self, fields: &StudentFields) -> StoreResult<Student>;

    /// Overwrite every writable column of an existing record
    fn update(&self, id: StudentId, fields: &StudentFields) -> StoreResult<Student>;

    /// Remove a record
    fn delete(&self, id: StudentId) -> StoreResult<()>;
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite database file (default: "students.db")
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from("students.db")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl StoreConfig {
    /// Open (creating if needed) the configured database
    pub fn open(&self) -> StoreResult<SqliteStudentStore> {
        SqliteStudentStore::open(&self.path)
    }
}
