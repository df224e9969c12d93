//! SQLite-backed student store.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::Value as SqlValue;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde_json::Value;
use tracing::{debug, info};

use super::errors::{StoreError, StoreResult};
use super::StudentStore;
use crate::student::{Student, StudentFields, StudentId};

// Column affinity coerces "21" and 21.0 to 21 and 5 to '5' before the
// CHECKs run; values that stay the wrong type fail as constraint violations.
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS student (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (typeof(name) = 'text' AND length(name) <= 120),
    email TEXT NOT NULL UNIQUE CHECK (typeof(email) = 'text' AND length(email) <= 120),
    age INTEGER NOT NULL CHECK (typeof(age) = 'integer'),
    cellphone TEXT NOT NULL UNIQUE CHECK (typeof(cellphone) = 'text' AND length(cellphone) <= 13)
);";

const SELECT_COLUMNS: &str = "SELECT id, name, email, age, cellphone FROM student";

/// Student store over a single SQLite connection
pub struct SqliteStudentStore {
    conn: Mutex<Connection>,
}

impl SqliteStudentStore {
    /// Open the database at `path`, creating the file, its directory and the
    /// `student` table when they do not exist yet.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let existed = path.exists();
        let conn = Connection::open(path)?;
        if existed {
            info!(path = %path.display(), "opened existing database");
        } else {
            info!(path = %path.display(), "created database");
        }

        Self::with_connection(conn)
    }

    /// A private database living only as long as the store
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(CREATE_TABLE)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Backend("connection lock poisoned".to_string()))
    }
}

fn map_student(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        age: row.get(3)?,
        cellphone: row.get(4)?,
    })
}

/// Bind a JSON value as the closest SQLite value.
///
/// Arrays and objects are bound as blobs, which no column accepts.
fn sql_value(value: &Option<Value>) -> SqlValue {
    match value {
        None | Some(Value::Null) => SqlValue::Null,
        Some(Value::Bool(flag)) => SqlValue::Integer(i64::from(*flag)),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(int) => SqlValue::Integer(int),
            None => SqlValue::Real(number.as_f64().unwrap_or(f64::NAN)),
        },
        Some(Value::String(text)) => SqlValue::Text(text.clone()),
        Some(composite) => SqlValue::Blob(composite.to_string().into_bytes()),
    }
}

fn bind(fields: &StudentFields) -> [SqlValue; 4] {
    [
        sql_value(&fields.name),
        sql_value(&fields.email),
        sql_value(&fields.age),
        sql_value(&fields.cellphone),
    ]
}

fn fetch(conn: &Connection, id: StudentId) -> StoreResult<Student> {
    let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
    conn.query_row(&sql, params![id], map_student)
        .optional()?
        .ok_or(StoreError::NotFound(id))
}

impl StudentStore for SqliteStudentStore {
    fn list_all(&self) -> StoreResult<Vec<Student>> {
        let conn = self.lock()?;
        let sql = format!("{SELECT_COLUMNS} ORDER BY id");
        let mut stmt = conn.prepare_cached(&sql)?;
        let students = stmt
            .query_map([], map_student)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(students)
    }

    fn get_by_id(&self, id: StudentId) -> StoreResult<Student> {
        let conn = self.lock()?;
        fetch(&conn, id)
    }

    fn create(&self, fields: &StudentFields) -> StoreResult<Student> {
        let conn = self.lock()?;
        let [name, email, age, cellphone] = bind(fields);
        conn.execute(
            "INSERT INTO student (name, email, age, cellphone) VALUES (?1, ?2, ?3, ?4)",
            params![name, email, age, cellphone],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, "inserted student");
        fetch(&conn, id)
    }

    fn update(&self, id: StudentId, fields: &StudentFields) -> StoreResult<Student> {
        let conn = self.lock()?;
        let [name, email, age, cellphone] = bind(fields);
        let changed = conn.execute(
            "UPDATE student SET name = ?1, email = ?2, age = ?3, cellphone = ?4 WHERE id = ?5",
            params![name, email, age, cellphone, id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id, "updated student");
        fetch(&conn, id)
    }

    fn delete(&self, id: StudentId) -> StoreResult<()> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM student WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id, "deleted student");
        Ok(())
    }
}
