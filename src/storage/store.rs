//! Record Store - SQLite-backed student collection
//!
//! One table, one row per log entry. Rows come back in insertion order
//! (rowid), which is the order the dashboard plots them in.
//!
//! The connection lives behind a `std::sync::Mutex` because
//! `rusqlite::Connection` is `!Sync`.

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::types::{Student, StudentFields};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

/// Configuration for the record store
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory for all data
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("fitlog_data"),
        }
    }
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get path to the SQLite database file
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("students.db")
    }
}

const SELECT_COLUMNS: &str = "id, studentname, studentaddress, status, noofpushups, randistance, weightlifted";

/// SQLite-backed store for fitness log entries
pub struct RecordStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl RecordStore {
    /// Create or open the store under the configured data directory
    pub fn open(config: &StorageConfig) -> StorageResult<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let path = config.db_path();
        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Self::init(conn, Some(path))
    }

    /// Create a throwaway store that lives only in memory
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> StorageResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS students (
                id TEXT NOT NULL UNIQUE,
                studentname TEXT NOT NULL DEFAULT '',
                studentaddress TEXT NOT NULL DEFAULT '',
                status TEXT NOT NULL DEFAULT '',
                noofpushups TEXT NOT NULL DEFAULT '',
                randistance TEXT NOT NULL DEFAULT '',
                weightlifted TEXT NOT NULL DEFAULT ''
            )",
            [],
        )?;

        if let Some(path) = &path {
            tracing::info!("Opened record store at {:?}", path);
        }

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Database file path, `None` for in-memory stores
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    fn conn(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }

    /// All entries in insertion order
    pub fn list(&self) -> StorageResult<Vec<Student>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare_cached(&format!("SELECT {} FROM students ORDER BY rowid", SELECT_COLUMNS))?;

        let students = stmt
            .query_map([], row_to_student)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(students)
    }

    /// Look up a single entry
    pub fn get(&self, id: &str) -> StorageResult<Student> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {} FROM students WHERE id = ?", SELECT_COLUMNS),
            params![id],
            row_to_student,
        )
        .optional()?
        .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    /// Insert a new entry and return it with its assigned id
    pub fn insert(&self, fields: StudentFields) -> StorageResult<Student> {
        let id = uuid::Uuid::new_v4().simple().to_string();

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO students
                (id, studentname, studentaddress, status, noofpushups, randistance, weightlifted)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                id,
                fields.student_name,
                fields.student_address,
                fields.status,
                fields.pushups,
                fields.ran_distance,
                fields.weight_lifted,
            ],
        )?;

        Ok(Student::new(id, fields))
    }

    /// Replace all six fields of an existing entry
    pub fn update(&self, id: &str, fields: StudentFields) -> StorageResult<Student> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE students SET
                studentname = ?, studentaddress = ?, status = ?,
                noofpushups = ?, randistance = ?, weightlifted = ?
             WHERE id = ?",
            params![
                fields.student_name,
                fields.student_address,
                fields.status,
                fields.pushups,
                fields.ran_distance,
                fields.weight_lifted,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(StorageError::NotFound(id.to_string()));
        }

        Ok(Student::new(id, fields))
    }

    /// Remove an entry permanently
    pub fn delete(&self, id: &str) -> StorageResult<()> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM students WHERE id = ?", params![id])?;

        if changed == 0 {
            return Err(StorageError::NotFound(id.to_string()));
        }

        Ok(())
    }

    /// Number of stored entries
    pub fn count(&self) -> StorageResult<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn row_to_student(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        fields: StudentFields {
            student_name: row.get(1)?,
            student_address: row.get(2)?,
            status: row.get(3)?,
            pushups: row.get(4)?,
            ran_distance: row.get(5)?,
            weight_lifted: row.get(6)?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(date: &str, pushups: &str) -> StudentFields {
        StudentFields::default()
            .name(date)
            .address("gym")
            .status("Healthy")
            .exercise(pushups, "5", "60")
    }

    #[test]
    fn test_insert_and_get() {
        let store = RecordStore::open_in_memory().unwrap();

        let created = store.insert(entry("2024-01-01", "20")).unwrap();
        assert!(!created.id.is_empty());

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let store = RecordStore::open_in_memory().unwrap();

        store.insert(entry("2024-01-03", "30")).unwrap();
        store.insert(entry("2024-01-01", "10")).unwrap();
        store.insert(entry("2024-01-02", "20")).unwrap();

        let names: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|s| s.fields.student_name)
            .collect();
        assert_eq!(names, vec!["2024-01-03", "2024-01-01", "2024-01-02"]);
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let store = RecordStore::open_in_memory().unwrap();
        let created = store.insert(entry("2024-01-01", "20")).unwrap();

        let replacement = StudentFields::default()
            .name("2024-01-05")
            .address("park")
            .status("Recovering")
            .exercise("25", "7.5", "40");
        let updated = store.update(&created.id, replacement.clone()).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(store.get(&created.id).unwrap().fields, replacement);
    }

    #[test]
    fn test_update_unknown_id() {
        let store = RecordStore::open_in_memory().unwrap();
        let result = store.update("missing", entry("2024-01-01", "1"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_delete() {
        let store = RecordStore::open_in_memory().unwrap();
        let keep = store.insert(entry("2024-01-01", "20")).unwrap();
        let drop = store.insert(entry("2024-01-02", "21")).unwrap();

        store.delete(&drop.id).unwrap();

        assert_eq!(store.count().unwrap(), 1);
        assert!(matches!(store.get(&drop.id), Err(StorageError::NotFound(_))));
        assert!(store.get(&keep.id).is_ok());
        assert!(matches!(store.delete(&drop.id), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let config = StorageConfig::new(dir.path());

        let id = {
            let store = RecordStore::open(&config).unwrap();
            store.insert(entry("2024-01-01", "20")).unwrap().id
        };

        let store = RecordStore::open(&config).unwrap();
        assert_eq!(store.path(), Some(&config.db_path()));
        assert_eq!(store.get(&id).unwrap().fields.pushups, "20");
    }
}
