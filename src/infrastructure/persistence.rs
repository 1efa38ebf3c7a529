use crate::domain::Student;
use rusqlite::{Connection, Row};
use std::path::Path;
use std::time::Duration;

/// Database file created next to the binary when no test path is given.
pub const DEFAULT_DB_PATH: &str = "students.db";

#[derive(Debug)]
pub enum StorageError {
    Database(rusqlite::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Database(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Database(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Database(err)
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// SQLite-backed store for student records.
///
/// Owns one connection for the life of the process; every operation is a
/// single statement against the `students` table. Constructors run
/// [`StudentRepository::initialize`] so a returned repository is always
/// backed by a ready schema.
pub struct StudentRepository {
    conn: Connection,
}

impl StudentRepository {
    /// Opens (creating if absent) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens a throwaway in-memory database.
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StorageResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        let repository = Self { conn };
        repository.initialize()?;
        Ok(repository)
    }

    /// Creates the `students` table if it does not exist. Safe to call
    /// repeatedly; existing rows are untouched.
    pub fn initialize(&self) -> StorageResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                grade TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Inserts a record and returns the id the store assigned to it.
    ///
    /// No field validation happens here; callers are expected to have
    /// checked the values already.
    pub fn add(&self, name: &str, age: u32, grade: &str) -> StorageResult<i64> {
        self.conn.execute(
            "INSERT INTO students (name, age, grade) VALUES (?1, ?2, ?3)",
            (name, age, grade),
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns every record in insertion order. An empty table yields an
    /// empty vec.
    pub fn list_all(&self) -> StorageResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, age, grade FROM students ORDER BY id")?;
        let rows = stmt.query_map([], student_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StorageError::from)
    }

    /// Overwrites all non-id fields of the matching record. Returns whether
    /// a record matched; a missing id is not an error.
    pub fn update(&self, id: i64, name: &str, age: u32, grade: &str) -> StorageResult<bool> {
        let changed = self.conn.execute(
            "UPDATE students SET name = ?1, age = ?2, grade = ?3 WHERE id = ?4",
            (name, age, grade, id),
        )?;
        Ok(changed > 0)
    }

    /// Removes the matching record. Returns whether a record matched; a
    /// missing id is not an error.
    pub fn delete(&self, id: i64) -> StorageResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1", [id])?;
        Ok(changed > 0)
    }

    /// Case-insensitive substring match against the name column, in
    /// insertion order. An empty fragment matches every record.
    pub fn search_by_name(&self, fragment: &str) -> StorageResult<Vec<Student>> {
        let pattern = format!("%{}%", fragment);
        let mut stmt = self.conn.prepare(
            "SELECT id, name, age, grade FROM students WHERE name LIKE ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map([pattern], student_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StorageError::from)
    }
}

fn student_from_row(row: &Row) -> Result<Student, rusqlite::Error> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        grade: row.get(3)?,
    })
}
