//! Database connection wrapper.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;

/// Database error types.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Connection(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection lock poisoned")]
    Poisoned,
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// A single SQLite connection behind a mutex.
///
/// SQLite serializes writers anyway, so one connection shared across
/// handlers is enough for this workload. Callers run their statements
/// inside `with_conn` / `with_conn_mut` closures.
pub struct DbPool {
    conn: Mutex<Connection>,
}

impl DbPool {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Open an in-memory database. Used by tests.
    pub fn in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Run a closure with shared access to the connection.
    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> DbResult<T>) -> DbResult<T> {
        let conn = self.conn.lock().map_err(|_| DbError::Poisoned)?;
        f(&conn)
    }

    /// Run a closure with mutable access to the connection.
    pub fn with_conn_mut<T>(&self, f: impl FnOnce(&mut Connection) -> DbResult<T>) -> DbResult<T> {
        let mut conn = self.conn.lock().map_err(|_| DbError::Poisoned)?;
        f(&mut conn)
    }
}
