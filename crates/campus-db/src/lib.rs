//! Campus Database Layer
//!
//! SQLite-backed entity store for students, teachers, and subjects.
//! Associations live in explicit edge tables so a single write covers
//! both sides of a relationship.

pub mod migrations;
pub mod pool;
pub mod queries;

pub use pool::{DbError, DbPool, DbResult};

use std::path::Path;

/// Open a database at the given path and bring the schema up to date.
pub fn init_pool(path: &Path) -> DbResult<DbPool> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let pool = DbPool::open(path)?;
    migrations::run_migrations(&pool)?;
    Ok(pool)
}
