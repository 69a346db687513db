//! Teacher table queries.

use crate::pool::{DbPool, DbResult};
use rusqlite::{params, OptionalExtension, Row};

/// Teacher row from database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub age: i64,
}

pub(crate) fn map_teacher(row: &Row) -> rusqlite::Result<TeacherRow> {
    Ok(TeacherRow {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        middle_name: row.get(3)?,
        age: row.get(4)?,
    })
}

/// Insert a new teacher. The store assigns the id.
pub fn insert_teacher(
    pool: &DbPool,
    first_name: &str,
    last_name: &str,
    middle_name: &str,
    age: i64,
) -> DbResult<TeacherRow> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO teachers (first_name, last_name, middle_name, age)
             VALUES (?1, ?2, ?3, ?4)",
            params![first_name, last_name, middle_name, age],
        )?;
        let id = conn.last_insert_rowid();
        Ok(TeacherRow {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            middle_name: middle_name.to_string(),
            age,
        })
    })
}

/// Get a teacher by id.
pub fn get_teacher(pool: &DbPool, id: i64) -> DbResult<Option<TeacherRow>> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, first_name, last_name, middle_name, age
             FROM teachers WHERE id = ?1",
            params![id],
            map_teacher,
        )
        .optional()
        .map_err(Into::into)
    })
}

/// Case-insensitive match against first or last name. Lowest id wins
/// when several teachers share a name.
pub fn find_teacher_by_name(pool: &DbPool, name: &str) -> DbResult<Option<TeacherRow>> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, first_name, last_name, middle_name, age
             FROM teachers
             WHERE first_name = ?1 COLLATE NOCASE OR last_name = ?1 COLLATE NOCASE
             ORDER BY id LIMIT 1",
            params![name],
            map_teacher,
        )
        .optional()
        .map_err(Into::into)
    })
}

/// List all teachers in insertion order.
pub fn list_teachers(pool: &DbPool) -> DbResult<Vec<TeacherRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, first_name, last_name, middle_name, age
             FROM teachers ORDER BY id",
        )?;
        let rows = stmt.query_map([], map_teacher)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    })
}

/// Overwrite the scalar fields of a teacher.
pub fn update_teacher(
    pool: &DbPool,
    id: i64,
    first_name: &str,
    last_name: &str,
    middle_name: &str,
    age: i64,
) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute(
            "UPDATE teachers SET first_name = ?1, last_name = ?2, middle_name = ?3, age = ?4
             WHERE id = ?5",
            params![first_name, last_name, middle_name, age, id],
        )?;
        Ok(())
    })
}

/// Delete a teacher by id.
pub fn delete_teacher(pool: &DbPool, id: i64) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute("DELETE FROM teachers WHERE id = ?1", params![id])?;
        Ok(())
    })
}
