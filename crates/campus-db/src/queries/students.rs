//! Student table queries.

use crate::pool::{DbPool, DbResult};
use rusqlite::{params, OptionalExtension, Row};

/// Student row from database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub age: i64,
}

pub(crate) fn map_student(row: &Row) -> rusqlite::Result<StudentRow> {
    Ok(StudentRow {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        middle_name: row.get(3)?,
        age: row.get(4)?,
    })
}

/// Insert a new student. The store assigns the id.
pub fn insert_student(
    pool: &DbPool,
    first_name: &str,
    last_name: &str,
    middle_name: &str,
    age: i64,
) -> DbResult<StudentRow> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO students (first_name, last_name, middle_name, age)
             VALUES (?1, ?2, ?3, ?4)",
            params![first_name, last_name, middle_name, age],
        )?;
        let id = conn.last_insert_rowid();
        Ok(StudentRow {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            middle_name: middle_name.to_string(),
            age,
        })
    })
}

/// Get a student by id.
pub fn get_student(pool: &DbPool, id: i64) -> DbResult<Option<StudentRow>> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, first_name, last_name, middle_name, age
             FROM students WHERE id = ?1",
            params![id],
            map_student,
        )
        .optional()
        .map_err(Into::into)
    })
}

/// List all students in insertion order.
pub fn list_students(pool: &DbPool) -> DbResult<Vec<StudentRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, first_name, last_name, middle_name, age
             FROM students ORDER BY id",
        )?;
        let rows = stmt.query_map([], map_student)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    })
}

/// Overwrite the scalar fields of a student.
pub fn update_student(
    pool: &DbPool,
    id: i64,
    first_name: &str,
    last_name: &str,
    middle_name: &str,
    age: i64,
) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute(
            "UPDATE students SET first_name = ?1, last_name = ?2, middle_name = ?3, age = ?4
             WHERE id = ?5",
            params![first_name, last_name, middle_name, age, id],
        )?;
        Ok(())
    })
}

/// Delete a student by id.
pub fn delete_student(pool: &DbPool, id: i64) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute("DELETE FROM students WHERE id = ?1", params![id])?;
        Ok(())
    })
}
