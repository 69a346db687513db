//! Subject table queries.
//!
//! A subject carries its owning teacher in the `teacher_id` slot, so the
//! teacher→subject one-to-many needs no edge table.

use crate::pool::{DbPool, DbResult};
use rusqlite::{params, OptionalExtension, Row};

/// Subject row from database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRow {
    pub id: i64,
    pub name: String,
    pub teacher_id: Option<i64>,
}

pub(crate) fn map_subject(row: &Row) -> rusqlite::Result<SubjectRow> {
    Ok(SubjectRow {
        id: row.get(0)?,
        name: row.get(1)?,
        teacher_id: row.get(2)?,
    })
}

/// Insert a new subject, optionally attached to a teacher.
pub fn insert_subject(pool: &DbPool, name: &str, teacher_id: Option<i64>) -> DbResult<SubjectRow> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO subjects (name, teacher_id) VALUES (?1, ?2)",
            params![name, teacher_id],
        )?;
        Ok(SubjectRow {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            teacher_id,
        })
    })
}

/// Get a subject by id.
pub fn get_subject(pool: &DbPool, id: i64) -> DbResult<Option<SubjectRow>> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, name, teacher_id FROM subjects WHERE id = ?1",
            params![id],
            map_subject,
        )
        .optional()
        .map_err(Into::into)
    })
}

/// List all subjects in insertion order.
pub fn list_subjects(pool: &DbPool) -> DbResult<Vec<SubjectRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare("SELECT id, name, teacher_id FROM subjects ORDER BY id")?;
        let rows = stmt.query_map([], map_subject)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    })
}

/// List the subjects owned by a teacher.
pub fn list_subjects_of_teacher(pool: &DbPool, teacher_id: i64) -> DbResult<Vec<SubjectRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, name, teacher_id FROM subjects WHERE teacher_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![teacher_id], map_subject)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    })
}

/// Case-insensitive name lookup within one teacher's subjects.
pub fn find_subject_of_teacher_by_name(
    pool: &DbPool,
    teacher_id: i64,
    name: &str,
) -> DbResult<Option<SubjectRow>> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, name, teacher_id FROM subjects
             WHERE teacher_id = ?1 AND name = ?2 COLLATE NOCASE",
            params![teacher_id, name],
            map_subject,
        )
        .optional()
        .map_err(Into::into)
    })
}

/// Overwrite a subject's name. The owning teacher is untouched.
pub fn update_subject(pool: &DbPool, id: i64, name: &str) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute(
            "UPDATE subjects SET name = ?1 WHERE id = ?2",
            params![name, id],
        )?;
        Ok(())
    })
}

/// Clear the owning-teacher slot. A no-op when the subject is not
/// attached to this teacher.
pub fn detach_subject_from_teacher(pool: &DbPool, subject_id: i64, teacher_id: i64) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute(
            "UPDATE subjects SET teacher_id = NULL WHERE id = ?1 AND teacher_id = ?2",
            params![subject_id, teacher_id],
        )?;
        Ok(())
    })
}

/// Delete a subject by id.
pub fn delete_subject(pool: &DbPool, id: i64) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute("DELETE FROM subjects WHERE id = ?1", params![id])?;
        Ok(())
    })
}
