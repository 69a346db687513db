//! Association edge queries.
//!
//! Each many-to-many relationship is one edge table keyed by the pair of
//! ids. Inserting or deleting the row is the whole mutation; both sides
//! of the relationship read the same row, so they can never disagree.
//! Listing joins through the entity table, which also hides edges whose
//! far end has been deleted.

use crate::pool::{DbPool, DbResult};
use crate::queries::students::{map_student, StudentRow};
use crate::queries::subjects::{map_subject, SubjectRow};
use crate::queries::teachers::{map_teacher, TeacherRow};
use rusqlite::params;

// student <-> teacher

/// Does the student↔teacher edge exist?
pub fn student_teacher_linked(pool: &DbPool, student_id: i64, teacher_id: i64) -> DbResult<bool> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM student_teachers WHERE student_id = ?1 AND teacher_id = ?2)",
            params![student_id, teacher_id],
            |row| row.get(0),
        )
        .map_err(Into::into)
    })
}

/// Insert the student↔teacher edge.
pub fn link_student_teacher(pool: &DbPool, student_id: i64, teacher_id: i64) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO student_teachers (student_id, teacher_id) VALUES (?1, ?2)",
            params![student_id, teacher_id],
        )?;
        Ok(())
    })
}

/// Delete the student↔teacher edge. A missing edge is a no-op.
pub fn unlink_student_teacher(pool: &DbPool, student_id: i64, teacher_id: i64) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute(
            "DELETE FROM student_teachers WHERE student_id = ?1 AND teacher_id = ?2",
            params![student_id, teacher_id],
        )?;
        Ok(())
    })
}

/// Teachers associated with a student, in edge-insertion order.
pub fn teachers_of_student(pool: &DbPool, student_id: i64) -> DbResult<Vec<TeacherRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT t.id, t.first_name, t.last_name, t.middle_name, t.age
             FROM student_teachers st
             JOIN teachers t ON t.id = st.teacher_id
             WHERE st.student_id = ?1
             ORDER BY st.rowid",
        )?;
        let rows = stmt.query_map(params![student_id], map_teacher)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    })
}

/// Students associated with a teacher, in edge-insertion order.
pub fn students_of_teacher(pool: &DbPool, teacher_id: i64) -> DbResult<Vec<StudentRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT s.id, s.first_name, s.last_name, s.middle_name, s.age
             FROM student_teachers st
             JOIN students s ON s.id = st.student_id
             WHERE st.teacher_id = ?1
             ORDER BY st.rowid",
        )?;
        let rows = stmt.query_map(params![teacher_id], map_student)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    })
}

// student <-> subject

/// Does the student↔subject edge exist?
pub fn student_subject_linked(pool: &DbPool, student_id: i64, subject_id: i64) -> DbResult<bool> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM student_subjects WHERE student_id = ?1 AND subject_id = ?2)",
            params![student_id, subject_id],
            |row| row.get(0),
        )
        .map_err(Into::into)
    })
}

/// Insert the student↔subject edge.
pub fn link_student_subject(pool: &DbPool, student_id: i64, subject_id: i64) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO student_subjects (student_id, subject_id) VALUES (?1, ?2)",
            params![student_id, subject_id],
        )?;
        Ok(())
    })
}

/// Delete the student↔subject edge. A missing edge is a no-op.
pub fn unlink_student_subject(pool: &DbPool, student_id: i64, subject_id: i64) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute(
            "DELETE FROM student_subjects WHERE student_id = ?1 AND subject_id = ?2",
            params![student_id, subject_id],
        )?;
        Ok(())
    })
}

/// Subjects associated with a student, in edge-insertion order.
pub fn subjects_of_student(pool: &DbPool, student_id: i64) -> DbResult<Vec<SubjectRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT sub.id, sub.name, sub.teacher_id
             FROM student_subjects ss
             JOIN subjects sub ON sub.id = ss.subject_id
             WHERE ss.student_id = ?1
             ORDER BY ss.rowid",
        )?;
        let rows = stmt.query_map(params![student_id], map_subject)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    })
}
