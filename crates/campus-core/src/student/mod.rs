//! Student service: CRUD plus teacher and subject associations.

pub mod model;

use crate::error::{CampusError, CampusResult};
use crate::subject::model::SubjectDto;
use crate::teacher::model::TeacherDto;
use campus_db::queries::{links, students as queries};
use campus_db::queries::students::StudentRow;
use campus_db::DbPool;
use model::{NewStudent, StudentDto};

pub(crate) fn require_student(pool: &DbPool, id: i64) -> CampusResult<StudentRow> {
    queries::get_student(pool, id)?
        .ok_or_else(|| CampusError::not_found(format!("There is no student with id {id}")))
}

/// Get a student by id.
pub fn get_student(pool: &DbPool, id: i64) -> CampusResult<StudentDto> {
    Ok(StudentDto::from_row(require_student(pool, id)?))
}

/// List all students.
pub fn list_students(pool: &DbPool) -> CampusResult<Vec<StudentDto>> {
    let rows = queries::list_students(pool)?;
    Ok(rows.into_iter().map(StudentDto::from_row).collect())
}

/// Create a new student. Input is validated by the request layer.
pub fn create_student(pool: &DbPool, new: &NewStudent) -> CampusResult<StudentDto> {
    let row = queries::insert_student(pool, &new.first_name, &new.last_name, &new.middle_name, new.age)?;
    tracing::debug!(id = row.id, "created student");
    Ok(StudentDto::from_row(row))
}

/// Overwrite the scalar fields of a student. The id and the association
/// edges are untouched.
pub fn update_student(pool: &DbPool, id: i64, new: &NewStudent) -> CampusResult<StudentDto> {
    require_student(pool, id)?;
    queries::update_student(pool, id, &new.first_name, &new.last_name, &new.middle_name, new.age)?;
    get_student(pool, id)
}

/// Delete a student. Edges pointing at it are left behind; reads join
/// through the entity table, so they never resurface.
pub fn delete_student(pool: &DbPool, id: i64) -> CampusResult<()> {
    require_student(pool, id)?;
    queries::delete_student(pool, id)?;
    tracing::debug!(id, "deleted student");
    Ok(())
}

/// List the teachers of a student.
pub fn teachers_of_student(pool: &DbPool, student_id: i64) -> CampusResult<Vec<TeacherDto>> {
    require_student(pool, student_id)?;
    let rows = links::teachers_of_student(pool, student_id)?;
    Ok(rows.into_iter().map(TeacherDto::from_row).collect())
}

/// Associate a teacher with a student.
///
/// The student is resolved first; when it is missing the teacher store is
/// never consulted.
pub fn add_teacher_to_student(pool: &DbPool, student_id: i64, teacher_id: i64) -> CampusResult<()> {
    require_student(pool, student_id)?;
    crate::teacher::require_teacher(pool, teacher_id)?;
    if links::student_teacher_linked(pool, student_id, teacher_id)? {
        return Err(CampusError::already_added(format!(
            "There is already a teacher with id {teacher_id}"
        )));
    }
    links::link_student_teacher(pool, student_id, teacher_id)
        .map_err(CampusError::from)
}

/// Drop the student↔teacher association. Removing an edge that was never
/// there is a no-op; only a missing entity is an error.
pub fn remove_teacher_from_student(pool: &DbPool, student_id: i64, teacher_id: i64) -> CampusResult<()> {
    require_student(pool, student_id)?;
    crate::teacher::require_teacher(pool, teacher_id)?;
    links::unlink_student_teacher(pool, student_id, teacher_id).map_err(CampusError::from)
}

/// List the subjects of a student.
pub fn subjects_of_student(pool: &DbPool, student_id: i64) -> CampusResult<Vec<SubjectDto>> {
    require_student(pool, student_id)?;
    let rows = links::subjects_of_student(pool, student_id)?;
    Ok(rows.into_iter().map(SubjectDto::from_row).collect())
}

/// Associate a subject with a student.
pub fn add_subject_to_student(pool: &DbPool, student_id: i64, subject_id: i64) -> CampusResult<()> {
    require_student(pool, student_id)?;
    crate::subject::require_subject(pool, subject_id)?;
    if links::student_subject_linked(pool, student_id, subject_id)? {
        return Err(CampusError::already_added(format!(
            "There is already a subject with id {subject_id}"
        )));
    }
    links::link_student_subject(pool, student_id, subject_id).map_err(CampusError::from)
}

/// Drop the student↔subject association. Idempotent on the edge.
pub fn remove_subject_from_student(pool: &DbPool, student_id: i64, subject_id: i64) -> CampusResult<()> {
    require_student(pool, student_id)?;
    crate::subject::require_subject(pool, subject_id)?;
    links::unlink_student_subject(pool, student_id, subject_id).map_err(CampusError::from)
}
