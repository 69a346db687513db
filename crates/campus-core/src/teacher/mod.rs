//! Teacher service: CRUD, dual-mode lookup, and subject/student
//! associations.

pub mod model;

use crate::error::{CampusError, CampusResult};
use crate::student::model::StudentDto;
use crate::subject::model::{NewSubject, SubjectDto};
use campus_db::queries::{links, subjects, teachers as queries};
use campus_db::queries::teachers::TeacherRow;
use campus_db::DbPool;
use model::{NewTeacher, TeacherDto};

pub(crate) fn require_teacher(pool: &DbPool, id: i64) -> CampusResult<TeacherRow> {
    queries::get_teacher(pool, id)?
        .ok_or_else(|| CampusError::not_found(format!("There is no teacher with id {id}")))
}

/// Get a teacher by id.
pub fn get_teacher(pool: &DbPool, id: i64) -> CampusResult<TeacherDto> {
    Ok(TeacherDto::from_row(require_teacher(pool, id)?))
}

/// Dual-mode lookup: a key that parses as an integer is treated as an id,
/// anything else as a case-insensitive first-or-last-name match.
///
/// The id path always wins, so a teacher whose name happens to look
/// numeric cannot be reached by name. Kept that way on purpose.
pub fn find_teacher(pool: &DbPool, key: &str) -> CampusResult<TeacherDto> {
    if let Ok(id) = key.trim().parse::<i64>() {
        return get_teacher(pool, id);
    }
    let row = queries::find_teacher_by_name(pool, key)?
        .ok_or_else(|| CampusError::not_found(format!("There is no teacher with name {key}")))?;
    Ok(TeacherDto::from_row(row))
}

/// List all teachers.
pub fn list_teachers(pool: &DbPool) -> CampusResult<Vec<TeacherDto>> {
    let rows = queries::list_teachers(pool)?;
    Ok(rows.into_iter().map(TeacherDto::from_row).collect())
}

/// Create a new teacher. Input is validated by the request layer.
pub fn create_teacher(pool: &DbPool, new: &NewTeacher) -> CampusResult<TeacherDto> {
    let row = queries::insert_teacher(pool, &new.first_name, &new.last_name, &new.middle_name, new.age)?;
    tracing::debug!(id = row.id, "created teacher");
    Ok(TeacherDto::from_row(row))
}

/// Overwrite the scalar fields of a teacher.
pub fn update_teacher(pool: &DbPool, id: i64, new: &NewTeacher) -> CampusResult<TeacherDto> {
    require_teacher(pool, id)?;
    queries::update_teacher(pool, id, &new.first_name, &new.last_name, &new.middle_name, new.age)?;
    get_teacher(pool, id)
}

/// Delete a teacher. Subjects it owned keep their stale `teacher_id`;
/// listings join against the teachers table, so nothing dangling shows up.
pub fn delete_teacher(pool: &DbPool, id: i64) -> CampusResult<()> {
    require_teacher(pool, id)?;
    queries::delete_teacher(pool, id)?;
    tracing::debug!(id, "deleted teacher");
    Ok(())
}

/// List the subjects a teacher owns.
pub fn subjects_of_teacher(pool: &DbPool, teacher_id: i64) -> CampusResult<Vec<SubjectDto>> {
    require_teacher(pool, teacher_id)?;
    let rows = subjects::list_subjects_of_teacher(pool, teacher_id)?;
    Ok(rows.into_iter().map(SubjectDto::from_row).collect())
}

/// Create a subject and attach it to a teacher in one step.
///
/// Rejected when the teacher already owns a subject with the same name,
/// compared case-insensitively.
pub fn add_subject_to_teacher(
    pool: &DbPool,
    teacher_id: i64,
    new: &NewSubject,
) -> CampusResult<SubjectDto> {
    require_teacher(pool, teacher_id)?;
    if subjects::find_subject_of_teacher_by_name(pool, teacher_id, &new.name)?.is_some() {
        return Err(CampusError::already_added(format!(
            "Teacher already teaches a subject with name {}",
            new.name
        )));
    }
    let row = subjects::insert_subject(pool, &new.name, Some(teacher_id))?;
    Ok(SubjectDto::from_row(row))
}

/// Detach a subject from a teacher. Both must exist; a subject that was
/// not attached to this teacher is left as it is.
pub fn remove_subject_from_teacher(pool: &DbPool, teacher_id: i64, subject_id: i64) -> CampusResult<()> {
    require_teacher(pool, teacher_id)?;
    crate::subject::require_subject(pool, subject_id)?;
    subjects::detach_subject_from_teacher(pool, subject_id, teacher_id).map_err(CampusError::from)
}

/// List the students of a teacher.
pub fn students_of_teacher(pool: &DbPool, teacher_id: i64) -> CampusResult<Vec<StudentDto>> {
    require_teacher(pool, teacher_id)?;
    let rows = links::students_of_teacher(pool, teacher_id)?;
    Ok(rows.into_iter().map(StudentDto::from_row).collect())
}

/// Associate a student with a teacher. Same edge as the student-side add,
/// so either direction sees additions made through the other.
pub fn add_student_to_teacher(pool: &DbPool, teacher_id: i64, student_id: i64) -> CampusResult<()> {
    require_teacher(pool, teacher_id)?;
    crate::student::require_student(pool, student_id)?;
    if links::student_teacher_linked(pool, student_id, teacher_id)? {
        return Err(CampusError::already_added(format!(
            "There is already a student with id {student_id}"
        )));
    }
    links::link_student_teacher(pool, student_id, teacher_id).map_err(CampusError::from)
}

/// Drop the teacher↔student association. Idempotent on the edge.
pub fn remove_student_from_teacher(pool: &DbPool, teacher_id: i64, student_id: i64) -> CampusResult<()> {
    require_teacher(pool, teacher_id)?;
    crate::student::require_student(pool, student_id)?;
    links::unlink_student_teacher(pool, student_id, teacher_id).map_err(CampusError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::model::NewStudent;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        campus_db::migrations::run_migrations(&pool).unwrap();
        pool
    }

    fn new_teacher(first: &str, last: &str) -> NewTeacher {
        NewTeacher {
            first_name: first.to_string(),
            last_name: last.to_string(),
            middle_name: "K".to_string(),
            age: 40,
        }
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let pool = pool();
        let t = create_teacher(&pool, &new_teacher("Aidar", "Ivanov")).unwrap();

        assert_eq!(find_teacher(&pool, "ivanov").unwrap().id, t.id);
        assert_eq!(find_teacher(&pool, "AIDAR").unwrap().id, t.id);

        let err = find_teacher(&pool, "petrov").unwrap_err();
        assert!(matches!(err, CampusError::NotFound(_)));
    }

    #[test]
    fn test_numeric_key_always_takes_the_id_path() {
        let pool = pool();
        // id 1 is a teacher whose first name is the digit string "3".
        let named_three = create_teacher(&pool, &new_teacher("3", "Numeric")).unwrap();
        create_teacher(&pool, &new_teacher("Marat", "Sadykov")).unwrap();
        let third = create_teacher(&pool, &new_teacher("Aidar", "Ivanov")).unwrap();
        assert_eq!(third.id, 3);

        // "3" resolves to the teacher with id 3, not the one named "3".
        let found = find_teacher(&pool, "3").unwrap();
        assert_eq!(found.id, third.id);
        assert_ne!(found.id, named_three.id);

        // And with no id 4, the numeric key misses even though a name
        // lookup might have hit something.
        assert!(find_teacher(&pool, "4").is_err());
    }

    #[test]
    fn test_add_subject_attaches_to_teacher() {
        let pool = pool();
        let t = create_teacher(&pool, &new_teacher("Aidar", "Ivanov")).unwrap();

        let sub = add_subject_to_teacher(&pool, t.id, &NewSubject { name: "Math".into() }).unwrap();
        let listed = subjects_of_teacher(&pool, t.id).unwrap();
        assert_eq!(listed, vec![sub]);
    }

    #[test]
    fn test_duplicate_subject_name_differs_only_by_case() {
        let pool = pool();
        let t = create_teacher(&pool, &new_teacher("Aidar", "Ivanov")).unwrap();

        add_subject_to_teacher(&pool, t.id, &NewSubject { name: "Math".into() }).unwrap();
        let err = add_subject_to_teacher(&pool, t.id, &NewSubject { name: "math".into() }).unwrap_err();
        assert!(matches!(err, CampusError::AlreadyAdded(_)));
        assert_eq!(subjects_of_teacher(&pool, t.id).unwrap().len(), 1);

        // A different teacher may teach a subject with the same name.
        let other = create_teacher(&pool, &new_teacher("Marat", "Sadykov")).unwrap();
        add_subject_to_teacher(&pool, other.id, &NewSubject { name: "MATH".into() }).unwrap();
    }

    #[test]
    fn test_remove_subject_detaches_and_is_idempotent() {
        let pool = pool();
        let t = create_teacher(&pool, &new_teacher("Aidar", "Ivanov")).unwrap();
        let sub = add_subject_to_teacher(&pool, t.id, &NewSubject { name: "Math".into() }).unwrap();

        remove_subject_from_teacher(&pool, t.id, sub.id).unwrap();
        assert!(subjects_of_teacher(&pool, t.id).unwrap().is_empty());

        // The subject itself survives, just unowned.
        let detached = crate::subject::get_subject(&pool, sub.id).unwrap();
        assert_eq!(detached.name, "Math");

        // Removing again is a no-op.
        remove_subject_from_teacher(&pool, t.id, sub.id).unwrap();
    }

    #[test]
    fn test_student_edge_is_shared_with_the_student_side() {
        let pool = pool();
        let t = create_teacher(&pool, &new_teacher("Aidar", "Ivanov")).unwrap();
        let s = crate::student::create_student(
            &pool,
            &NewStudent {
                first_name: "Ilyas".into(),
                last_name: "Nasirov".into(),
                middle_name: "U".into(),
                age: 25,
            },
        )
        .unwrap();

        // Added from the student side, visible and duplicate-checked here.
        crate::student::add_teacher_to_student(&pool, s.id, t.id).unwrap();
        assert_eq!(students_of_teacher(&pool, t.id).unwrap().len(), 1);

        let err = add_student_to_teacher(&pool, t.id, s.id).unwrap_err();
        assert!(matches!(err, CampusError::AlreadyAdded(_)));

        // Removed from this side, gone from the student side too.
        remove_student_from_teacher(&pool, t.id, s.id).unwrap();
        assert!(crate::student::teachers_of_student(&pool, s.id).unwrap().is_empty());
    }

    #[test]
    fn test_missing_teacher_reported_before_student() {
        let pool = pool();
        let err = add_student_to_teacher(&pool, 11, 12).unwrap_err();
        assert!(err.to_string().contains("teacher with id 11"));
    }
}
