//! Subject service: plain CRUD.

pub mod model;

use crate::error::{CampusError, CampusResult};
use campus_db::queries::subjects as queries;
use campus_db::queries::subjects::SubjectRow;
use campus_db::DbPool;
use model::{NewSubject, SubjectDto};

pub(crate) fn require_subject(pool: &DbPool, id: i64) -> CampusResult<SubjectRow> {
    queries::get_subject(pool, id)?
        .ok_or_else(|| CampusError::not_found(format!("There is no subject with id {id}")))
}

/// Get a subject by id.
pub fn get_subject(pool: &DbPool, id: i64) -> CampusResult<SubjectDto> {
    Ok(SubjectDto::from_row(require_subject(pool, id)?))
}

/// List all subjects.
pub fn list_subjects(pool: &DbPool) -> CampusResult<Vec<SubjectDto>> {
    let rows = queries::list_subjects(pool)?;
    Ok(rows.into_iter().map(SubjectDto::from_row).collect())
}

/// Create a new subject, unowned by any teacher.
pub fn create_subject(pool: &DbPool, new: &NewSubject) -> CampusResult<SubjectDto> {
    let row = queries::insert_subject(pool, &new.name, None)?;
    tracing::debug!(id = row.id, "created subject");
    Ok(SubjectDto::from_row(row))
}

/// Overwrite a subject's name. The owning teacher is untouched.
pub fn update_subject(pool: &DbPool, id: i64, new: &NewSubject) -> CampusResult<SubjectDto> {
    require_subject(pool, id)?;
    queries::update_subject(pool, id, &new.name)?;
    get_subject(pool, id)
}

/// Delete a subject.
pub fn delete_subject(pool: &DbPool, id: i64) -> CampusResult<()> {
    require_subject(pool, id)?;
    queries::delete_subject(pool, id)?;
    tracing::debug!(id, "deleted subject");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        campus_db::migrations::run_migrations(&pool).unwrap();
        pool
    }

    #[test]
    fn test_crud_cycle() {
        let pool = pool();
        let created = create_subject(&pool, &NewSubject { name: "Math".into() }).unwrap();
        assert_eq!(created.id, 1);

        let renamed = update_subject(&pool, created.id, &NewSubject { name: "Algebra".into() }).unwrap();
        assert_eq!(renamed.name, "Algebra");
        assert_eq!(renamed.id, created.id);

        assert_eq!(list_subjects(&pool).unwrap().len(), 1);

        delete_subject(&pool, created.id).unwrap();
        assert!(list_subjects(&pool).unwrap().is_empty());
    }

    #[test]
    fn test_missing_subject_operations_fail() {
        let pool = pool();
        assert!(matches!(get_subject(&pool, 1).unwrap_err(), CampusError::NotFound(_)));
        assert!(matches!(
            update_subject(&pool, 1, &NewSubject { name: "Math".into() }).unwrap_err(),
            CampusError::NotFound(_)
        ));

        let err = delete_subject(&pool, 999).unwrap_err();
        assert!(err.to_string().contains("999"));
    }
}
