//! Teacher route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use campus_core::student::model::StudentDto;
use campus_core::subject::model::{NewSubject, SubjectDto};
use campus_core::teacher;
use campus_core::teacher::model::{NewTeacher, TeacherDto};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::state::AppState;

/// Inbound teacher payload; same validation rules as for students.
#[derive(Deserialize)]
pub struct TeacherPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub age: Option<i64>,
}

impl TeacherPayload {
    fn validate(self) -> Result<NewTeacher, ApiError> {
        let mut errors = BTreeMap::new();
        if self.first_name.is_none() {
            errors.insert("first_name".to_string(), "First name cannot be null".to_string());
        }
        if self.last_name.is_none() {
            errors.insert("last_name".to_string(), "Last name cannot be null".to_string());
        }
        if self.middle_name.is_none() {
            errors.insert("middle_name".to_string(), "Middle name cannot be null".to_string());
        }
        if self.age.unwrap_or(0) < 1 {
            errors.insert("age".to_string(), "Age must be greater than 0".to_string());
        }
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }
        Ok(NewTeacher {
            first_name: self.first_name.unwrap(),
            last_name: self.last_name.unwrap(),
            middle_name: self.middle_name.unwrap(),
            age: self.age.unwrap(),
        })
    }
}

/// Inbound subject payload for the attach-subject endpoint.
#[derive(Deserialize)]
pub struct SubjectPayload {
    pub name: Option<String>,
}

impl SubjectPayload {
    pub(crate) fn validate(self) -> Result<NewSubject, ApiError> {
        match self.name {
            Some(name) => Ok(NewSubject { name }),
            None => {
                let mut errors = BTreeMap::new();
                errors.insert("name".to_string(), "Name cannot be null".to_string());
                Err(ApiError::Validation(errors))
            }
        }
    }
}

#[derive(Deserialize)]
pub struct StudentIdQuery {
    pub student_id: i64,
}

#[derive(Deserialize)]
pub struct SubjectIdQuery {
    pub subject_id: i64,
}

pub async fn list_teachers(State(state): State<AppState>) -> Result<Json<Vec<TeacherDto>>, ApiError> {
    let teachers = teacher::list_teachers(&state.db)?;
    Ok(Json(teachers))
}

/// Lookup by id or name: a numeric key is an id, anything else a
/// case-insensitive first-or-last-name match.
pub async fn find_teacher(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<TeacherDto>, ApiError> {
    let dto = teacher::find_teacher(&state.db, &key)?;
    Ok(Json(dto))
}

pub async fn create_teacher(
    State(state): State<AppState>,
    Json(payload): Json<TeacherPayload>,
) -> Result<(StatusCode, Json<TeacherDto>), ApiError> {
    let new = payload.validate()?;
    let dto = teacher::create_teacher(&state.db, &new)?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TeacherPayload>,
) -> Result<Json<TeacherDto>, ApiError> {
    let new = payload.validate()?;
    let dto = teacher::update_teacher(&state.db, id, &new)?;
    Ok(Json(dto))
}

pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    teacher::delete_teacher(&state.db, id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_subjects_of_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SubjectDto>>, ApiError> {
    let subjects = teacher::subjects_of_teacher(&state.db, id)?;
    Ok(Json(subjects))
}

pub async fn add_subject_to_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SubjectPayload>,
) -> Result<Json<SubjectDto>, ApiError> {
    let new = payload.validate()?;
    let dto = teacher::add_subject_to_teacher(&state.db, id, &new)?;
    Ok(Json(dto))
}

pub async fn remove_subject_from_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<SubjectIdQuery>,
) -> Result<StatusCode, ApiError> {
    teacher::remove_subject_from_teacher(&state.db, id, query.subject_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_students_of_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<StudentDto>>, ApiError> {
    let students = teacher::students_of_teacher(&state.db, id)?;
    Ok(Json(students))
}

pub async fn add_student_to_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StudentIdQuery>,
) -> Result<StatusCode, ApiError> {
    teacher::add_student_to_teacher(&state.db, id, query.student_id)?;
    Ok(StatusCode::OK)
}

pub async fn remove_student_from_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StudentIdQuery>,
) -> Result<StatusCode, ApiError> {
    teacher::remove_student_from_teacher(&state.db, id, query.student_id)?;
    Ok(StatusCode::NO_CONTENT)
}
