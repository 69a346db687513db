//! Student route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use campus_core::student;
use campus_core::student::model::{NewStudent, StudentDto};
use campus_core::subject::model::SubjectDto;
use campus_core::teacher::model::TeacherDto;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::state::AppState;

/// Inbound student payload. Everything is optional at the wire level so
/// that validation can report all missing fields at once.
#[derive(Deserialize)]
pub struct StudentPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub age: Option<i64>,
}

impl StudentPayload {
    fn validate(self) -> Result<NewStudent, ApiError> {
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
        Ok(NewStudent {
            first_name: self.first_name.unwrap(),
            last_name: self.last_name.unwrap(),
            middle_name: self.middle_name.unwrap(),
            age: self.age.unwrap(),
        })
    }
}

#[derive(Deserialize)]
pub struct TeacherIdQuery {
    pub teacher_id: i64,
}

#[derive(Deserialize)]
pub struct SubjectIdQuery {
    pub subject_id: i64,
}

pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<StudentDto>>, ApiError> {
    let students = student::list_students(&state.db)?;
    Ok(Json(students))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StudentDto>, ApiError> {
    let dto = student::get_student(&state.db, id)?;
    Ok(Json(dto))
}

pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentPayload>,
) -> Result<(StatusCode, Json<StudentDto>), ApiError> {
    let new = payload.validate()?;
    let dto = student::create_student(&state.db, &new)?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StudentPayload>,
) -> Result<Json<StudentDto>, ApiError> {
    let new = payload.validate()?;
    let dto = student::update_student(&state.db, id, &new)?;
    Ok(Json(dto))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    student::delete_student(&state.db, id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_teachers_of_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<TeacherDto>>, ApiError> {
    let teachers = student::teachers_of_student(&state.db, id)?;
    Ok(Json(teachers))
}

pub async fn add_teacher_to_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<TeacherIdQuery>,
) -> Result<StatusCode, ApiError> {
    student::add_teacher_to_student(&state.db, id, query.teacher_id)?;
    Ok(StatusCode::OK)
}

pub async fn remove_teacher_from_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<TeacherIdQuery>,
) -> Result<StatusCode, ApiError> {
    student::remove_teacher_from_student(&state.db, id, query.teacher_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_subjects_of_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SubjectDto>>, ApiError> {
    let subjects = student::subjects_of_student(&state.db, id)?;
    Ok(Json(subjects))
}

pub async fn add_subject_to_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<SubjectIdQuery>,
) -> Result<StatusCode, ApiError> {
    student::add_subject_to_student(&state.db, id, query.subject_id)?;
    Ok(StatusCode::OK)
}

pub async fn remove_subject_from_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<SubjectIdQuery>,
) -> Result<StatusCode, ApiError> {
    student::remove_subject_from_student(&state.db, id, query.subject_id)?;
    Ok(StatusCode::NO_CONTENT)
}
