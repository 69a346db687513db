//! Subject route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use campus_core::subject;
use campus_core::subject::model::SubjectDto;

use crate::error::ApiError;
use crate::routes::teachers::SubjectPayload;
use crate::state::AppState;

pub async fn list_subjects(State(state): State<AppState>) -> Result<Json<Vec<SubjectDto>>, ApiError> {
    let subjects = subject::list_subjects(&state.db)?;
    Ok(Json(subjects))
}

pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SubjectDto>, ApiError> {
    let dto = subject::get_subject(&state.db, id)?;
    Ok(Json(dto))
}

pub async fn create_subject(
    State(state): State<AppState>,
    Json(payload): Json<SubjectPayload>,
) -> Result<(StatusCode, Json<SubjectDto>), ApiError> {
    let new = payload.validate()?;
    let dto = subject::create_subject(&state.db, &new)?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SubjectPayload>,
) -> Result<Json<SubjectDto>, ApiError> {
    let new = payload.validate()?;
    let dto = subject::update_subject(&state.db, id, &new)?;
    Ok(Json(dto))
}

pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    subject::delete_subject(&state.db, id)?;
    Ok(StatusCode::NO_CONTENT)
}
