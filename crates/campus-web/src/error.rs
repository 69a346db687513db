//! Translation of domain errors into HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use campus_core::CampusError;
use std::collections::BTreeMap;

/// Error shape returned by every handler.
///
/// `NotFound` becomes 404 and `AlreadyAdded` 409, each with the domain
/// message as a plain-text body. Validation failures carry a
/// field-name → message map and become 400 with a JSON object body.
#[derive(Debug)]
pub enum ApiError {
    Domain(CampusError),
    Validation(BTreeMap<String, String>),
}

impl From<CampusError> for ApiError {
    fn from(err: CampusError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain(CampusError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, msg).into_response()
            }
            Self::Domain(CampusError::AlreadyAdded(msg)) => {
                (StatusCode::CONFLICT, msg).into_response()
            }
            Self::Domain(CampusError::Database(e)) => {
                tracing::error!("database error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string()).into_response()
            }
            Self::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
        }
    }
}
