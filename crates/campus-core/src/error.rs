//! Centralized error types for the campus services.

use thiserror::Error;

/// Domain error for campus operations.
///
/// Every service failure is one of these; the web layer translates them
/// into HTTP statuses. Payload validation never reaches the services, so
/// there is no validation variant here.
#[derive(Error, Debug)]
pub enum CampusError {
    /// An id (or name) lookup came up empty. The message names the
    /// entity kind and the id that was asked for.
    #[error("{0}")]
    NotFound(String),

    /// An association-add found the target already present.
    #[error("{0}")]
    AlreadyAdded(String),

    #[error("Database error: {0}")]
    Database(#[from] campus_db::DbError),
}

/// Result type for campus operations.
pub type CampusResult<T> = Result<T, CampusError>;

impl CampusError {
    /// Create a not-found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an already-added error.
    pub fn already_added(msg: impl Into<String>) -> Self {
        Self::AlreadyAdded(msg.into())
    }
}
