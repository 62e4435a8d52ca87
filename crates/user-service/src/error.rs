//! Unified error handling for HTTP handlers.
//!
//! Provides the `AppError` type that every route handler returns. Errors are
//! logged where they occur (repositories, extractors); this type only maps
//! them to a status code and a JSON body of the form `{"error": "..."}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the user service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed path or body.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(resource) => Self::NotFound(resource.to_string()),
            RepositoryError::Database(e) => Self::Database(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        tracing::debug!(error = %message, "Rejected request body");
        Self::BadRequest(message)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        let message = rejection.body_text();
        tracing::debug!(error = %message, "Rejected request path");
        Self::BadRequest(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
