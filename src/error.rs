use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors raised by the matching engine, its repositories and the selection writes
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl MatchError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        MatchError::NotFound { entity, id }
    }

    /// Short machine-readable code used in the `error` field of responses
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::NotFound { .. } => "not_found",
            MatchError::ValidationFailed(_) => "validation_failed",
            MatchError::Conflict(_) => "conflict",
            MatchError::Database(_) | MatchError::Migration(_) => "internal_error",
        }
    }
}

impl From<validator::ValidationErrors> for MatchError {
    fn from(errors: validator::ValidationErrors) -> Self {
        MatchError::ValidationFailed(errors.to_string())
    }
}

impl ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchError::NotFound { .. } => StatusCode::NOT_FOUND,
            MatchError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            MatchError::Conflict(_) => StatusCode::CONFLICT,
            MatchError::Database(_) | MatchError::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!("Internal error: {}", self);
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message,
            status_code: status.as_u16(),
        })
    }
}
