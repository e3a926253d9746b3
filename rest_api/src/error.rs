// rest_api/src/error.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use models::ValidationError;
use security::AuthError;
use storage::StorageError;

/// The one error type every handler answers with. Each variant maps to a
/// status code and a message; the body is always the same envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("missing or expired session")]
    Unauthenticated,
    #[error("{0}")]
    Forbidden(String),
    #[error("duplicate value for {0}")]
    Duplicate(&'static str),
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::Duplicate(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidCredentials | ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated => ApiError::Unauthenticated,
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::Forbidden { .. } => ApiError::Forbidden(err.to_string()),
            AuthError::PasswordHash(msg) => {
                error!(%msg, "password hashing failure");
                ApiError::Internal
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => ApiError::NotFound("record"),
            StorageError::Duplicate(what) => ApiError::Duplicate(what),
            other => {
                error!(error = %other, "store operation failed");
                ApiError::Internal
            }
        }
    }
}

/// Maps a keyed store miss to a 404 naming the entity, leaving every other
/// storage failure to the blanket conversion.
pub(crate) fn entity(err: StorageError, what: &'static str) -> ApiError {
    match err {
        StorageError::NotFound => ApiError::NotFound(what),
        other => other.into(),
    }
}
