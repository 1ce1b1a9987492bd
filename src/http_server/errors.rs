//! # API Errors
//!
//! Every failure of the client endpoint, rendered as the error envelope
//! `{"status":"error","code":...,"message":...}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::client::ValidationError;
use crate::observability::{events, Logger};
use crate::store::StoreError;

use super::response::ErrorEnvelope;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the client endpoint
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Credential header absent or not equal to the shared secret
    #[error("Invalid authorization token")]
    Unauthorized,

    /// Payload rejected by validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Storage unreadable, corrupt, or not writable
    #[error("{0}")]
    Storage(#[from] StoreError),

    /// Worker task failed
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller. Server faults are not described.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Storage(_) | ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Emit the log line for this failure
    pub fn log(&self) {
        let code = self.status_code().as_u16().to_string();
        let detail = self.to_string();
        match self {
            ApiError::Unauthorized => Logger::warn(
                events::CLIENT_REJECTED,
                &[("code", code.as_str()), ("reason", "auth")],
            ),
            ApiError::Validation(e) => Logger::warn(
                events::CLIENT_REJECTED,
                &[
                    ("code", code.as_str()),
                    ("reason", e.kind()),
                    ("detail", detail.as_str()),
                ],
            ),
            ApiError::Storage(_) | ApiError::Internal(_) => {
                Logger::error(
                    events::STORAGE_FAULT,
                    &[("code", code.as_str()), ("detail", detail.as_str())],
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorEnvelope::new(status, self.client_message()));
        (status, body).into_response()
    }
}
