//! Application Error Types
//!
//! Centralized error handling with Axum integration. Clients only ever see
//! the generic message of an error; detail stays in the server log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::StorageError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {message} ({detail})")]
    Internal { message: String, detail: String },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Map a storage failure onto the endpoint's generic `message`.
    ///
    /// Integrity violations are the caller's fault (400); anything else is a
    /// backend fault (500).
    pub fn from_storage(err: StorageError, message: &str) -> Self {
        if err.is_integrity_violation() {
            tracing::debug!(error = %err, "Storage rejected request");
            Self::BadRequest(message.to_string())
        } else {
            Self::Internal {
                message: message.to_string(),
                detail: err.to_string(),
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(msg) => msg,
            AppError::Internal { message, detail } => {
                tracing::error!("Internal error: {}", detail);
                message
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
