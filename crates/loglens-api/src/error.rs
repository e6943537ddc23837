//! Error types for the log API server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use loglens_core::LogError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur in the API server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to bind to the specified address.
    #[error("failed to bind to {0}: {1}")]
    BindFailed(std::net::SocketAddr, std::io::Error),

    /// Resource not found.
    #[error("{0} not found: {1}")]
    NotFound(String, String),

    /// Invalid request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The log directory or one of its files could not be read.
    #[error("log source unavailable: {0}")]
    SourceUnavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Server-side failures keep their detail in the log, not the body.
        let (status, error_type, message) = match &self {
            Self::NotFound(_, _) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            Self::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request", self.to_string()),
            Self::SourceUnavailable(detail) => {
                error!(detail = %detail, "log source unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "log_source_unavailable",
                    "log source unavailable".to_string(),
                )
            }
            Self::BindFailed(_, _) | Self::Internal(_) => {
                error!(detail = %self, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        let json = serde_json::to_string(&body).unwrap_or_else(|_| {
            r#"{"error":"internal_error","message":"failed to serialize error"}"#.to_string()
        });

        (status, [("content-type", "application/json")], json).into_response()
    }
}

impl From<LogError> for ApiError {
    fn from(err: LogError) -> Self {
        match err {
            LogError::SourceUnavailable { .. } => Self::SourceUnavailable(err.to_string()),
            LogError::InvalidPagination(message) => Self::InvalidRequest(message),
            LogError::NotFound(id) => Self::NotFound("log entry".to_string(), id),
        }
    }
}
