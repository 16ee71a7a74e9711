//! Common error types and handling for Linkshelf

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Message returned to clients for every 5xx response
const SERVER_ERROR_MESSAGE: &str = "server error";

/// Common error type for the Linkshelf service
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Authentication(_) => StatusCode::UNAUTHORIZED,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Unexpected(_) | Error::Database(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error code used in structured logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Database(_) => "DATABASE_ERROR",
            Error::Authentication(_) => "AUTHENTICATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message that is safe to hand to a client.
    ///
    /// Server-side failures never expose their cause.
    pub fn client_message(&self) -> &str {
        match self {
            Error::Authentication(msg) | Error::Validation(msg) | Error::NotFound(msg) => msg,
            Error::Unexpected(_) | Error::Database(_) | Error::Internal(_) => SERVER_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors with full context
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "Internal server error");
        }

        match self {
            // Validation failures are reported as a plain message
            Error::Validation(msg) => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                msg,
            )
                .into_response(),
            other => {
                let body = Json(json!({
                    "error": {
                        "message": other.client_message(),
                    }
                }));

                (status, body).into_response()
            }
        }
    }
}
