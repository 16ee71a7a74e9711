//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    InvalidToken,
}

impl AuthError {
    fn reason(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "missing authorization header",
            AuthError::InvalidAuthorizationFormat => "invalid authorization header format",
            AuthError::InvalidToken => "invalid bearer token",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!(reason = self.reason(), "Unauthorized request");

        // The client gets the same answer whatever the reason
        let body = Json(json!({
            "error": {
                "message": "Unauthorized request",
            }
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
