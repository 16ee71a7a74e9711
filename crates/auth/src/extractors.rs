//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::AuthBackend;
use crate::bearer::extract_bearer_token;
use crate::error::AuthError;

/// Proof that the request carried the configured bearer token.
///
/// Place it first in a handler's argument list so the gate runs before
/// any other extractor touches the store.
#[derive(Debug, Clone, Copy)]
pub struct ApiToken;

impl<S> FromRequestParts<S> for ApiToken
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        backend.verify_token(token)?;

        Ok(ApiToken)
    }
}
