//! Authorization header parsing

use axum::http::HeaderValue;

use crate::error::AuthError;

/// Extract the token from a `Bearer <token>` authorization header.
///
/// The scheme name is matched case-insensitively, so `bearer`, `Bearer`
/// and `BEARER` are all accepted. Everything after the single separating
/// space is the token, padding included.
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<&str, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    let (scheme, token) = header_str
        .split_once(' ')
        .ok_or(AuthError::InvalidAuthorizationFormat)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidAuthorizationFormat);
    }

    if token.is_empty() {
        return Err(AuthError::InvalidAuthorizationFormat);
    }

    Ok(token)
}
