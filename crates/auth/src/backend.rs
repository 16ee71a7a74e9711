//! Concrete authentication backend
//!
//! Holds the configured token and performs the pass/fail check. No store
//! access happens here, so a rejected request never reaches the database.

use linkshelf_common::token_matches;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Verify a presented bearer token against the configured one
    pub fn verify_token(&self, token: &str) -> Result<(), AuthError> {
        if token_matches(token, &self.config.api_token) {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}
