//! Authentication configuration

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub api_token: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_token", &"<redacted>")
            .finish()
    }
}
