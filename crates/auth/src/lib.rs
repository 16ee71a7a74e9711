//! Authentication gate for the Linkshelf API
//!
//! Every bookmark route requires `Authorization: bearer <token>` where the
//! token equals the configured `API_TOKEN`. The check is exposed as an axum
//! extractor that works with any state implementing `FromRef<S>` for
//! `AuthBackend`.

mod backend;
mod bearer;
mod config;
mod error;
mod extractors;

pub use backend::AuthBackend;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::ApiToken;
