//! Linkshelf application composition root
//!
//! Composes the domain routers and shared HTTP middleware into a single
//! application.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use linkshelf_auth::{AuthBackend, AuthConfig};
use linkshelf_bookmarks::{BookmarkStore, BookmarksState};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes
pub fn create_app(store: Arc<dyn BookmarkStore>, auth_config: AuthConfig) -> Router {
    let bookmarks_state = BookmarksState::new(store, AuthBackend::new(auth_config));

    // Infrastructure routes sit outside the auth gate
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async {
                concat!("Linkshelf API v", env!("CARGO_PKG_VERSION"))
            }),
        )
        .merge(linkshelf_bookmarks::routes().with_state(bookmarks_state))
        .layer(body_limit_layer())
}

/// Build the CORS layer from a comma-separated origin list.
///
/// `None` or a `*` entry allows any origin. Entries that are not valid
/// header values are skipped with a warning.
pub fn build_cors_layer(origins: Option<&str>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };
    if origins.split(',').any(|o| o.trim() == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::permissive().allow_origin(AllowOrigin::list(allowed))
}

/// Request body size limit for every route
pub fn body_limit_layer() -> DefaultBodyLimit {
    DefaultBodyLimit::max(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
