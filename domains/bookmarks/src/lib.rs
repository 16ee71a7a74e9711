//! Bookmarks domain: bookmark records, validation, sanitization, storage and HTTP API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Bookmark, BookmarkPatch, MAX_RATING, MIN_RATING};
pub use domain::sanitize::sanitize_bookmark;
pub use domain::validation::{CreateBookmarkRequest, UpdateBookmarkRequest};

// Re-export repository types
pub use repository::{BookmarkStore, InMemoryBookmarkRepository, PgBookmarkRepository};

// Re-export API types
pub use api::routes;
pub use api::BookmarksState;
