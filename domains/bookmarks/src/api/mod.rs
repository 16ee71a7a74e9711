//! API layer for the Bookmarks domain
//!
//! Contains HTTP handlers, routes, the id-resolution extractor and the
//! domain state definition.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use extractors::ResolvedBookmark;
pub use middleware::BookmarksState;
pub use routes::routes;
