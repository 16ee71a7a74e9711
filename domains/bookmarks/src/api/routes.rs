//! Route definitions for the Bookmarks domain API

use axum::{routing::get, Router};

use super::handlers::bookmarks;
use super::middleware::BookmarksState;

/// Create all Bookmarks domain API routes
pub fn routes() -> Router<BookmarksState> {
    Router::new()
        .route(
            "/bookmarks",
            get(bookmarks::list_bookmarks).post(bookmarks::create_bookmark),
        )
        .route(
            "/bookmarks/{id}",
            get(bookmarks::get_bookmark)
                .patch(bookmarks::update_bookmark)
                .delete(bookmarks::delete_bookmark),
        )
}
