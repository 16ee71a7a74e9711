//! Bookmarks domain state and auth backend integration

use crate::repository::BookmarkStore;
use axum::extract::FromRef;
use linkshelf_auth::AuthBackend;
use std::sync::Arc;

/// Application state for the Bookmarks domain
#[derive(Clone)]
pub struct BookmarksState {
    pub repo: Arc<dyn BookmarkStore>,
    pub auth: AuthBackend,
}

impl BookmarksState {
    pub fn new(repo: Arc<dyn BookmarkStore>, auth: AuthBackend) -> Self {
        Self { repo, auth }
    }
}

impl FromRef<BookmarksState> for AuthBackend {
    fn from_ref(state: &BookmarksState) -> Self {
        state.auth.clone()
    }
}
