//! Resolution of `/bookmarks/{id}` paths
//!
//! Loads the addressed bookmark before the handler runs. A missing record,
//! or an id that is not a UUID and so cannot match one, ends the request
//! with a 404.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use linkshelf_common::Error;
use uuid::Uuid;

use super::middleware::BookmarksState;
use crate::domain::entities::Bookmark;

pub const BOOKMARK_NOT_FOUND: &str = "Bookmark Not Found";

/// The bookmark addressed by the request path
#[derive(Debug, Clone)]
pub struct ResolvedBookmark(pub Bookmark);

impl FromRequestParts<BookmarksState> for ResolvedBookmark {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &BookmarksState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| Error::NotFound(BOOKMARK_NOT_FOUND.to_string()))?;

        let Ok(id) = Uuid::parse_str(&raw_id) else {
            tracing::warn!(bookmark_id = %raw_id, "Bookmark not found");
            return Err(Error::NotFound(BOOKMARK_NOT_FOUND.to_string()));
        };

        match state.repo.find(id).await? {
            Some(bookmark) => Ok(ResolvedBookmark(bookmark)),
            None => {
                tracing::warn!(bookmark_id = %id, "Bookmark not found");
                Err(Error::NotFound(BOOKMARK_NOT_FOUND.to_string()))
            }
        }
    }
}
