//! Bookmark API handlers
//!
//! Every handler takes `ApiToken` first so the auth gate runs before id
//! resolution or any store access.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use linkshelf_auth::ApiToken;
use linkshelf_common::{ApiJson, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::api::extractors::ResolvedBookmark;
use crate::api::middleware::BookmarksState;
use crate::domain::entities::Bookmark;
use crate::domain::sanitize::sanitize_bookmark;
use crate::domain::validation::{CreateBookmarkRequest, UpdateBookmarkRequest};

/// Bookmark response DTO, always built from the sanitized record
#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(b: Bookmark) -> Self {
        let safe = sanitize_bookmark(&b);
        Self {
            id: safe.id,
            title: safe.title,
            url: safe.url,
            description: safe.description,
            rating: safe.rating,
        }
    }
}

/// List every bookmark
pub async fn list_bookmarks(
    _: ApiToken,
    State(state): State<BookmarksState>,
) -> Result<Json<Vec<BookmarkResponse>>> {
    let bookmarks = state.repo.list_all().await?;

    let responses: Vec<BookmarkResponse> = bookmarks.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Get a single bookmark by ID
pub async fn get_bookmark(
    _: ApiToken,
    ResolvedBookmark(bookmark): ResolvedBookmark,
) -> Json<BookmarkResponse> {
    Json(bookmark.into())
}

/// Create a new bookmark
pub async fn create_bookmark(
    _: ApiToken,
    State(state): State<BookmarksState>,
    ApiJson(req): ApiJson<CreateBookmarkRequest>,
) -> Result<impl IntoResponse> {
    let bookmark = req.validate()?;

    let created = state.repo.insert(&bookmark).await?;
    tracing::info!(bookmark_id = %created.id, "Bookmark with id {} created", created.id);

    let location = format!("/bookmarks/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookmarkResponse::from(created)),
    ))
}

/// Update the supplied fields of a bookmark
pub async fn update_bookmark(
    _: ApiToken,
    ResolvedBookmark(bookmark): ResolvedBookmark,
    State(state): State<BookmarksState>,
    ApiJson(req): ApiJson<UpdateBookmarkRequest>,
) -> Result<StatusCode> {
    let patch = req.validate()?;

    let rows = state.repo.update(bookmark.id, &patch).await?;
    tracing::info!(bookmark_id = %bookmark.id, rows, "Bookmark updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a bookmark
pub async fn delete_bookmark(
    _: ApiToken,
    ResolvedBookmark(bookmark): ResolvedBookmark,
    State(state): State<BookmarksState>,
) -> Result<StatusCode> {
    // Resolution already proved the row existed; a concurrent delete that
    // wins the race still answers 204
    let rows = state.repo.delete(bookmark.id).await?;
    tracing::info!(bookmark_id = %bookmark.id, rows, "Bookmark deleted");

    Ok(StatusCode::NO_CONTENT)
}
