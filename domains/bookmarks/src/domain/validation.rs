//! Request validation for bookmark writes
//!
//! Request bodies deserialize into typed requests whose fields are all
//! optional, then `validate` turns them into domain values. Rules run in a
//! fixed order and the first failure wins.

use linkshelf_common::{Error, Result};
use serde::Deserialize;

use super::entities::{Bookmark, BookmarkPatch};

pub const TITLE_REQUIRED: &str = "title required";
pub const URL_REQUIRED: &str = "url required";
pub const RATING_REQUIRED: &str = "rating required";
pub const RATING_OUT_OF_RANGE: &str = "rating out of range";
pub const NO_UPDATABLE_FIELDS: &str =
    "request body must contain either 'title', 'url', 'description' or 'rating'";

/// Body of `POST /bookmarks`
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i64>,
}

/// Body of `PATCH /bookmarks/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookmarkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i64>,
}

fn reject(message: &'static str) -> Error {
    tracing::warn!(reason = message, "Bookmark validation failed");
    Error::Validation(message.to_string())
}

fn non_empty(value: Option<String>, message: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(reject(message)),
    }
}

fn checked_rating(rating: i64) -> Result<i32> {
    if !Bookmark::rating_in_range(rating) {
        return Err(reject(RATING_OUT_OF_RANGE));
    }
    i32::try_from(rating).map_err(|_| reject(RATING_OUT_OF_RANGE))
}

impl CreateBookmarkRequest {
    /// Validate the request and build a new bookmark with a fresh id
    pub fn validate(self) -> Result<Bookmark> {
        let title = non_empty(self.title, TITLE_REQUIRED)?;
        let url = non_empty(self.url, URL_REQUIRED)?;
        let rating = self.rating.ok_or_else(|| reject(RATING_REQUIRED))?;
        let rating = checked_rating(rating)?;

        Ok(Bookmark::new(
            title,
            url,
            self.description.unwrap_or_default(),
            rating,
        ))
    }
}

impl UpdateBookmarkRequest {
    /// Validate the supplied fields and build a patch
    pub fn validate(self) -> Result<BookmarkPatch> {
        if self.title.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.rating.is_none()
        {
            return Err(reject(NO_UPDATABLE_FIELDS));
        }

        let title = match self.title {
            Some(t) => Some(non_empty(Some(t), TITLE_REQUIRED)?),
            None => None,
        };
        let url = match self.url {
            Some(u) => Some(non_empty(Some(u), URL_REQUIRED)?),
            None => None,
        };
        let rating = self.rating.map(checked_rating).transpose()?;

        Ok(BookmarkPatch {
            title,
            url,
            description: self.description,
            rating,
        })
    }
}
