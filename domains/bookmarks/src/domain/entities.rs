//! Domain entities for the Bookmarks domain
//!
//! A bookmark is a saved link with a title, an optional description and a
//! 1-5 rating. Its `id` is generated by the server on creation and never
//! changes afterwards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest accepted rating
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating
pub const MAX_RATING: i32 = 5;

/// Bookmark entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bookmark {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

impl Bookmark {
    /// Build a new bookmark with a freshly generated v4 id.
    ///
    /// Field rules are enforced by `CreateBookmarkRequest::validate`, which is
    /// the only caller outside tests.
    pub fn new(title: String, url: String, description: String, rating: i32) -> Self {
        Bookmark {
            id: Uuid::new_v4(),
            title,
            url,
            description,
            rating,
        }
    }

    /// Whether the rating lies within the accepted bounds
    pub fn rating_in_range(rating: i64) -> bool {
        (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&rating)
    }

    /// Apply a partial update in place, leaving unspecified fields untouched
    pub fn apply(&mut self, patch: &BookmarkPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(url) = &patch.url {
            self.url = url.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
    }
}

/// Validated subset of bookmark fields for a partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i32>,
}

impl BookmarkPatch {
    /// True when no updatable field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.rating.is_none()
    }
}
