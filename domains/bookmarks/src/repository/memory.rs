//! In-memory bookmark repository
//!
//! Honors the same contract as the PostgreSQL repository (insertion order,
//! rows-affected counts, idempotent delete) without a database, so the HTTP
//! layer can be exercised end to end in tests.

use linkshelf_common::{Error, Result};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::BookmarkStore;
use crate::domain::entities::{Bookmark, BookmarkPatch};

/// In-memory bookmark store backed by an insertion-ordered vector
#[derive(Debug, Default)]
pub struct InMemoryBookmarkRepository {
    rows: RwLock<Vec<Bookmark>>,
}

impl InMemoryBookmarkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given rows, in order
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            rows: RwLock::new(bookmarks),
        }
    }
}

#[async_trait::async_trait]
impl BookmarkStore for InMemoryBookmarkRepository {
    async fn list_all(&self) -> Result<Vec<Bookmark>> {
        Ok(self.rows.read().await.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Bookmark>> {
        Ok(self.rows.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, bookmark: &Bookmark) -> Result<Bookmark> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|b| b.id == bookmark.id) {
            // Mirrors the primary key violation the database would raise
            return Err(Error::Internal(format!(
                "duplicate bookmark id {}",
                bookmark.id
            )));
        }
        rows.push(bookmark.clone());
        Ok(bookmark.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|b| b.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn update(&self, id: Uuid, patch: &BookmarkPatch) -> Result<u64> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|b| b.id == id) {
            Some(bookmark) => {
                bookmark.apply(patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
