//! Repository implementations for the Bookmarks domain
//!
//! `BookmarkStore` is the single source of truth for the table's shape. Each
//! method is one atomic store interaction.

pub mod bookmarks;
pub mod memory;

use linkshelf_common::Result;
use uuid::Uuid;

use crate::domain::entities::{Bookmark, BookmarkPatch};

pub use bookmarks::PgBookmarkRepository;
pub use memory::InMemoryBookmarkRepository;

/// Storage contract for bookmarks
#[async_trait::async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All bookmarks in insertion order
    async fn list_all(&self) -> Result<Vec<Bookmark>>;

    /// Find a bookmark by ID
    async fn find(&self, id: Uuid) -> Result<Option<Bookmark>>;

    /// Persist a fully formed bookmark and return the stored row
    async fn insert(&self, bookmark: &Bookmark) -> Result<Bookmark>;

    /// Delete a bookmark, returning the number of rows removed
    async fn delete(&self, id: Uuid) -> Result<u64>;

    /// Apply the supplied fields only, returning the number of rows changed
    async fn update(&self, id: Uuid, patch: &BookmarkPatch) -> Result<u64>;
}
