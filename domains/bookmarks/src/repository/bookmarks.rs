//! PostgreSQL bookmark repository

use linkshelf_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

use super::BookmarkStore;
use crate::domain::entities::{Bookmark, BookmarkPatch};

#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: PgPool,
}

impl PgBookmarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl BookmarkStore for PgBookmarkRepository {
    async fn list_all(&self) -> Result<Vec<Bookmark>> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, title, url, description, rating
            FROM bookmarks
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookmarks)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Bookmark>> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, title, url, description, rating
            FROM bookmarks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bookmark)
    }

    async fn insert(&self, bookmark: &Bookmark) -> Result<Bookmark> {
        let created = sqlx::query_as::<_, Bookmark>(
            r#"
            INSERT INTO bookmarks (id, title, url, description, rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, url, description, rating
            "#,
        )
        .bind(bookmark.id)
        .bind(&bookmark.title)
        .bind(&bookmark.url)
        .bind(&bookmark.description)
        .bind(bookmark.rating)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: Uuid, patch: &BookmarkPatch) -> Result<u64> {
        // Absent fields bind NULL and COALESCE keeps the stored value
        let result = sqlx::query(
            r#"
            UPDATE bookmarks SET
                title = COALESCE($2, title),
                url = COALESCE($3, url),
                description = COALESCE($4, description),
                rating = COALESCE($5, rating)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.url.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.rating)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
