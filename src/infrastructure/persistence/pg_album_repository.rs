//! PostgreSQL implementation of the album repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Album, NewAlbum};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::AlbumRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct AlbumRow {
    id: i64,
    title: String,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AlbumRow> for Album {
    fn from(r: AlbumRow) -> Self {
        Album {
            id: r.id,
            title: r.title,
            user_id: r.user_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct PgAlbumRepository {
    pool: Arc<PgPool>,
}

impl PgAlbumRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for PgAlbumRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Album>, AppError> {
        let row = sqlx::query_as::<_, AlbumRow>(
            "SELECT id, title, user_id, created_at, updated_at FROM albums WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Album::from))
    }

    async fn list(&self, page: PageRequest) -> Result<Page<Album>, AppError> {
        let rows = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT id, title, user_id, created_at, updated_at
            FROM albums
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM albums")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(Page::new(
            rows.into_iter().map(Album::from).collect(),
            page,
            total,
        ))
    }

    async fn list_by_user(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<Page<Album>, AppError> {
        let rows = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT id, title, user_id, created_at, updated_at
            FROM albums
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM albums WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(Page::new(
            rows.into_iter().map(Album::from).collect(),
            page,
            total,
        ))
    }

    async fn create(&self, new_album: NewAlbum) -> Result<Album, AppError> {
        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            INSERT INTO albums (title, user_id)
            VALUES ($1, $2)
            RETURNING id, title, user_id, created_at, updated_at
            "#,
        )
        .bind(&new_album.title)
        .bind(new_album.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, title: &str) -> Result<Album, AppError> {
        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            UPDATE albums SET title = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Album::from)
            .ok_or_else(|| AppError::resource_not_found("Album", "id", id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("Album", "id", id));
        }

        Ok(())
    }
}
