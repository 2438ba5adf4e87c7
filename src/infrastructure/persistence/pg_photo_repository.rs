//! PostgreSQL implementation of the photo repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPhoto, Photo};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::PhotoRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct PhotoRow {
    id: i64,
    title: String,
    url: String,
    thumbnail_url: String,
    album_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PhotoRow> for Photo {
    fn from(r: PhotoRow) -> Self {
        Photo {
            id: r.id,
            title: r.title,
            url: r.url,
            thumbnail_url: r.thumbnail_url,
            album_id: r.album_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct PgPhotoRepository {
    pool: Arc<PgPool>,
}

impl PgPhotoRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for PgPhotoRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Photo>, AppError> {
        let row = sqlx::query_as::<_, PhotoRow>(
            r#"
            SELECT id, title, url, thumbnail_url, album_id, created_at, updated_at
            FROM photos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Photo::from))
    }

    async fn list(&self, page: PageRequest) -> Result<Page<Photo>, AppError> {
        let rows = sqlx::query_as::<_, PhotoRow>(
            r#"
            SELECT id, title, url, thumbnail_url, album_id, created_at, updated_at
            FROM photos
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM photos")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(Page::new(
            rows.into_iter().map(Photo::from).collect(),
            page,
            total,
        ))
    }

    async fn list_by_album(
        &self,
        album_id: i64,
        page: PageRequest,
    ) -> Result<Page<Photo>, AppError> {
        let rows = sqlx::query_as::<_, PhotoRow>(
            r#"
            SELECT id, title, url, thumbnail_url, album_id, created_at, updated_at
            FROM photos
            WHERE album_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(album_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM photos WHERE album_id = $1")
            .bind(album_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(Page::new(
            rows.into_iter().map(Photo::from).collect(),
            page,
            total,
        ))
    }

    async fn create(&self, new_photo: NewPhoto) -> Result<Photo, AppError> {
        let row = sqlx::query_as::<_, PhotoRow>(
            r#"
            INSERT INTO photos (title, url, thumbnail_url, album_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, url, thumbnail_url, album_id, created_at, updated_at
            "#,
        )
        .bind(&new_photo.title)
        .bind(&new_photo.url)
        .bind(&new_photo.thumbnail_url)
        .bind(new_photo.album_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, photo: NewPhoto) -> Result<Photo, AppError> {
        let row = sqlx::query_as::<_, PhotoRow>(
            r#"
            UPDATE photos
            SET title = $2, url = $3, thumbnail_url = $4, album_id = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, url, thumbnail_url, album_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&photo.title)
        .bind(&photo.url)
        .bind(&photo.thumbnail_url)
        .bind(photo.album_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Photo::from)
            .ok_or_else(|| AppError::resource_not_found("Photo", "id", id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("Photo", "id", id));
        }

        Ok(())
    }
}
