//! PostgreSQL implementation of the tag repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Tag;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TagRow {
    id: i64,
    name: String,
    created_by: Option<i64>,
    updated_by: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TagRow> for Tag {
    fn from(r: TagRow) -> Self {
        Tag {
            id: r.id,
            name: r.name,
            created_by: r.created_by,
            updated_by: r.updated_by,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for tags.
///
/// The `tags_name_key` unique constraint surfaces as [`AppError::Conflict`].
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, AppError> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, created_by, updated_by, created_at, updated_at FROM tags WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Tag::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, AppError> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, created_by, updated_by, created_at, updated_at FROM tags WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Tag::from))
    }

    async fn list(&self, page: PageRequest) -> Result<Page<Tag>, AppError> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT id, name, created_by, updated_by, created_at, updated_at
            FROM tags
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tags")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(Page::new(
            rows.into_iter().map(Tag::from).collect(),
            page,
            total,
        ))
    }

    async fn create(&self, name: &str, user_id: i64) -> Result<Tag, AppError> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            INSERT INTO tags (name, created_by, updated_by)
            VALUES ($1, $2, $2)
            RETURNING id, name, created_by, updated_by, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, name: &str, user_id: i64) -> Result<Tag, AppError> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            UPDATE tags SET name = $2, updated_by = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_by, updated_by, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Tag::from)
            .ok_or_else(|| AppError::resource_not_found("Tag", "id", id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("Tag", "id", id));
        }

        Ok(())
    }
}
