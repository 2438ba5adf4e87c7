//! PostgreSQL implementation of the comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    name: String,
    email: String,
    body: String,
    post_id: i64,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(r: CommentRow) -> Self {
        Comment {
            id: r.id,
            name: r.name,
            email: r.email,
            body: r.body,
            post_id: r.post_id,
            user_id: r.user_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, name, email, body, post_id, user_id, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Comment::from))
    }

    async fn list_by_post(
        &self,
        post_id: i64,
        page: PageRequest,
    ) -> Result<Page<Comment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, name, email, body, post_id, user_id, created_at, updated_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(post_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(Page::new(
            rows.into_iter().map(Comment::from).collect(),
            page,
            total,
        ))
    }

    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (name, email, body, post_id, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, body, post_id, user_id, created_at, updated_at
            "#,
        )
        .bind(&new_comment.name)
        .bind(&new_comment.email)
        .bind(&new_comment.body)
        .bind(new_comment.post_id)
        .bind(new_comment.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, body: &str) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            UPDATE comments SET body = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, body, post_id, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(body)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Comment::from)
            .ok_or_else(|| AppError::resource_not_found("Comment", "id", id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("Comment", "id", id));
        }

        Ok(())
    }
}
