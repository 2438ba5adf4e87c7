//! PostgreSQL implementation of the post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, PostUpdate};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

/// Post columns plus tag names aggregated into an array.
const SELECT_POST: &str = r#"
    SELECT
        p.id, p.title, p.body, p.user_id, p.category_id, p.created_at, p.updated_at,
        COALESCE(
            array_agg(t.name ORDER BY t.name) FILTER (WHERE t.name IS NOT NULL),
            '{}'
        ) AS tags
    FROM posts p
    LEFT JOIN post_tags pt ON pt.post_id = p.id
    LEFT JOIN tags t ON t.id = pt.tag_id
"#;

const PAGE_TAIL: &str = "GROUP BY p.id ORDER BY p.created_at DESC, p.id DESC LIMIT $2 OFFSET $3";

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    body: String,
    user_id: i64,
    category_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tags: Vec<String>,
}

impl From<PostRow> for Post {
    fn from(r: PostRow) -> Self {
        Post {
            id: r.id,
            title: r.title,
            body: r.body,
            user_id: r.user_id,
            category_id: r.category_id,
            tags: r.tags,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for posts and the `post_tags` link table.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Runs a paged listing whose filter binds a single id as `$1`.
    async fn list_filtered(
        &self,
        filter: &str,
        id: i64,
        page: PageRequest,
    ) -> Result<Page<Post>, AppError> {
        let sql = format!("{SELECT_POST} WHERE {filter} {PAGE_TAIL}");
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        let count_sql = format!("SELECT COUNT(*) FROM posts p WHERE {filter}");
        let total = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(Page::new(
            rows.into_iter().map(Post::from).collect(),
            page,
            total,
        ))
    }

    async fn link_tags(
        tx: &mut Transaction<'_, Postgres>,
        post_id: i64,
        tag_ids: &[i64],
    ) -> Result<(), AppError> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO post_tags (post_id, tag_id) SELECT $1, UNNEST($2::bigint[]) ON CONFLICT DO NOTHING",
        )
        .bind(post_id)
        .bind(tag_ids)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn require(&self, id: i64) -> Result<Post, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("Post", "id", id))
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let sql = format!("{SELECT_POST} WHERE p.id = $1 GROUP BY p.id");

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Post::from))
    }

    async fn list(&self, page: PageRequest) -> Result<Page<Post>, AppError> {
        let sql = format!(
            "{SELECT_POST} GROUP BY p.id ORDER BY p.created_at DESC, p.id DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(Page::new(
            rows.into_iter().map(Post::from).collect(),
            page,
            total,
        ))
    }

    async fn list_by_user(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<Page<Post>, AppError> {
        self.list_filtered("p.user_id = $1", user_id, page).await
    }

    async fn list_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> Result<Page<Post>, AppError> {
        self.list_filtered("p.category_id = $1", category_id, page)
            .await
    }

    async fn list_by_tag(&self, tag_id: i64, page: PageRequest) -> Result<Page<Post>, AppError> {
        self.list_filtered(
            "p.id IN (SELECT post_id FROM post_tags WHERE tag_id = $1)",
            tag_id,
            page,
        )
        .await
    }

    async fn count_by_user(&self, user_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO posts (title, body, user_id, category_id) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&new_post.title)
        .bind(&new_post.body)
        .bind(new_post.user_id)
        .bind(new_post.category_id)
        .fetch_one(&mut *tx)
        .await?;

        Self::link_tags(&mut tx, id, &new_post.tag_ids).await?;
        tx.commit().await?;

        self.require(id).await
    }

    async fn update(&self, id: i64, update: PostUpdate) -> Result<Post, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE posts SET title = $2, body = $3, category_id = $4, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.body)
        .bind(update.category_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("Post", "id", id));
        }

        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        Self::link_tags(&mut tx, id, &update.tag_ids).await?;
        tx.commit().await?;

        self.require(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("Post", "id", id));
        }

        Ok(())
    }
}
