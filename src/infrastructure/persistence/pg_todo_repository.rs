//! PostgreSQL implementation of the todo repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTodo, Todo};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    completed: bool,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    fn from(r: TodoRow) -> Self {
        Todo {
            id: r.id,
            title: r.title,
            completed: r.completed,
            user_id: r.user_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct PgTodoRepository {
    pool: Arc<PgPool>,
}

impl PgTodoRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError> {
        let row = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, completed, user_id, created_at, updated_at FROM todos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Todo::from))
    }

    async fn list_by_user(&self, user_id: i64, page: PageRequest) -> Result<Page<Todo>, AppError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, completed, user_id, created_at, updated_at
            FROM todos
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

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM todos WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(Page::new(
            rows.into_iter().map(Todo::from).collect(),
            page,
            total,
        ))
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, completed, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, completed, user_id, created_at, updated_at
            "#,
        )
        .bind(&new_todo.title)
        .bind(new_todo.completed)
        .bind(new_todo.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, title: &str, completed: bool) -> Result<Todo, AppError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos SET title = $2, completed = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, completed, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(completed)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Todo::from)
            .ok_or_else(|| AppError::resource_not_found("Todo", "id", id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("Todo", "id", id));
        }

        Ok(())
    }
}
