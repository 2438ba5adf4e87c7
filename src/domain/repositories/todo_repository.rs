//! Repository trait for todos.

use crate::domain::entities::{NewTodo, Todo};
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError>;

    async fn list_by_user(&self, user_id: i64, page: PageRequest) -> Result<Page<Todo>, AppError>;

    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError>;

    async fn update(&self, id: i64, title: &str, completed: bool) -> Result<Todo, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
