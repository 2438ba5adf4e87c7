//! Repository trait for categories.

use crate::domain::entities::Category;
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;

    async fn list(&self, page: PageRequest) -> Result<Page<Category>, AppError>;

    async fn create(&self, name: &str, user_id: i64) -> Result<Category, AppError>;

    /// Renames the category and records `user_id` as the last editor.
    async fn update(&self, id: i64, name: &str, user_id: i64) -> Result<Category, AppError>;

    /// Deletes the category together with its posts.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
