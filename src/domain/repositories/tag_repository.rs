//! Repository trait for tags.

use crate::domain::entities::Tag;
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, AppError>;

    async fn list(&self, page: PageRequest) -> Result<Page<Tag>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a tag with this name exists.
    async fn create(&self, name: &str, user_id: i64) -> Result<Tag, AppError>;

    async fn update(&self, id: i64, name: &str, user_id: i64) -> Result<Tag, AppError>;

    /// Deletes the tag and detaches it from every post.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
