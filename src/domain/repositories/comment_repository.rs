//! Repository trait for comments.

use crate::domain::entities::{Comment, NewComment};
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError>;

    async fn list_by_post(&self, post_id: i64, page: PageRequest)
    -> Result<Page<Comment>, AppError>;

    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    async fn update(&self, id: i64, body: &str) -> Result<Comment, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
