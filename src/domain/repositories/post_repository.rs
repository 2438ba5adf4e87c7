//! Repository trait for posts.

use crate::domain::entities::{NewPost, Post, PostUpdate};
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for posts and their tag associations.
///
/// Listings are ordered newest first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    async fn list(&self, page: PageRequest) -> Result<Page<Post>, AppError>;

    async fn list_by_user(&self, user_id: i64, page: PageRequest)
    -> Result<Page<Post>, AppError>;

    async fn list_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> Result<Page<Post>, AppError>;

    async fn list_by_tag(&self, tag_id: i64, page: PageRequest) -> Result<Page<Post>, AppError>;

    async fn count_by_user(&self, user_id: i64) -> Result<i64, AppError>;

    /// Inserts the post and links it to `tag_ids` in one transaction.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Replaces title, body, category and tag links in one transaction.
    async fn update(&self, id: i64, update: PostUpdate) -> Result<Post, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
