//! Repository trait for photo albums.

use crate::domain::entities::{Album, NewAlbum};
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Album>, AppError>;

    async fn list(&self, page: PageRequest) -> Result<Page<Album>, AppError>;

    async fn list_by_user(&self, user_id: i64, page: PageRequest)
    -> Result<Page<Album>, AppError>;

    async fn create(&self, new_album: NewAlbum) -> Result<Album, AppError>;

    async fn update(&self, id: i64, title: &str) -> Result<Album, AppError>;

    /// Deletes the album together with its photos.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
