//! Repository trait for photos.

use crate::domain::entities::{NewPhoto, Photo};
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Photo>, AppError>;

    async fn list(&self, page: PageRequest) -> Result<Page<Photo>, AppError>;

    async fn list_by_album(&self, album_id: i64, page: PageRequest)
    -> Result<Page<Photo>, AppError>;

    async fn create(&self, new_photo: NewPhoto) -> Result<Photo, AppError>;

    /// Replaces every editable field, including the album the photo lives in.
    async fn update(&self, id: i64, photo: NewPhoto) -> Result<Photo, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
