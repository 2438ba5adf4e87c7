//! Photos. A photo is owned by whoever owns its album.

use crate::application::services::permission_denied;
use crate::domain::entities::{Album, NewPhoto, Photo};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::principal::Principal;
use crate::domain::repositories::{AlbumRepository, PhotoRepository};
use crate::error::AppError;
use std::sync::Arc;

/// Photo fields as submitted by a client.
#[derive(Debug, Clone)]
pub struct PhotoData {
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    pub album_id: i64,
}

impl From<PhotoData> for NewPhoto {
    fn from(data: PhotoData) -> Self {
        Self {
            title: data.title,
            url: data.url,
            thumbnail_url: data.thumbnail_url,
            album_id: data.album_id,
        }
    }
}

pub struct PhotoService {
    photos: Arc<dyn PhotoRepository>,
    albums: Arc<dyn AlbumRepository>,
}

impl PhotoService {
    pub fn new(photos: Arc<dyn PhotoRepository>, albums: Arc<dyn AlbumRepository>) -> Self {
        Self { photos, albums }
    }

    pub async fn get_all_photos(&self, page: PageRequest) -> Result<Page<Photo>, AppError> {
        self.photos.list(page).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the photo does not exist.
    pub async fn get_photo(&self, id: i64) -> Result<Photo, AppError> {
        self.photos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("Photo", "id", id))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the album does not exist.
    pub async fn get_photos_by_album(
        &self,
        album_id: i64,
        page: PageRequest,
    ) -> Result<Page<Photo>, AppError> {
        self.get_album(album_id).await?;
        self.photos.list_by_album(album_id, page).await
    }

    /// Adds a photo to one of the principal's own albums.
    ///
    /// Administrators get no bypass here: only the album owner may add photos.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the album does not exist.
    /// Returns [`AppError::Unauthorized`] if the album belongs to someone else.
    pub async fn add_photo(&self, data: PhotoData, principal: &Principal) -> Result<Photo, AppError> {
        let album = self.get_album(data.album_id).await?;

        if album.user_id != principal.id {
            return Err(permission_denied(
                "Photo",
                principal,
                "You don't have permission to add photo in this album",
            ));
        }

        self.photos.create(data.into()).await
    }

    /// Replaces a photo, possibly moving it to another album.
    ///
    /// The principal must be allowed to modify both the photo's current album
    /// and the target album.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the target album or the photo does not exist.
    /// Returns [`AppError::Unauthorized`] if the principal may not edit the photo.
    pub async fn update_photo(
        &self,
        id: i64,
        data: PhotoData,
        principal: &Principal,
    ) -> Result<Photo, AppError> {
        let target = self.get_album(data.album_id).await?;
        let photo = self.get_photo(id).await?;
        let current = self.get_album(photo.album_id).await?;

        if !principal.can_modify(current.user_id) || !principal.can_modify(target.user_id) {
            return Err(permission_denied(
                "Photo",
                principal,
                "You don't have permission to update this photo",
            ));
        }

        self.photos.update(id, data.into()).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the photo does not exist.
    /// Returns [`AppError::Unauthorized`] if the principal may not delete the photo.
    pub async fn delete_photo(&self, id: i64, principal: &Principal) -> Result<(), AppError> {
        let photo = self.get_photo(id).await?;
        let album = self.get_album(photo.album_id).await?;

        if !principal.can_modify(album.user_id) {
            return Err(permission_denied(
                "Photo",
                principal,
                "You don't have permission to delete this photo",
            ));
        }

        self.photos.delete(id).await
    }

    async fn get_album(&self, album_id: i64) -> Result<Album, AppError> {
        self.albums
            .find_by_id(album_id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("Album", "id", album_id))
    }
}
