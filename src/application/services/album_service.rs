//! Photo albums.

use crate::application::services::permission_denied;
use crate::domain::entities::{Album, NewAlbum};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::principal::Principal;
use crate::domain::repositories::AlbumRepository;
use crate::error::AppError;
use std::sync::Arc;

const DENIED: &str = "You don't have permission to make this operation";

pub struct AlbumService {
    albums: Arc<dyn AlbumRepository>,
}

impl AlbumService {
    pub fn new(albums: Arc<dyn AlbumRepository>) -> Self {
        Self { albums }
    }

    pub async fn get_all_albums(&self, page: PageRequest) -> Result<Page<Album>, AppError> {
        self.albums.list(page).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the album does not exist.
    pub async fn get_album(&self, id: i64) -> Result<Album, AppError> {
        self.albums
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("Album", "id", id))
    }

    pub async fn add_album(&self, title: String, principal: &Principal) -> Result<Album, AppError> {
        self.albums
            .create(NewAlbum {
                title,
                user_id: principal.id,
            })
            .await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the album does not exist.
    /// Returns [`AppError::Unauthorized`] if the principal may not edit the album.
    pub async fn update_album(
        &self,
        id: i64,
        title: String,
        principal: &Principal,
    ) -> Result<Album, AppError> {
        let album = self.get_album(id).await?;

        if !principal.can_modify(album.user_id) {
            return Err(permission_denied("Album", principal, DENIED));
        }

        self.albums.update(id, &title).await
    }

    /// Deletes the album and its photos.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the album does not exist.
    /// Returns [`AppError::Unauthorized`] if the principal may not delete the album.
    pub async fn delete_album(&self, id: i64, principal: &Principal) -> Result<(), AppError> {
        let album = self.get_album(id).await?;

        if !principal.can_modify(album.user_id) {
            return Err(permission_denied("Album", principal, DENIED));
        }

        self.albums.delete(id).await?;
        tracing::info!(album_id = id, deleted_by = principal.id, "Album deleted");

        Ok(())
    }
}
