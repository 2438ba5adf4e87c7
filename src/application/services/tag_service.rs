//! Post tags.

use crate::application::services::permission_denied;
use crate::domain::entities::Tag;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::principal::Principal;
use crate::domain::repositories::TagRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for tags. Tag names are unique.
pub struct TagService {
    tags: Arc<dyn TagRepository>,
}

impl TagService {
    pub fn new(tags: Arc<dyn TagRepository>) -> Self {
        Self { tags }
    }

    pub async fn get_all_tags(&self, page: PageRequest) -> Result<Page<Tag>, AppError> {
        self.tags.list(page).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the tag does not exist.
    pub async fn get_tag(&self, id: i64) -> Result<Tag, AppError> {
        self.tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("Tag", "id", id))
    }

    /// Creates a tag. The name is trimmed the same way post tags are.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::Conflict`] if a tag with this name already exists.
    pub async fn add_tag(&self, name: &str, principal: &Principal) -> Result<Tag, AppError> {
        let name = tag_name(name)?;

        if self.tags.find_by_name(name).await?.is_some() {
            return Err(AppError::conflict(
                "Tag already exists",
                json!({ "name": name }),
            ));
        }

        self.tags.create(name, principal.id).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::NotFound`] if the tag does not exist.
    /// Returns [`AppError::Unauthorized`] if the principal neither created it nor is an administrator.
    /// Returns [`AppError::Conflict`] if another tag already has this name.
    pub async fn update_tag(
        &self,
        id: i64,
        name: &str,
        principal: &Principal,
    ) -> Result<Tag, AppError> {
        let name = tag_name(name)?;
        let tag = self.get_tag(id).await?;

        if !principal.can_modify_owned_by(tag.created_by) {
            return Err(permission_denied(
                "Tag",
                principal,
                "You don't have permission to edit this tag",
            ));
        }

        self.tags.update(id, name, principal.id).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the tag does not exist.
    /// Returns [`AppError::Unauthorized`] if the principal neither created it nor is an administrator.
    pub async fn delete_tag(&self, id: i64, principal: &Principal) -> Result<(), AppError> {
        let tag = self.get_tag(id).await?;

        if !principal.can_modify_owned_by(tag.created_by) {
            return Err(permission_denied(
                "Tag",
                principal,
                "You don't have permission to delete this tag",
            ));
        }

        self.tags.delete(id).await
    }
}

fn tag_name(name: &str) -> Result<&str, AppError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            "Tag name must not be blank",
            json!({ "name": name }),
        ));
    }

    Ok(trimmed)
}
