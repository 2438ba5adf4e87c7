//! Post categories.

use crate::application::services::permission_denied;
use crate::domain::entities::Category;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::principal::Principal;
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;
use std::sync::Arc;

pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn get_all_categories(&self, page: PageRequest) -> Result<Page<Category>, AppError> {
        self.categories.list(page).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    pub async fn get_category(&self, id: i64) -> Result<Category, AppError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("Category", "id", id))
    }

    pub async fn add_category(&self, name: &str, principal: &Principal) -> Result<Category, AppError> {
        self.categories.create(name, principal.id).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Unauthorized`] if the principal neither created it nor is an administrator.
    pub async fn update_category(
        &self,
        id: i64,
        name: &str,
        principal: &Principal,
    ) -> Result<Category, AppError> {
        let category = self.get_category(id).await?;

        if !principal.can_modify_owned_by(category.created_by) {
            return Err(permission_denied(
                "Category",
                principal,
                "You don't have permission to edit this category",
            ));
        }

        self.categories.update(id, name, principal.id).await
    }

    /// Deletes the category together with its posts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Unauthorized`] if the principal neither created it nor is an administrator.
    pub async fn delete_category(&self, id: i64, principal: &Principal) -> Result<(), AppError> {
        let category = self.get_category(id).await?;

        if !principal.can_modify_owned_by(category.created_by) {
            return Err(permission_denied(
                "Category",
                principal,
                "You don't have permission to delete this category",
            ));
        }

        self.categories.delete(id).await?;
        tracing::info!(category_id = id, deleted_by = principal.id, "Category deleted");

        Ok(())
    }
}
