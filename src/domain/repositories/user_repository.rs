//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, RoleName, User, UserInfo, UserUpdate};
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users and their roles.
///
/// Every returned [`User`] carries its current roles.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Looks a user up by username first, then by email.
    async fn find_by_username_or_email(
        &self,
        username_or_email: &str,
    ) -> Result<Option<User>, AppError>;

    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// Total number of registered users.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists users ordered by registration date, newest first.
    async fn list(&self, page: PageRequest) -> Result<Page<User>, AppError>;

    /// Creates a user together with its role assignments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if username or email is already taken.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Replaces the editable profile of a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<User, AppError>;

    /// Replaces address, company, phone and website of a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    async fn update_info(&self, id: i64, info: UserInfo) -> Result<User, AppError>;

    /// Replaces the role set of a user.
    async fn set_roles(&self, id: i64, roles: Vec<RoleName>) -> Result<(), AppError>;

    /// Deletes a user and, through cascading keys, everything it owns.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
