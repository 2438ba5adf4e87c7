//! User profiles, availability checks and role management.

use crate::application::services::permission_denied;
use crate::domain::entities::{
    Address, Album, Company, NewUser, Post, RoleName, User, UserInfo, UserUpdate,
};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::principal::Principal;
use crate::domain::repositories::{AlbumRepository, PostRepository, UserRepository};
use crate::error::AppError;
use crate::infrastructure::security::password::hash_password;
use serde_json::json;
use std::sync::Arc;

/// Account data supplied by administrators creating users and by users
/// replacing their profile.
#[derive(Debug, Clone)]
pub struct UserData {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub address: Address,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Company,
}

/// A user together with the number of posts they wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub post_count: i64,
}

pub struct UserService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    albums: Arc<dyn AlbumRepository>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        albums: Arc<dyn AlbumRepository>,
    ) -> Self {
        Self {
            users,
            posts,
            albums,
        }
    }

    /// Total number of accounts. Doubles as a database round-trip for health checks.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.users.count().await
    }

    pub async fn is_username_available(&self, username: &str) -> Result<bool, AppError> {
        Ok(!self.users.exists_by_username(username).await?)
    }

    pub async fn is_email_available(&self, email: &str) -> Result<bool, AppError> {
        Ok(!self.users.exists_by_email(email).await?)
    }

    /// Looks a user up by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    pub async fn get_user(&self, username: &str) -> Result<User, AppError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::resource_not_found("User", "username", username))
    }

    /// Returns the public profile of a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    pub async fn get_profile(&self, username: &str) -> Result<UserProfile, AppError> {
        let user = self.get_user(username).await?;
        self.profile_of(user).await
    }

    pub async fn get_posts(&self, username: &str, page: PageRequest) -> Result<Page<Post>, AppError> {
        let user = self.get_user(username).await?;
        self.posts.list_by_user(user.id, page).await
    }

    pub async fn get_albums(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<Page<Album>, AppError> {
        let user = self.get_user(username).await?;
        self.albums.list_by_user(user.id, page).await
    }

    /// Creates an account with `ROLE_USER` on behalf of an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username or email is taken.
    pub async fn add_user(&self, data: UserData) -> Result<User, AppError> {
        if self.users.exists_by_username(&data.username).await? {
            return Err(AppError::bad_request(
                "Username is already taken",
                json!({ "username": data.username }),
            ));
        }

        if self.users.exists_by_email(&data.email).await? {
            return Err(AppError::bad_request(
                "Email is already taken",
                json!({ "email": data.email }),
            ));
        }

        let new_user = NewUser {
            first_name: data.first_name,
            last_name: data.last_name,
            username: data.username.to_lowercase(),
            email: data.email.to_lowercase(),
            password_hash: hash_password(&data.password)?,
            address: data.address,
            phone: data.phone,
            website: data.website,
            company: data.company,
            roles: vec![RoleName::User],
        };

        let user = self.users.create(new_user).await?;
        tracing::info!(user_id = user.id, username = %user.username, "User created by administrator");

        Ok(user)
    }

    /// Replaces the profile of `username`. Username and email stay unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    /// Returns [`AppError::Unauthorized`] if the principal is neither the user nor an administrator.
    pub async fn update_user(
        &self,
        username: &str,
        data: UserData,
        principal: &Principal,
    ) -> Result<User, AppError> {
        let user = self.get_user(username).await?;

        if !principal.can_modify(user.id) {
            return Err(permission_denied(
                "User",
                principal,
                &format!("You don't have permission to update profile of: {username}"),
            ));
        }

        let update = UserUpdate {
            first_name: data.first_name,
            last_name: data.last_name,
            password_hash: hash_password(&data.password)?,
            address: data.address,
            phone: data.phone,
            website: data.website,
            company: data.company,
        };

        self.users.update(user.id, update).await
    }

    /// Deletes a user and everything the user owns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    /// Returns [`AppError::Unauthorized`] if the principal is neither the user nor an administrator.
    pub async fn delete_user(&self, username: &str, principal: &Principal) -> Result<(), AppError> {
        let user = self.get_user(username).await?;

        if !principal.can_modify(user.id) {
            return Err(permission_denied(
                "User",
                principal,
                &format!("You don't have permission to delete profile of: {username}"),
            ));
        }

        self.users.delete(user.id).await?;
        tracing::info!(user_id = user.id, deleted_by = principal.id, "User deleted");

        Ok(())
    }

    /// Grants `ROLE_ADMIN` to a user.
    pub async fn give_admin(&self, username: &str) -> Result<(), AppError> {
        let user = self.get_user(username).await?;
        self.users
            .set_roles(user.id, vec![RoleName::User, RoleName::Admin])
            .await?;
        tracing::info!(user_id = user.id, username, "ADMIN role granted");

        Ok(())
    }

    /// Reduces a user to `ROLE_USER`.
    pub async fn remove_admin(&self, username: &str) -> Result<(), AppError> {
        let user = self.get_user(username).await?;
        self.users.set_roles(user.id, vec![RoleName::User]).await?;
        tracing::info!(user_id = user.id, username, "ADMIN role revoked");

        Ok(())
    }

    /// Sets address, company and contact details of the calling user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the caller's account no longer exists.
    pub async fn set_or_update_info(
        &self,
        principal: &Principal,
        info: UserInfo,
    ) -> Result<UserProfile, AppError> {
        let user = self
            .users
            .find_by_id(principal.id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("User", "id", principal.id))?;

        let user = self.users.update_info(user.id, info).await?;
        self.profile_of(user).await
    }

    async fn profile_of(&self, user: User) -> Result<UserProfile, AppError> {
        let post_count = self.posts.count_by_user(user.id).await?;
        Ok(UserProfile { user, post_count })
    }
}
