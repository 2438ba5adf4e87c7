//! Account registration, sign-in and bearer token authentication.

use crate::domain::entities::{Address, Company, NewUser, RoleName, User};
use crate::domain::principal::Principal;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::security::JwtProvider;
use crate::infrastructure::security::password::{hash_password, verify_password};
use serde_json::json;
use std::sync::Arc;

/// Registration data accepted by [`AuthService::register`].
#[derive(Debug, Clone)]
pub struct SignUp {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Service issuing and checking JWT credentials.
///
/// Tokens only carry the user id. Every authenticated request reloads the
/// user, so deleted accounts and role changes take effect immediately.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt: JwtProvider,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, jwt: JwtProvider) -> Self {
        Self { users, jwt }
    }

    /// Registers a new account.
    ///
    /// The very first account receives `ROLE_ADMIN` in addition to `ROLE_USER`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username or email is taken.
    /// Returns [`AppError::Internal`] on database or hashing errors.
    pub async fn register(&self, sign_up: SignUp) -> Result<User, AppError> {
        if self.users.exists_by_username(&sign_up.username).await? {
            return Err(AppError::bad_request(
                "Username is already taken",
                json!({ "username": sign_up.username }),
            ));
        }

        if self.users.exists_by_email(&sign_up.email).await? {
            return Err(AppError::bad_request(
                "Email is already taken",
                json!({ "email": sign_up.email }),
            ));
        }

        let roles = if self.users.count().await? == 0 {
            vec![RoleName::User, RoleName::Admin]
        } else {
            vec![RoleName::User]
        };

        let new_user = NewUser {
            first_name: sign_up.first_name,
            last_name: sign_up.last_name,
            username: sign_up.username.to_lowercase(),
            email: sign_up.email.to_lowercase(),
            password_hash: hash_password(&sign_up.password)?,
            address: Address::default(),
            phone: None,
            website: None,
            company: Company::default(),
            roles,
        };

        let user = self.users.create(new_user).await?;

        tracing::info!(
            user_id = user.id,
            username = %user.username,
            admin = user.is_admin(),
            "User registered"
        );
        metrics::counter!("blog_signups_total").increment(1);

        Ok(user)
    }

    /// Checks credentials and issues an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the account is unknown or the password is wrong.
    /// Returns [`AppError::Internal`] on database or signing errors.
    pub async fn sign_in(&self, username_or_email: &str, password: &str) -> Result<String, AppError> {
        let user = self.users.find_by_username_or_email(username_or_email).await?;

        let user = match user {
            Some(user) if verify_password(password, &user.password_hash) => user,
            _ => {
                tracing::warn!(login = %username_or_email, "Failed sign-in attempt");
                metrics::counter!("blog_signins_total", "outcome" => "failure").increment(1);
                return Err(AppError::unauthorized("Bad credentials", json!({})));
            }
        };

        let token = self.jwt.generate_token(user.id)?;

        tracing::debug!(user_id = user.id, "User signed in");
        metrics::counter!("blog_signins_total", "outcome" => "success").increment(1);

        Ok(token)
    }

    /// Resolves a bearer token to the principal it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid or its user no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Principal, AppError> {
        let user_id = self.jwt.validate_token(token)?;

        let user = self.users.find_by_id(user_id).await?.ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "User no longer exists", "user_id": user_id }),
            )
        })?;

        Ok(Principal::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use crate::test_support;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn sign_up(username: &str, email: &str) -> SignUp {
        SignUp {
            first_name: "Leanne".to_string(),
            last_name: "Graham".to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: "password".to_string(),
        }
    }

    fn service(repo: MockUserRepository) -> AuthService {
        AuthService::new(Arc::new(repo), JwtProvider::new(SECRET, 3600))
    }

    #[tokio::test]
    async fn test_first_user_becomes_admin() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_exists_by_email().returning(|_| Ok(false));
        repo.expect_count().times(1).returning(|| Ok(0));
        repo.expect_create()
            .withf(|u| {
                u.roles == vec![RoleName::User, RoleName::Admin]
                    && u.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|u| Ok(test_support::user(1, &u.username, u.roles)));

        let user = service(repo)
            .register(sign_up("leanne", "leanne.graham@gmail.com"))
            .await
            .unwrap();

        assert!(user.is_admin());
    }

    #[tokio::test]
    async fn test_later_users_are_plain_users() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_exists_by_email().returning(|_| Ok(false));
        repo.expect_count().returning(|| Ok(3));
        repo.expect_create()
            .withf(|u| u.roles == vec![RoleName::User])
            .times(1)
            .returning(|u| Ok(test_support::user(4, &u.username, u.roles)));

        let user = service(repo)
            .register(sign_up("ervin", "ervinh94@yahoo.com"))
            .await
            .unwrap();

        assert!(!user.is_admin());
    }

    #[tokio::test]
    async fn test_register_username_taken() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username()
            .withf(|u| u == "leanne")
            .returning(|_| Ok(true));
        repo.expect_create().never();

        let err = service(repo)
            .register(sign_up("leanne", "leanne.graham@gmail.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Username is already taken");
    }

    #[tokio::test]
    async fn test_register_email_taken() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_exists_by_email().returning(|_| Ok(true));
        repo.expect_create().never();

        let err = service(repo)
            .register(sign_up("leanne", "leanne.graham@gmail.com"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Email is already taken");
    }

    #[tokio::test]
    async fn test_sign_in_and_authenticate() {
        let mut stored = test_support::user(7, "ervin", vec![RoleName::User]);
        stored.password_hash = hash_password("password").unwrap();
        let lookup = stored.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username_or_email()
            .withf(|login| login == "ervin")
            .returning(move |_| Ok(Some(lookup.clone())));
        repo.expect_find_by_id()
            .withf(|id| *id == 7)
            .returning(move |_| Ok(Some(stored.clone())));

        let service = service(repo);
        let token = service.sign_in("ervin", "password").await.unwrap();
        let principal = service.authenticate(&token).await.unwrap();

        assert_eq!(principal.id, 7);
        assert_eq!(principal.username, "ervin");
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let mut stored = test_support::user(7, "ervin", vec![RoleName::User]);
        stored.password_hash = hash_password("password").unwrap();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username_or_email()
            .returning(move |_| Ok(Some(stored.clone())));

        let err = service(repo).sign_in("ervin", "nope-nope").await.unwrap_err();

        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_sign_in_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username_or_email().returning(|_| Ok(None));

        let err = service(repo).sign_in("ghost", "password").await.unwrap_err();

        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_deleted_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let token = JwtProvider::new(SECRET, 3600).generate_token(99).unwrap();
        let err = service(repo).authenticate(&token).await.unwrap_err();

        assert!(matches!(err, AppError::Unauthorized { .. }));
    }
}
