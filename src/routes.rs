//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/auth/*`  - Sign up and sign in (rate limited per IP)
//! - `/api/*`       - Resource endpoints
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the credential endpoints
//! - **Authentication** - Optional bearer token resolved to a principal
//! - **Path normalization** - Trailing slash handling

use crate::api::middleware::{auth, rate_limit, tracing};
use crate::api::routes::{auth_routes, resource_routes};
use crate::config::Config;
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Fails if the configured rate limit is unusable.
pub fn app_router(state: AppState, config: &Config) -> anyhow::Result<NormalizePath<Router>> {
    let api_router = Router::new()
        .merge(auth_routes().layer(rate_limit::auth_layer(config)?))
        .merge(resource_routes())
        .layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::api_routes;
    use crate::domain::entities::RoleName;
    use crate::infrastructure::security::JwtProvider;
    use crate::test_support::{self, JWT_SECRET, Mocks};
    use axum_test::TestServer;
    use serde_json::Value;

    /// API routes behind the bearer middleware, without the per-IP limiter.
    fn server(mocks: Mocks) -> TestServer {
        let state = mocks.into_state();
        let app = Router::new()
            .nest(
                "/api",
                api_routes().layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
            )
            .with_state(state);

        TestServer::new(app).unwrap()
    }

    fn token_for(user_id: i64) -> String {
        JwtProvider::new(JWT_SECRET, 3600)
            .generate_token(user_id)
            .unwrap()
    }

    #[tokio::test]
    async fn test_bearer_token_resolves_principal() {
        let mut mocks = Mocks::default();
        mocks
            .users
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_support::user(id, "ervin", vec![RoleName::User]))));

        let response = server(mocks)
            .get("/api/users/me")
            .authorization_bearer(token_for(2))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], 2);
        assert_eq!(body["username"], "ervin");
    }

    #[tokio::test]
    async fn test_invalid_token_is_anonymous() {
        let response = server(Mocks::default())
            .get("/api/users/me")
            .authorization_bearer("not-a-jwt")
            .await;

        response.assert_status_unauthorized();
        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "Full authentication is required to access this resource"
        );
    }

    #[tokio::test]
    async fn test_invalid_token_still_reaches_public_routes() {
        let mut mocks = Mocks::default();
        mocks.users.expect_count().returning(|| Ok(1));

        server(mocks)
            .get("/api/health")
            .authorization_bearer("not-a-jwt")
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_token_for_deleted_user_is_anonymous() {
        let mut mocks = Mocks::default();
        mocks.users.expect_find_by_id().returning(|_| Ok(None));

        server(mocks)
            .get("/api/users/me")
            .authorization_bearer(token_for(2))
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_user_lookup_failure_aborts_request() {
        let mut mocks = Mocks::default();
        mocks.users.expect_find_by_id().returning(|_| {
            Err(crate::error::AppError::internal(
                "Database error",
                serde_json::json!({}),
            ))
        });

        server(mocks)
            .get("/api/posts/1")
            .authorization_bearer(token_for(2))
            .await
            .assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_admin_token_reaches_admin_endpoint() {
        let mut mocks = Mocks::default();
        mocks.users.expect_find_by_id().returning(|id| {
            Ok(Some(test_support::user(
                id,
                "leanne",
                vec![RoleName::User, RoleName::Admin],
            )))
        });
        mocks
            .users
            .expect_find_by_username()
            .returning(|name| Ok(Some(test_support::user(4, name, vec![RoleName::User]))));
        mocks.users.expect_set_roles().times(1).returning(|_, _| Ok(()));

        server(mocks)
            .put("/api/users/ervin/giveAdmin")
            .authorization_bearer(token_for(1))
            .await
            .assert_status_ok();
    }

    #[test]
    fn test_app_router_builds() {
        let state = Mocks::default().into_state();

        assert!(app_router(state, &test_support::config()).is_ok());
    }
}
