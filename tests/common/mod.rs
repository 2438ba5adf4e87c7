#![allow(dead_code)]

use axum::{Router, middleware};
use axum_test::TestServer;
use blog_api::api::middleware::auth;
use blog_api::api::routes::api_routes;
use blog_api::domain::entities::{Address, Company, NewUser, RoleName, User};
use blog_api::domain::repositories::UserRepository;
use blog_api::infrastructure::persistence::PgUserRepository;
use blog_api::infrastructure::security::JwtProvider;
use blog_api::state::{AppState, Repositories};
use sqlx::PgPool;
use std::sync::Arc;

pub const JWT_SECRET: &str = "integration-secret-integration-secret";

pub async fn create_test_user(pool: &PgPool, username: &str, roles: Vec<RoleName>) -> User {
    PgUserRepository::new(Arc::new(pool.clone()))
        .create(NewUser {
            first_name: "Leanne".to_string(),
            last_name: "Graham".to_string(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$not-a-real-hash".to_string(),
            address: Address::default(),
            phone: None,
            website: None,
            company: Company::default(),
            roles,
        })
        .await
        .unwrap()
}

pub async fn create_test_category(pool: &PgPool, name: &str, user_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO categories (name, created_by, updated_by) VALUES ($1, $2, $2) RETURNING id",
    )
    .bind(name)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_tag(pool: &PgPool, name: &str, user_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO tags (name, created_by, updated_by) VALUES ($1, $2, $2) RETURNING id",
    )
    .bind(name)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_post(pool: &PgPool, user_id: i64, category_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO posts (title, body, user_id, category_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind("Título de mi post de prueba")
    .bind("Esto es una prueba del cuerpo de un post con suficientes caracteres.")
    .bind(user_id)
    .bind(category_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_album(pool: &PgPool, user_id: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO albums (title, user_id) VALUES ($1, $2) RETURNING id")
        .bind("Album de prueba")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Repositories::postgres(Arc::new(pool)),
        JwtProvider::new(JWT_SECRET, 3600),
    )
}

/// API routes behind the bearer middleware, backed by the test database.
pub fn make_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool);
    let app = Router::new()
        .nest(
            "/api",
            api_routes().layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        )
        .with_state(state);

    TestServer::new(app).unwrap()
}
