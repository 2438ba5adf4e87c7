mod common;

use axum::http::StatusCode;
use blog_api::domain::entities::RoleName;
use serde_json::{Value, json};
use sqlx::PgPool;

async fn sign_up_and_in(server: &axum_test::TestServer, username: &str) -> String {
    server
        .post("/api/auth/signup")
        .json(&json!({
            "firstName": "Leanne",
            "lastName": "Graham",
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "password123"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/auth/signin")
        .json(&json!({ "usernameOrEmail": username, "password": "password123" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["accessToken"].as_str().unwrap().to_string()
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_first_user_becomes_admin(pool: PgPool) {
    let server = common::make_server(pool);

    let first = sign_up_and_in(&server, "leanne").await;
    let second = sign_up_and_in(&server, "ervin").await;

    server
        .put("/api/users/ervin/giveAdmin")
        .authorization_bearer(&second)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    server
        .put("/api/users/ervin/giveAdmin")
        .authorization_bearer(&first)
        .await
        .assert_status_ok();
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_post_lifecycle(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner", vec![RoleName::User]).await;
    let category_id = common::create_test_category(&pool, "rust", owner.id).await;
    let server = common::make_server(pool);
    let token = sign_up_and_in(&server, "ervin").await;

    let response = server
        .post("/api/posts")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Título de mi post de prueba",
            "body": "Esto es una prueba del cuerpo de un post con suficientes caracteres.",
            "categoryId": category_id,
            "tags": ["rust", " axum ", "rust", ""]
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let post: Value = response.json();
    let post_id = post["id"].as_i64().unwrap();
    assert_eq!(post["tags"], json!(["axum", "rust"]));

    server
        .post(&format!("/api/posts/{post_id}/comments"))
        .authorization_bearer(&token)
        .json(&json!({ "body": "Comentario de prueba" }))
        .await
        .assert_status(StatusCode::CREATED);

    let profile: Value = server.get("/api/users/ervin/profile").await.json();
    assert_eq!(profile["postCount"], 1);

    server
        .delete(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    server
        .get(&format!("/api/posts/{post_id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_photo_requires_album_owner(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner", vec![RoleName::User]).await;
    let album_id = common::create_test_album(&pool, owner.id).await;
    let server = common::make_server(pool);
    let token = sign_up_and_in(&server, "ervin").await;

    server
        .post("/api/photos")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Photo test",
            "url": "https://via.placeholder.com/600/92c952",
            "thumbnailUrl": "https://via.placeholder.com/150/92c952",
            "albumId": album_id
        }))
        .await
        .assert_status_unauthorized();
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_todos_are_private(pool: PgPool) {
    let server = common::make_server(pool);
    let alice = sign_up_and_in(&server, "alice").await;
    let bob = sign_up_and_in(&server, "bob").await;

    let todo: Value = server
        .post("/api/todos")
        .authorization_bearer(&alice)
        .json(&json!({ "title": "Write the release notes" }))
        .await
        .json();
    let todo_id = todo["id"].as_i64().unwrap();

    server
        .get(&format!("/api/todos/{todo_id}"))
        .authorization_bearer(&bob)
        .await
        .assert_status_unauthorized();

    let listed: Value = server
        .get("/api/todos")
        .authorization_bearer(&bob)
        .await
        .json();
    assert_eq!(listed["totalElements"], 0);

    let completed: Value = server
        .put(&format!("/api/todos/{todo_id}/complete"))
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(completed["completed"], true);
}
