//! API route configuration.
//!
//! Routes are mounted under `/api`. Authentication is optional at the
//! routing level: [`crate::api::middleware::auth`] attaches a principal when
//! a valid bearer token is present, and handlers that need one extract
//! [`CurrentUser`](crate::api::extractors::CurrentUser) or
//! [`AdminUser`](crate::api::extractors::AdminUser).

use crate::api::handlers::{
    albums, auth, categories, comments, health_handler, photos, posts, tags, todos, users,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Credential endpoints.
///
/// # Endpoints
///
/// - `POST /auth/signup` - Register a new account
/// - `POST /auth/signin` - Exchange credentials for an access token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(auth::signup_handler))
        .route("/auth/signin", post(auth::signin_handler))
}

/// Every resource endpoint.
///
/// # Endpoints
///
/// - `GET    /health`
/// - `GET    /users/me`, `/users/checkUsernameAvailability`, `/users/checkEmailAvailability`
/// - `POST   /users` (admin), `PUT /users/setOrUpdateInfo`
/// - `PUT    /users/{username}`, `DELETE /users/{username}`
/// - `GET    /users/{username}/profile`, `/posts`, `/albums`
/// - `PUT    /users/{username}/giveAdmin`, `/takeAdmin` (admin)
/// - `GET|POST /posts`, `GET|PUT|DELETE /posts/{id}`
/// - `GET    /posts/category/{id}`, `/posts/tag/{id}`
/// - `GET|POST /posts/{id}/comments`, `GET|PUT|DELETE /posts/{id}/comments/{comment_id}`
/// - `GET|POST /albums`, `GET|PUT|DELETE /albums/{id}`, `GET /albums/{id}/photos`
/// - `GET|POST /photos`, `GET|PUT|DELETE /photos/{id}`
/// - `GET|POST /todos`, `GET|PUT|DELETE /todos/{id}`
/// - `PUT    /todos/{id}/complete`, `/todos/{id}/unComplete`
/// - `GET|POST /categories`, `GET|PUT|DELETE /categories/{id}`
/// - `GET|POST /tags`, `GET|PUT|DELETE /tags/{id}`
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .merge(user_routes())
        .merge(post_routes())
        .merge(album_routes())
        .merge(todo_routes())
        .merge(taxonomy_routes())
}

/// Credential and resource endpoints without rate limiting.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(resource_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::add_user_handler))
        .route("/users/me", get(users::current_user_handler))
        .route(
            "/users/checkUsernameAvailability",
            get(users::check_username_handler),
        )
        .route(
            "/users/checkEmailAvailability",
            get(users::check_email_handler),
        )
        .route(
            "/users/setOrUpdateInfo",
            put(users::set_or_update_info_handler),
        )
        .route(
            "/users/{username}",
            put(users::update_user_handler).delete(users::delete_user_handler),
        )
        .route("/users/{username}/profile", get(users::user_profile_handler))
        .route("/users/{username}/posts", get(users::user_posts_handler))
        .route("/users/{username}/albums", get(users::user_albums_handler))
        .route("/users/{username}/giveAdmin", put(users::give_admin_handler))
        .route("/users/{username}/takeAdmin", put(users::take_admin_handler))
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(posts::list_posts_handler).post(posts::create_post_handler),
        )
        .route(
            "/posts/{id}",
            get(posts::get_post_handler)
                .put(posts::update_post_handler)
                .delete(posts::delete_post_handler),
        )
        .route(
            "/posts/category/{id}",
            get(posts::posts_by_category_handler),
        )
        .route("/posts/tag/{id}", get(posts::posts_by_tag_handler))
        .route(
            "/posts/{id}/comments",
            get(comments::list_comments_handler).post(comments::create_comment_handler),
        )
        .route(
            "/posts/{id}/comments/{comment_id}",
            get(comments::get_comment_handler)
                .put(comments::update_comment_handler)
                .delete(comments::delete_comment_handler),
        )
}

fn album_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/albums",
            get(albums::list_albums_handler).post(albums::create_album_handler),
        )
        .route(
            "/albums/{id}",
            get(albums::get_album_handler)
                .put(albums::update_album_handler)
                .delete(albums::delete_album_handler),
        )
        .route("/albums/{id}/photos", get(albums::album_photos_handler))
        .route(
            "/photos",
            get(photos::list_photos_handler).post(photos::create_photo_handler),
        )
        .route(
            "/photos/{id}",
            get(photos::get_photo_handler)
                .put(photos::update_photo_handler)
                .delete(photos::delete_photo_handler),
        )
}

fn todo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            get(todos::list_todos_handler).post(todos::create_todo_handler),
        )
        .route(
            "/todos/{id}",
            get(todos::get_todo_handler)
                .put(todos::update_todo_handler)
                .delete(todos::delete_todo_handler),
        )
        .route("/todos/{id}/complete", put(todos::complete_todo_handler))
        .route("/todos/{id}/unComplete", put(todos::uncomplete_todo_handler))
}

fn taxonomy_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories_handler).post(categories::create_category_handler),
        )
        .route(
            "/categories/{id}",
            get(categories::get_category_handler)
                .put(categories::update_category_handler)
                .delete(categories::delete_category_handler),
        )
        .route(
            "/tags",
            get(tags::list_tags_handler).post(tags::create_tag_handler),
        )
        .route(
            "/tags/{id}",
            get(tags::get_tag_handler)
                .put(tags::update_tag_handler)
                .delete(tags::delete_tag_handler),
        )
}
