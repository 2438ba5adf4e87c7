//! Handlers for posts.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::ApiResponse;
use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::post::{PostRequest, PostResponse};
use crate::api::extractors::{CurrentUser, Path, Query, ValidatedJson};
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// Lists posts, newest first.
///
/// # Endpoint
///
/// `GET /api/posts?page=0&size=30`
///
/// # Response
///
/// ```json
/// {
///   "content": [{ "id": 1, "title": "...", "tags": ["rust"] }],
///   "page": 0,
///   "size": 30,
///   "totalElements": 1,
///   "totalPages": 1,
///   "last": true
/// }
/// ```
pub async fn list_posts_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<PostResponse>>, AppError> {
    let posts = state
        .post_service
        .get_all_posts(params.into_page_request()?)
        .await?;

    Ok(Json(posts.map(PostResponse::from)))
}

/// `GET /api/posts/category/{id}`
pub async fn posts_by_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<PostResponse>>, AppError> {
    let posts = state
        .post_service
        .get_posts_by_category(id, params.into_page_request()?)
        .await?;

    Ok(Json(posts.map(PostResponse::from)))
}

/// `GET /api/posts/tag/{id}`
pub async fn posts_by_tag_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<PostResponse>>, AppError> {
    let posts = state
        .post_service
        .get_posts_by_tag(id, params.into_page_request()?)
        .await?;

    Ok(Json(posts.map(PostResponse::from)))
}

/// `GET /api/posts/{id}`
pub async fn get_post_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state.post_service.get_post(id).await?;

    Ok(Json(post.into()))
}

/// Publishes a post as the caller.
///
/// # Endpoint
///
/// `POST /api/posts`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "At least ten characters",
///   "body": "At least fifty characters of content ...",
///   "categoryId": 3,
///   "tags": ["rust", "axum"]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the category does not exist.
pub async fn create_post_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    ValidatedJson(payload): ValidatedJson<PostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let post = state
        .post_service
        .add_post(payload.into(), &principal)
        .await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// Replaces a post.
///
/// # Endpoint
///
/// `PUT /api/posts/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the post or the category does not exist.
/// Returns 401 Unauthorized if the caller is neither the author nor an administrator.
pub async fn update_post_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<PostRequest>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state
        .post_service
        .update_post(id, payload.into(), &principal)
        .await?;

    Ok(Json(post.into()))
}

/// `DELETE /api/posts/{id}`
pub async fn delete_post_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse>, AppError> {
    state.post_service.delete_post(id, &principal).await?;

    Ok(Json(ApiResponse::ok("You successfully deleted post")))
}
