//! Handlers for comments nested under a post.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::ApiResponse;
use crate::api::dto::comment::{CommentRequest, CommentResponse};
use crate::api::dto::pagination::PaginationParams;
use crate::api::extractors::{CurrentUser, Path, Query, ValidatedJson};
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/posts/{post_id}/comments`
pub async fn list_comments_handler(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<CommentResponse>>, AppError> {
    let comments = state
        .comment_service
        .get_all_comments(post_id, params.into_page_request()?)
        .await?;

    Ok(Json(comments.map(CommentResponse::from)))
}

/// Comments on a post as the caller.
///
/// # Endpoint
///
/// `POST /api/posts/{post_id}/comments`
///
/// # Request Body
///
/// ```json
/// { "body": "At least ten characters" }
/// ```
///
/// The comment's `name` and `email` are taken from the caller's account.
pub async fn create_comment_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(post_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let comment = state
        .comment_service
        .add_comment(post_id, payload.body, &principal)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// `GET /api/posts/{post_id}/comments/{id}`
pub async fn get_comment_handler(
    State(state): State<AppState>,
    Path((post_id, id)): Path<(i64, i64)>,
) -> Result<Json<CommentResponse>, AppError> {
    let comment = state.comment_service.get_comment(post_id, id).await?;

    Ok(Json(comment.into()))
}

/// `PUT /api/posts/{post_id}/comments/{id}`
pub async fn update_comment_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path((post_id, id)): Path<(i64, i64)>,
    ValidatedJson(payload): ValidatedJson<CommentRequest>,
) -> Result<Json<CommentResponse>, AppError> {
    let comment = state
        .comment_service
        .update_comment(post_id, id, payload.body, &principal)
        .await?;

    Ok(Json(comment.into()))
}

/// `DELETE /api/posts/{post_id}/comments/{id}`
pub async fn delete_comment_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path((post_id, id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse>, AppError> {
    state
        .comment_service
        .delete_comment(post_id, id, &principal)
        .await?;

    Ok(Json(ApiResponse::ok("You successfully deleted comment")))
}
