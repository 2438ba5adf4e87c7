//! Handlers for user profiles and account administration.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::ApiResponse;
use crate::api::dto::album::AlbumResponse;
use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::post::PostResponse;
use crate::api::dto::user::{
    EmailQuery, InfoRequest, UserIdentityAvailability, UserProfileResponse, UserRequest,
    UserResponse, UserSummary, UsernameQuery,
};
use crate::api::extractors::{AdminUser, CurrentUser, Path, Query, ValidatedJson};
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the identity behind the bearer token.
///
/// # Endpoint
///
/// `GET /api/users/me`
pub async fn current_user_handler(CurrentUser(principal): CurrentUser) -> Json<UserSummary> {
    Json(UserSummary::from(&principal))
}

/// `GET /api/users/checkUsernameAvailability?username=`
pub async fn check_username_handler(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> Result<Json<UserIdentityAvailability>, AppError> {
    let available = state
        .user_service
        .is_username_available(&query.username)
        .await?;

    Ok(Json(UserIdentityAvailability { available }))
}

/// `GET /api/users/checkEmailAvailability?email=`
pub async fn check_email_handler(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<UserIdentityAvailability>, AppError> {
    let available = state.user_service.is_email_available(&query.email).await?;

    Ok(Json(UserIdentityAvailability { available }))
}

/// Returns the public profile of a user, including the number of posts.
///
/// # Endpoint
///
/// `GET /api/users/{username}/profile`
///
/// # Errors
///
/// Returns 404 Not Found if the user does not exist.
pub async fn user_profile_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserProfileResponse>, AppError> {
    let profile = state.user_service.get_profile(&username).await?;

    Ok(Json(profile.into()))
}

/// `GET /api/users/{username}/posts`
pub async fn user_posts_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<PostResponse>>, AppError> {
    let page = params.into_page_request()?;
    let posts = state.user_service.get_posts(&username, page).await?;

    Ok(Json(posts.map(PostResponse::from)))
}

/// `GET /api/users/{username}/albums`
pub async fn user_albums_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<AlbumResponse>>, AppError> {
    let page = params.into_page_request()?;
    let albums = state.user_service.get_albums(&username, page).await?;

    Ok(Json(albums.map(AlbumResponse::from)))
}

/// Creates an account on behalf of an administrator.
///
/// # Endpoint
///
/// `POST /api/users` (ADMIN)
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the username/email is taken.
/// Returns 403 Forbidden if the caller is not an administrator.
pub async fn add_user_handler(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state.user_service.add_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Replaces a user's profile.
///
/// # Endpoint
///
/// `PUT /api/users/{username}`
///
/// # Response
///
/// `201 Created` with the updated account.
///
/// # Errors
///
/// Returns 404 Not Found if the user does not exist.
/// Returns 401 Unauthorized if the caller is neither the user nor an administrator.
pub async fn update_user_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(username): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .user_service
        .update_user(&username, payload.into(), &principal)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// `DELETE /api/users/{username}`
pub async fn delete_user_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse>, AppError> {
    state
        .user_service
        .delete_user(&username, &principal)
        .await?;

    Ok(Json(ApiResponse::ok(format!(
        "You successfully deleted profile of: {username}"
    ))))
}

/// `PUT /api/users/{username}/giveAdmin` (ADMIN)
pub async fn give_admin_handler(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse>, AppError> {
    state.user_service.give_admin(&username).await?;

    Ok(Json(ApiResponse::ok(format!(
        "You gave ADMIN role to user: {username}"
    ))))
}

/// `PUT /api/users/{username}/takeAdmin` (ADMIN)
pub async fn take_admin_handler(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse>, AppError> {
    state.user_service.remove_admin(&username).await?;

    Ok(Json(ApiResponse::ok(format!(
        "You took ADMIN role from user: {username}"
    ))))
}

/// Sets the caller's address, company and contact details.
///
/// # Endpoint
///
/// `PUT /api/users/setOrUpdateInfo`
pub async fn set_or_update_info_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    ValidatedJson(payload): ValidatedJson<InfoRequest>,
) -> Result<Json<UserProfileResponse>, AppError> {
    let profile = state
        .user_service
        .set_or_update_info(&principal, payload.into())
        .await?;

    Ok(Json(profile.into()))
}
