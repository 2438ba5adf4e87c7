//! Handlers for albums and the photos they hold.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::ApiResponse;
use crate::api::dto::album::{AlbumRequest, AlbumResponse};
use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::photo::PhotoResponse;
use crate::api::extractors::{CurrentUser, Path, Query, ValidatedJson};
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/albums`
pub async fn list_albums_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<AlbumResponse>>, AppError> {
    let albums = state
        .album_service
        .get_all_albums(params.into_page_request()?)
        .await?;

    Ok(Json(albums.map(AlbumResponse::from)))
}

/// `POST /api/albums`
pub async fn create_album_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    ValidatedJson(payload): ValidatedJson<AlbumRequest>,
) -> Result<(StatusCode, Json<AlbumResponse>), AppError> {
    let album = state
        .album_service
        .add_album(payload.title, &principal)
        .await?;

    Ok((StatusCode::CREATED, Json(album.into())))
}

/// `GET /api/albums/{id}`
pub async fn get_album_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AlbumResponse>, AppError> {
    let album = state.album_service.get_album(id).await?;

    Ok(Json(album.into()))
}

/// Renames an album.
///
/// # Endpoint
///
/// `PUT /api/albums/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the album does not exist.
/// Returns 401 Unauthorized if the caller is neither the owner nor an administrator.
pub async fn update_album_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<AlbumRequest>,
) -> Result<Json<AlbumResponse>, AppError> {
    let album = state
        .album_service
        .update_album(id, payload.title, &principal)
        .await?;

    Ok(Json(album.into()))
}

/// `DELETE /api/albums/{id}`
pub async fn delete_album_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse>, AppError> {
    state.album_service.delete_album(id, &principal).await?;

    Ok(Json(ApiResponse::ok("You successfully deleted album")))
}

/// `GET /api/albums/{id}/photos`
pub async fn album_photos_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<PhotoResponse>>, AppError> {
    let photos = state
        .photo_service
        .get_photos_by_album(id, params.into_page_request()?)
        .await?;

    Ok(Json(photos.map(PhotoResponse::from)))
}
