//! Handlers for photos.

use axum::{Json, extract::State};

use crate::api::dto::ApiResponse;
use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::photo::{PhotoRequest, PhotoResponse};
use crate::api::extractors::{CurrentUser, Path, Query, ValidatedJson};
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/photos`
pub async fn list_photos_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<PhotoResponse>>, AppError> {
    let photos = state
        .photo_service
        .get_all_photos(params.into_page_request()?)
        .await?;

    Ok(Json(photos.map(PhotoResponse::from)))
}

/// `GET /api/photos/{id}`
pub async fn get_photo_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PhotoResponse>, AppError> {
    let photo = state.photo_service.get_photo(id).await?;

    Ok(Json(photo.into()))
}

/// Adds a photo to one of the caller's albums.
///
/// # Endpoint
///
/// `POST /api/photos`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Photo test",
///   "url": "https://via.placeholder.com/600/92c952",
///   "thumbnailUrl": "https://via.placeholder.com/150/92c952",
///   "albumId": 1
/// }
/// ```
///
/// Responds with 200 OK, not 201.
///
/// # Errors
///
/// Returns 404 Not Found if the album does not exist.
/// Returns 401 Unauthorized if the album belongs to someone else.
pub async fn create_photo_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    ValidatedJson(payload): ValidatedJson<PhotoRequest>,
) -> Result<Json<PhotoResponse>, AppError> {
    let photo = state
        .photo_service
        .add_photo(payload.into(), &principal)
        .await?;

    Ok(Json(photo.into()))
}

/// `PUT /api/photos/{id}`
pub async fn update_photo_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<PhotoRequest>,
) -> Result<Json<PhotoResponse>, AppError> {
    let photo = state
        .photo_service
        .update_photo(id, payload.into(), &principal)
        .await?;

    Ok(Json(photo.into()))
}

/// `DELETE /api/photos/{id}`
pub async fn delete_photo_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse>, AppError> {
    state.photo_service.delete_photo(id, &principal).await?;

    Ok(Json(ApiResponse::ok("Photo deleted successfully")))
}
