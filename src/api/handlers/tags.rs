//! Handlers for tags.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::ApiResponse;
use crate::api::dto::category::{NameRequest, TaxonomyResponse};
use crate::api::dto::pagination::PaginationParams;
use crate::api::extractors::{CurrentUser, Path, Query, ValidatedJson};
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/tags`
pub async fn list_tags_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<TaxonomyResponse>>, AppError> {
    let tags = state
        .tag_service
        .get_all_tags(params.into_page_request()?)
        .await?;

    Ok(Json(tags.map(TaxonomyResponse::from)))
}

/// `GET /api/tags/{id}`
pub async fn get_tag_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TaxonomyResponse>, AppError> {
    let tag = state.tag_service.get_tag(id).await?;

    Ok(Json(tag.into()))
}

/// Creates a tag.
///
/// # Endpoint
///
/// `POST /api/tags`
///
/// # Errors
///
/// Returns 409 Conflict if a tag with that name already exists.
pub async fn create_tag_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    ValidatedJson(payload): ValidatedJson<NameRequest>,
) -> Result<(StatusCode, Json<TaxonomyResponse>), AppError> {
    let tag = state.tag_service.add_tag(&payload.name, &principal).await?;

    Ok((StatusCode::CREATED, Json(tag.into())))
}

/// `PUT /api/tags/{id}`
pub async fn update_tag_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NameRequest>,
) -> Result<Json<TaxonomyResponse>, AppError> {
    let tag = state
        .tag_service
        .update_tag(id, &payload.name, &principal)
        .await?;

    Ok(Json(tag.into()))
}

/// `DELETE /api/tags/{id}`
pub async fn delete_tag_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse>, AppError> {
    state.tag_service.delete_tag(id, &principal).await?;

    Ok(Json(ApiResponse::ok("You successfully deleted tag")))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{self, Mocks};
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_create_tag() {
        let mut mocks = Mocks::default();
        mocks.tags.expect_find_by_name().returning(|_| Ok(None));
        mocks
            .tags
            .expect_create()
            .times(1)
            .returning(|name, user_id| Ok(test_support::tag(5, name, user_id)));

        let response = mocks
            .server(Some(test_support::principal(2)))
            .post("/api/tags")
            .json(&json!({ "name": "rust" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["name"], "rust");
    }

    #[tokio::test]
    async fn test_create_duplicate_tag() {
        let mut mocks = Mocks::default();
        mocks
            .tags
            .expect_find_by_name()
            .returning(|name| Ok(Some(test_support::tag(5, name, 1))));
        mocks.tags.expect_create().never();

        let response = mocks
            .server(Some(test_support::principal(2)))
            .post("/api/tags")
            .json(&json!({ "name": "rust" }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_get_tag_not_found() {
        let mut mocks = Mocks::default();
        mocks.tags.expect_find_by_id().returning(|_| Ok(None));

        let response = mocks.server(None).get("/api/tags/12").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["message"], "Tag not found with id: '12'");
    }

    #[tokio::test]
    async fn test_delete_tag_by_other_user() {
        let mut mocks = Mocks::default();
        mocks
            .tags
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_support::tag(id, "rust", 2))));
        mocks.tags.expect_delete().never();

        mocks
            .server(Some(test_support::principal(3)))
            .delete("/api/tags/5")
            .await
            .assert_status_unauthorized();
    }
}
