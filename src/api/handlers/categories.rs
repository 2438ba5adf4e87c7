//! Handlers for categories.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::ApiResponse;
use crate::api::dto::category::{NameRequest, TaxonomyResponse};
use crate::api::dto::pagination::PaginationParams;
use crate::api::extractors::{CurrentUser, Path, Query, ValidatedJson};
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/categories`
pub async fn list_categories_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<TaxonomyResponse>>, AppError> {
    let categories = state
        .category_service
        .get_all_categories(params.into_page_request()?)
        .await?;

    Ok(Json(categories.map(TaxonomyResponse::from)))
}

/// `GET /api/categories/{id}`
pub async fn get_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TaxonomyResponse>, AppError> {
    let category = state.category_service.get_category(id).await?;

    Ok(Json(category.into()))
}

/// `POST /api/categories`
pub async fn create_category_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    ValidatedJson(payload): ValidatedJson<NameRequest>,
) -> Result<(StatusCode, Json<TaxonomyResponse>), AppError> {
    let category = state
        .category_service
        .add_category(&payload.name, &principal)
        .await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Renames a category.
///
/// # Endpoint
///
/// `PUT /api/categories/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the category does not exist.
/// Returns 401 Unauthorized if the caller is neither its creator nor an administrator.
pub async fn update_category_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NameRequest>,
) -> Result<Json<TaxonomyResponse>, AppError> {
    let category = state
        .category_service
        .update_category(id, &payload.name, &principal)
        .await?;

    Ok(Json(category.into()))
}

/// Deletes a category together with every post filed under it.
///
/// # Endpoint
///
/// `DELETE /api/categories/{id}`
pub async fn delete_category_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse>, AppError> {
    state
        .category_service
        .delete_category(id, &principal)
        .await?;

    Ok(Json(ApiResponse::ok("You successfully deleted category")))
}

#[cfg(test)]
mod tests {
    use crate::domain::pagination::Page;
    use crate::test_support::{self, Mocks};
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    /// Category 3 was created by user 2.
    fn mocks() -> Mocks {
        let mut mocks = Mocks::default();
        mocks
            .categories
            .expect_find_by_id()
            .returning(|id| Ok((id == 3).then(|| test_support::category(3, 2))));
        mocks
    }

    #[tokio::test]
    async fn test_list_categories() {
        let mut mocks = Mocks::default();
        mocks.categories.expect_list().returning(|page| {
            Ok(Page::new(vec![test_support::category(3, 2)], page, 1))
        });

        let response = mocks.server(None).get("/api/categories").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["content"][0]["createdBy"], 2);
    }

    #[tokio::test]
    async fn test_create_category() {
        let mut mocks = Mocks::default();
        mocks
            .categories
            .expect_create()
            .withf(|name, user_id| name == "test category" && *user_id == 2)
            .times(1)
            .returning(|_, user_id| Ok(test_support::category(4, user_id)));

        let response = mocks
            .server(Some(test_support::principal(2)))
            .post("/api/categories")
            .json(&json!({ "name": "test category" }))
            .await;

        response.assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_category_requires_authentication() {
        Mocks::default()
            .server(None)
            .post("/api/categories")
            .json(&json!({ "name": "test category" }))
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_update_category_by_other_user() {
        let response = mocks()
            .server(Some(test_support::principal(5)))
            .put("/api/categories/3")
            .json(&json!({ "name": "renamed" }))
            .await;

        response.assert_status_unauthorized();
        let body: Value = response.json();
        assert_eq!(body["message"], "You don't have permission to edit this category");
    }

    #[tokio::test]
    async fn test_delete_category_as_admin() {
        let mut mocks = mocks();
        mocks.categories.expect_delete().times(1).returning(|_| Ok(()));

        let response = mocks
            .server(Some(test_support::admin(9)))
            .delete("/api/categories/3")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "success": true, "message": "You successfully deleted category" }));
    }
}
