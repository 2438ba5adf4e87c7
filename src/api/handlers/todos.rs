//! Handlers for the caller's private todo list.
//!
//! Every endpoint here requires authentication; todos are never visible to
//! anyone but their owner.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::ApiResponse;
use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::todo::{TodoRequest, TodoResponse};
use crate::api::extractors::{CurrentUser, Path, Query, ValidatedJson};
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/todos`
pub async fn list_todos_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<TodoResponse>>, AppError> {
    let todos = state
        .todo_service
        .get_all_todos(&principal, params.into_page_request()?)
        .await?;

    Ok(Json(todos.map(TodoResponse::from)))
}

/// `POST /api/todos`
pub async fn create_todo_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    ValidatedJson(payload): ValidatedJson<TodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let todo = state
        .todo_service
        .add_todo(payload.title, payload.completed, &principal)
        .await?;

    Ok((StatusCode::CREATED, Json(todo.into())))
}

/// `GET /api/todos/{id}`
pub async fn get_todo_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.todo_service.get_todo(id, &principal).await?;

    Ok(Json(todo.into()))
}

/// `PUT /api/todos/{id}`
pub async fn update_todo_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<TodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state
        .todo_service
        .update_todo(id, payload.title, payload.completed, &principal)
        .await?;

    Ok(Json(todo.into()))
}

/// `DELETE /api/todos/{id}`
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse>, AppError> {
    state.todo_service.delete_todo(id, &principal).await?;

    Ok(Json(ApiResponse::ok("You successfully deleted todo")))
}

/// `PUT /api/todos/{id}/complete`
pub async fn complete_todo_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.todo_service.complete_todo(id, &principal).await?;

    Ok(Json(todo.into()))
}

/// `PUT /api/todos/{id}/unComplete`
pub async fn uncomplete_todo_handler(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.todo_service.uncomplete_todo(id, &principal).await?;

    Ok(Json(todo.into()))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{self, Mocks};
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    /// Todo 1 belongs to user 2.
    fn mocks() -> Mocks {
        let mut mocks = Mocks::default();
        mocks
            .todos
            .expect_find_by_id()
            .returning(|id| Ok((id == 1).then(|| test_support::todo(1, 2))));
        mocks
    }

    #[tokio::test]
    async fn test_list_todos_requires_authentication() {
        Mocks::default()
            .server(None)
            .get("/api/todos")
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_create_todo() {
        let mut mocks = Mocks::default();
        mocks
            .todos
            .expect_create()
            .withf(|t| t.user_id == 2 && !t.completed)
            .times(1)
            .returning(|t| Ok(test_support::todo(1, t.user_id)));

        let response = mocks
            .server(Some(test_support::principal(2)))
            .post("/api/todos")
            .json(&json!({ "title": "Write the release notes" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["completed"], false);
    }

    #[tokio::test]
    async fn test_get_foreign_todo() {
        mocks()
            .server(Some(test_support::principal(3)))
            .get("/api/todos/1")
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_complete_todo() {
        let mut mocks = mocks();
        mocks
            .todos
            .expect_update()
            .withf(|id, _, completed| *id == 1 && *completed)
            .times(1)
            .returning(|id, _, completed| {
                let mut todo = test_support::todo(id, 2);
                todo.completed = completed;
                Ok(todo)
            });

        let response = mocks
            .server(Some(test_support::principal(2)))
            .put("/api/todos/1/complete")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["completed"], true);
    }

    #[tokio::test]
    async fn test_uncomplete_todo() {
        let mut mocks = mocks();
        mocks
            .todos
            .expect_update()
            .withf(|_, title, completed| title == "Write the release notes" && !*completed)
            .times(1)
            .returning(|id, _, _| Ok(test_support::todo(id, 2)));

        mocks
            .server(Some(test_support::principal(2)))
            .put("/api/todos/1/unComplete")
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_delete_todo() {
        let mut mocks = mocks();
        mocks.todos.expect_delete().times(1).returning(|_| Ok(()));

        let response = mocks
            .server(Some(test_support::principal(2)))
            .delete("/api/todos/1")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "success": true, "message": "You successfully deleted todo" }));
    }
}
