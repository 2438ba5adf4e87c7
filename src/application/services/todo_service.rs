//! Personal todo lists. Todos are private: only their owner may see or touch them.

use crate::application::services::permission_denied;
use crate::domain::entities::{NewTodo, Todo};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::principal::Principal;
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;
use std::sync::Arc;

pub struct TodoService {
    todos: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }

    /// Lists the principal's own todos.
    pub async fn get_all_todos(
        &self,
        principal: &Principal,
        page: PageRequest,
    ) -> Result<Page<Todo>, AppError> {
        self.todos.list_by_user(principal.id, page).await
    }

    pub async fn add_todo(
        &self,
        title: String,
        completed: bool,
        principal: &Principal,
    ) -> Result<Todo, AppError> {
        self.todos
            .create(NewTodo {
                title,
                completed,
                user_id: principal.id,
            })
            .await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the todo does not exist.
    /// Returns [`AppError::Unauthorized`] if it belongs to another user.
    pub async fn get_todo(&self, id: i64, principal: &Principal) -> Result<Todo, AppError> {
        let todo = self
            .todos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("Todo", "id", id))?;

        if todo.user_id != principal.id {
            return Err(permission_denied(
                "Todo",
                principal,
                "You don't have permission to make this operation",
            ));
        }

        Ok(todo)
    }

    pub async fn update_todo(
        &self,
        id: i64,
        title: String,
        completed: bool,
        principal: &Principal,
    ) -> Result<Todo, AppError> {
        self.get_todo(id, principal).await?;
        self.todos.update(id, &title, completed).await
    }

    pub async fn delete_todo(&self, id: i64, principal: &Principal) -> Result<(), AppError> {
        self.get_todo(id, principal).await?;
        self.todos.delete(id).await
    }

    pub async fn complete_todo(&self, id: i64, principal: &Principal) -> Result<Todo, AppError> {
        self.set_completed(id, true, principal).await
    }

    pub async fn uncomplete_todo(&self, id: i64, principal: &Principal) -> Result<Todo, AppError> {
        self.set_completed(id, false, principal).await
    }

    async fn set_completed(
        &self,
        id: i64,
        completed: bool,
        principal: &Principal,
    ) -> Result<Todo, AppError> {
        let todo = self.get_todo(id, principal).await?;
        self.todos.update(id, &todo.title, completed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTodoRepository;
    use crate::test_support;

    fn todos_with(todo_id: i64, owner: i64) -> MockTodoRepository {
        let mut todos = MockTodoRepository::new();
        todos
            .expect_find_by_id()
            .returning(move |id| Ok((id == todo_id).then(|| test_support::todo(id, owner))));
        todos
    }

    #[tokio::test]
    async fn test_list_only_own_todos() {
        let mut todos = MockTodoRepository::new();
        todos
            .expect_list_by_user()
            .withf(|user_id, _| *user_id == 2)
            .times(1)
            .returning(|_, page| Ok(Page::empty(page)));

        let page = TodoService::new(Arc::new(todos))
            .get_all_todos(&test_support::principal(2), PageRequest::default())
            .await
            .unwrap();

        assert!(page.content.is_empty());
    }

    #[tokio::test]
    async fn test_admin_cannot_read_foreign_todo() {
        let err = TodoService::new(Arc::new(todos_with(1, 2)))
            .get_todo(1, &test_support::admin(9))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unauthorized { .. }));
        assert_eq!(
            err.to_string(),
            "You don't have permission to make this operation"
        );
    }

    #[tokio::test]
    async fn test_get_todo_not_found() {
        let err = TodoService::new(Arc::new(todos_with(1, 2)))
            .get_todo(5, &test_support::principal(2))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Todo not found with id: '5'");
    }

    #[tokio::test]
    async fn test_complete_keeps_title() {
        let mut todos = todos_with(1, 2);
        todos
            .expect_update()
            .withf(|id, title, completed| *id == 1 && title == "Write the release notes" && *completed)
            .times(1)
            .returning(|id, _, completed| {
                let mut todo = test_support::todo(id, 2);
                todo.completed = completed;
                Ok(todo)
            });

        let todo = TodoService::new(Arc::new(todos))
            .complete_todo(1, &test_support::principal(2))
            .await
            .unwrap();

        assert!(todo.completed);
    }

    #[tokio::test]
    async fn test_delete_foreign_todo_denied() {
        let mut todos = todos_with(1, 2);
        todos.expect_delete().never();

        let result = TodoService::new(Arc::new(todos))
            .delete_todo(1, &test_support::principal(3))
            .await;

        assert!(result.is_err());
    }
}
