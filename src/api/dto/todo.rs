//! DTOs for todos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::not_blank;
use crate::domain::entities::Todo;

#[derive(Debug, Deserialize, Validate)]
pub struct TodoRequest {
    #[validate(custom(function = "not_blank"))]
    pub title: String,

    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            completed: t.completed,
            user_id: t.user_id,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
