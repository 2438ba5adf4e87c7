//! DTOs for posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::PostData;
use crate::domain::entities::Post;

/// Request body for creating or replacing a post.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[validate(length(min = 10, message = "Title must be at least 10 characters"))]
    pub title: String,

    #[validate(length(min = 50, message = "Body must be at least 50 characters"))]
    pub body: String,

    pub category_id: i64,

    /// Tag names; unknown names are created.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<PostRequest> for PostData {
    fn from(r: PostRequest) -> Self {
        PostData {
            title: r.title,
            body: r.body,
            category_id: r.category_id,
            tags: r.tags,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
    pub category_id: i64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            body: p.body,
            user_id: p.user_id,
            category_id: p.category_id,
            tags: p.tags,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
