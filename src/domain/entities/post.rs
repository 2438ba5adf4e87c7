//! Post entity.

use chrono::{DateTime, Utc};

/// A blog post with its category and tag names.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
    pub category_id: i64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a post. Tags are already resolved to ids.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: i64,
    pub category_id: i64,
    pub tag_ids: Vec<i64>,
}

/// Replacement of a post's editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PostUpdate {
    pub title: String,
    pub body: String,
    pub category_id: i64,
    pub tag_ids: Vec<i64>,
}
