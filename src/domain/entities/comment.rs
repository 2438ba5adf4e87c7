//! Comment entity.

use chrono::{DateTime, Utc};

/// A comment on a post. `name` and `email` are copied from the author at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Returns true if the comment was left on the given post.
    pub fn belongs_to(&self, post_id: i64) -> bool {
        self.post_id == post_id
    }
}

/// Input data for creating a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: i64,
    pub user_id: i64,
}
