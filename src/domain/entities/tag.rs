//! Tag entity.

use chrono::{DateTime, Utc};

/// A post tag. Names are unique; `created_by` is the owner, `None` once that user is deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
