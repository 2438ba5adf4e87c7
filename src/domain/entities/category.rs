//! Category entity.

use chrono::{DateTime, Utc};

/// A post category. `created_by` is the owner for authorization purposes and
/// becomes `None` once that user is deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
