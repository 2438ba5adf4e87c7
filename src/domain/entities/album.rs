//! Album entity.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAlbum {
    pub title: String,
    pub user_id: i64,
}
