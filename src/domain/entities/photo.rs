//! Photo entity.

use chrono::{DateTime, Utc};

/// A photo stored in an album. Ownership follows the album's owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    pub album_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating or replacing a photo.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPhoto {
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    pub album_id: i64,
}
