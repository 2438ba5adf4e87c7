//! DTOs for albums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::not_blank;
use crate::domain::entities::Album;

#[derive(Debug, Deserialize, Validate)]
pub struct AlbumRequest {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResponse {
    pub id: i64,
    pub title: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Album> for AlbumResponse {
    fn from(a: Album) -> Self {
        Self {
            id: a.id,
            title: a.title,
            user_id: a.user_id,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}
