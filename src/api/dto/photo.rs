//! DTOs for photos.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::PhotoData;
use crate::domain::entities::Photo;

/// Request body for creating or replacing a photo.
///
/// `albumId` is required; a missing or `null` value is rejected with 400.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRequest {
    #[validate(length(min = 3))]
    pub title: String,

    #[validate(length(min = 10))]
    pub url: String,

    #[validate(length(min = 10))]
    pub thumbnail_url: String,

    pub album_id: i64,
}

impl From<PhotoRequest> for PhotoData {
    fn from(r: PhotoRequest) -> Self {
        PhotoData {
            title: r.title,
            url: r.url,
            thumbnail_url: r.thumbnail_url,
            album_id: r.album_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    pub album_id: i64,
}

impl From<Photo> for PhotoResponse {
    fn from(p: Photo) -> Self {
        Self {
            id: p.id,
            title: p.title,
            url: p.url,
            thumbnail_url: p.thumbnail_url,
            album_id: p.album_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_album_id_rejected() {
        let result = serde_json::from_str::<PhotoRequest>(
            r#"{"title":"Photo test","url":"https://via.placeholder.com/600","thumbnailUrl":"https://via.placeholder.com/150","albumId":null}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_short_urls_rejected() {
        let request = PhotoRequest {
            title: "Photo test".into(),
            url: "http://x".into(),
            thumbnail_url: "http://y".into(),
            album_id: 1,
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("url"));
        assert_eq!(fields.len(), 2);
    }
}
