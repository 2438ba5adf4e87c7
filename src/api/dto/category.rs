//! DTOs shared by categories and tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::not_blank;
use crate::domain::entities::{Category, Tag};

/// Request body for creating or renaming a category or tag.
#[derive(Debug, Deserialize, Validate)]
pub struct NameRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

/// A category or tag with its audit fields.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyResponse {
    pub id: i64,
    pub name: String,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for TaxonomyResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_by: c.created_by,
            updated_by: c.updated_by,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<Tag> for TaxonomyResponse {
    fn from(t: Tag) -> Self {
        Self {
            id: t.id,
            name: t.name,
            created_by: t.created_by,
            updated_by: t.updated_by,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
