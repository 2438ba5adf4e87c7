//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs serialize as camelCase JSON. Request bodies derive
//! [`validator::Validate`] and are checked by
//! [`crate::api::extractors::ValidatedJson`] before reaching a handler.

pub mod album;
pub mod auth;
pub mod category;
pub mod comment;
pub mod health;
pub mod pagination;
pub mod photo;
pub mod post;
pub mod todo;
pub mod user;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

/// Outcome of a mutation that returns no entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Rejects empty and whitespace-only strings.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
