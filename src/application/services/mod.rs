//! Business logic services for the application layer.

pub mod album_service;
pub mod auth_service;
pub mod category_service;
pub mod comment_service;
pub mod photo_service;
pub mod post_service;
pub mod tag_service;
pub mod todo_service;
pub mod user_service;

pub use album_service::AlbumService;
pub use auth_service::{AuthService, SignUp};
pub use category_service::CategoryService;
pub use comment_service::CommentService;
pub use photo_service::{PhotoData, PhotoService};
pub use post_service::{PostData, PostService};
pub use tag_service::TagService;
pub use todo_service::TodoService;
pub use user_service::{UserData, UserProfile, UserService};

use serde_json::json;

use crate::domain::principal::Principal;
use crate::error::AppError;

/// Builds the 401 returned when a principal may not touch a resource, and
/// records the denial.
pub(crate) fn permission_denied(
    resource: &'static str,
    principal: &Principal,
    message: &str,
) -> AppError {
    tracing::warn!(
        user_id = principal.id,
        username = %principal.username,
        resource,
        "Permission denied"
    );
    metrics::counter!("blog_authorization_denied_total", "resource" => resource).increment(1);

    AppError::unauthorized(message, json!({ "resource": resource }))
}
