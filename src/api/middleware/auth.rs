//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Attaches the caller's [`Principal`](crate::domain::principal::Principal) to
/// the request when it carries a valid bearer token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Verify signature and expiry
/// 3. Reload the user the token was issued for
/// 4. Insert the principal into request extensions
/// 5. Continue to next middleware/handler
///
/// Missing, expired or otherwise invalid tokens leave the request anonymous.
/// Endpoints that need a caller reject it through
/// [`CurrentUser`](crate::api::extractors::CurrentUser) or
/// [`AdminUser`](crate::api::extractors::AdminUser).
///
/// # Errors
///
/// Only database failures while loading the user abort the request (`500`).
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    if let Ok(AuthBearer(token)) = AuthBearer::from_request_parts(&mut parts, &()).await {
        match st.auth_service.authenticate(&token).await {
            Ok(principal) => {
                parts.extensions.insert(principal);
            }
            Err(e @ AppError::Internal { .. }) => return Err(e),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unusable bearer token");
            }
        }
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
