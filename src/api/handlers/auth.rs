//! Handlers for registration and sign-in.

use axum::{Json, extract::State, http::{StatusCode, header}, response::IntoResponse};

use crate::api::dto::ApiResponse;
use crate::api::dto::auth::{JwtAuthenticationResponse, LoginRequest, SignUpRequest};
use crate::api::extractors::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /api/auth/signup`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Leanne",
///   "lastName": "Graham",
///   "username": "leanne",
///   "email": "leanne.graham@gmail.com",
///   "password": "password"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `Location: /api/users/{username}`.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the username/email is taken.
pub async fn signup_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignUpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.auth_service.register(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/users/{}", user.username))],
        Json(ApiResponse::ok("User registered successfully")),
    ))
}

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /api/auth/signin`
///
/// # Response
///
/// ```json
/// { "accessToken": "eyJhbGciOi...", "tokenType": "Bearer" }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized if the credentials do not match an account.
pub async fn signin_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<JwtAuthenticationResponse>, AppError> {
    let token = state
        .auth_service
        .sign_in(&payload.username_or_email, &payload.password)
        .await?;

    Ok(Json(JwtAuthenticationResponse::bearer(token)))
}
