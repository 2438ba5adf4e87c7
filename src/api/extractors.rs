//! Request extractors for validated bodies, path and query parameters, and
//! the authenticated principal.
//!
//! Every extractor here rejects with [`AppError`], so malformed input gets the
//! same JSON error body as any other failure.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Request,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::domain::principal::Principal;
use crate::error::AppError;

/// JSON body that has been deserialized and validated.
///
/// Malformed JSON, missing fields, wrong types and failed validation rules all
/// reject with `400 Bad Request`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        value.validate()?;

        Ok(Self(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    let message = match rejection {
        JsonRejection::JsonDataError(_) => "Invalid request body",
        JsonRejection::JsonSyntaxError(_) => "Malformed JSON",
        JsonRejection::MissingJsonContentType(_) => "Expected Content-Type: application/json",
        _ => "Unreadable request body",
    };

    AppError::bad_request(message, json!({ "reason": rejection.body_text() }))
}

/// Path parameters, e.g. `Path<i64>` or `Path<(i64, i64)>`.
#[derive(Debug)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection)?;

        Ok(Self(value))
    }
}

fn path_rejection(rejection: PathRejection) -> AppError {
    let details = json!({ "reason": rejection.body_text() });

    match rejection {
        PathRejection::FailedToDeserializePathParams(_) => {
            AppError::bad_request("Invalid path parameter", details)
        }
        _ => AppError::internal("Unreadable path parameters", details),
    }
}

/// Query string parameters.
#[derive(Debug)]
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) =
            axum::extract::Query::<T>::from_request_parts(parts, state)
                .await
                .map_err(query_rejection)?;

        Ok(Self(value))
    }
}

fn query_rejection(rejection: QueryRejection) -> AppError {
    AppError::bad_request(
        "Invalid query string",
        json!({ "reason": rejection.body_text() }),
    )
}

/// The authenticated caller. Rejects anonymous requests with `401`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Principal);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Full authentication is required to access this resource",
                    json!({}),
                )
            })
    }
}

/// An authenticated administrator.
///
/// Rejects anonymous requests with `401` and non-admin principals with `403`.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Principal);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(principal) = CurrentUser::from_request_parts(parts, state).await?;

        if !principal.is_admin() {
            tracing::warn!(user_id = principal.id, "Admin endpoint called without ADMIN role");
            return Err(AppError::forbidden(
                "Access is denied",
                json!({ "required_role": "ROLE_ADMIN" }),
            ));
        }

        Ok(Self(principal))
    }
}
