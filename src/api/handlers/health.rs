//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{ComponentCheck, HealthChecks, HealthResponse, HealthStatus};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": {
///       "status": "ok",
///       "message": "Connected, 12 registered users"
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let checks = HealthChecks {
        database: check_database(&state).await,
    };

    let response = HealthResponse::from(checks);
    let status = match response.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(response))
}

/// Probes the database by counting users.
async fn check_database(state: &AppState) -> ComponentCheck {
    match state.user_service.count_users().await {
        Ok(count) => ComponentCheck::ok(format!("Connected, {count} registered users")),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unavailable");
            ComponentCheck::error(format!("Database error: {e}"))
        }
    }
}
