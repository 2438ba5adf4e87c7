//! DTOs for the health check endpoint.

use serde::Serialize;

/// Overall verdict, derived from the component checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Outcome of a single component probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: ComponentCheck,
}

impl HealthChecks {
    pub fn all_ok(&self) -> bool {
        self.database.status == ProbeStatus::Ok
    }
}

#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub status: ProbeStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentCheck {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Ok,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Error,
            message: Some(message.into()),
        }
    }
}

impl From<HealthChecks> for HealthResponse {
    fn from(checks: HealthChecks) -> Self {
        Self {
            status: if checks.all_ok() {
                HealthStatus::Healthy
            } else {
                HealthStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_probe_degrades() {
        let response = HealthResponse::from(HealthChecks {
            database: ComponentCheck::error("Database error: pool timed out"),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["database"]["status"], "error");
    }
}
