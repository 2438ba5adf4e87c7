//! HS256 access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Payload of an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id, as a decimal string.
    pub sub: String,
    /// Issued at, seconds since the epoch.
    pub iat: usize,
    /// Expiration, seconds since the epoch.
    pub exp: usize,
}

/// Issues and validates access tokens signed with a shared secret.
#[derive(Clone)]
pub struct JwtProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration: Duration,
}

impl JwtProvider {
    pub fn new(secret: &str, expiration_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration: Duration::seconds(expiration_seconds as i64),
        }
    }

    /// Issues a token for `user_id` valid for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn generate_token(&self, user_id: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.expiration).timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            AppError::internal("Failed to issue token", json!({}))
        })
    }

    /// Verifies signature and expiry and returns the user id in the token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is expired, tampered with,
    /// malformed, or carries a non-numeric subject.
    pub fn validate_token(&self, token: &str) -> Result<i64, AppError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::ExpiredSignature => "Expired JWT token",
                ErrorKind::InvalidSignature => "Invalid JWT signature",
                _ => "Invalid JWT token",
            };
            AppError::unauthorized("Unauthorized", json!({ "reason": reason }))
        })?;

        data.claims.sub.parse::<i64>().map_err(|_| {
            AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid JWT subject" }))
        })
    }
}
