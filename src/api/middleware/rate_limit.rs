//! Rate limiting middleware using token bucket algorithm.

use anyhow::Context;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

use crate::config::Config;

pub type AuthRateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates the rate limiter guarding `/api/auth/*`.
///
/// # Limits
///
/// - **Rate**: `AUTH_RATE_PER_SECOND` requests per second (default 1), i.e. one
///   request returns to the bucket every `1 / rate` seconds
/// - **Burst**: `AUTH_RATE_BURST` requests (default 10)
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Fails if either limit is zero or the rate exceeds one request per nanosecond.
pub fn auth_layer(config: &Config) -> anyhow::Result<AuthRateLimitLayer> {
    let period = replenish_period(config.auth_rate_per_second)
        .context("Invalid auth rate limit: AUTH_RATE_PER_SECOND is out of range")?;

    let governor_conf = GovernorConfigBuilder::default()
        .period(period)
        .burst_size(config.auth_rate_burst)
        .finish()
        .context("Invalid auth rate limit: rate and burst must be positive")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Interval after which one request is returned to the bucket.
fn replenish_period(requests_per_second: u64) -> Option<Duration> {
    let nanos = 1_000_000_000u64.checked_div(requests_per_second)?;
    (nanos > 0).then(|| Duration::from_nanos(nanos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn test_auth_layer_from_config() {
        assert!(auth_layer(&test_support::config()).is_ok());
    }

    #[test]
    fn test_higher_rate_replenishes_faster() {
        assert_eq!(replenish_period(1), Some(Duration::from_secs(1)));
        assert_eq!(replenish_period(5), Some(Duration::from_millis(200)));
        assert!(replenish_period(10) < replenish_period(5));
    }

    #[test]
    fn test_rate_out_of_range() {
        assert_eq!(replenish_period(0), None);
        assert_eq!(replenish_period(u64::MAX), None);

        let mut config = test_support::config();
        config.auth_rate_per_second = 0;
        assert!(auth_layer(&config).is_err());
    }

    #[test]
    fn test_zero_burst_rejected() {
        let mut config = test_support::config();
        config.auth_rate_burst = 0;

        assert!(auth_layer(&config).is_err());
    }
}
