//! HTTP middleware for request processing and protection.
//!
//! Provides optional bearer authentication, rate limiting for the
//! credential endpoints, and request tracing.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
