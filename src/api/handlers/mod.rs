//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod albums;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod health;
pub mod photos;
pub mod posts;
pub mod tags;
pub mod todos;
pub mod users;

pub use health::health_handler;
