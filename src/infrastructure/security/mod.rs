//! Credential handling: access tokens and password hashes.
//!
//! - [`jwt`] - HS256 access tokens carrying the user id
//! - [`password`] - Argon2id password hashing

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtProvider};
