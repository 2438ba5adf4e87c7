//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! existence checks and authorization rules. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::AuthService`] - Registration, sign-in and token authentication
//! - [`services::UserService`] - Profiles, availability checks and role management
//! - [`services::PostService`] - Posts, with category and tag resolution
//! - [`services::CommentService`] - Comments scoped to a post
//! - [`services::AlbumService`] / [`services::PhotoService`] - Photo albums
//! - [`services::TodoService`] - Owner-only todo lists
//! - [`services::CategoryService`] / [`services::TagService`] - Post taxonomy

pub mod services;
