//! Domain layer containing business entities and data access contracts.
//!
//! This module defines the blog data model independent of HTTP and SQL concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`principal`] - Authenticated identity and the ownership rule
//! - [`pagination`] - Page requests and paged results
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business rules are enforced in services (see [`crate::application::services`])

pub mod entities;
pub mod pagination;
pub mod principal;
pub mod repositories;
