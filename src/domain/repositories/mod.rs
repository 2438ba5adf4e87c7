//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by the PostgreSQL repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Accounts, roles and profile data
//! - [`PostRepository`] - Posts and their tag links
//! - [`CommentRepository`] - Comments on posts
//! - [`AlbumRepository`] / [`PhotoRepository`] - Photo albums
//! - [`TodoRepository`] - Per-user todo lists
//! - [`CategoryRepository`] / [`TagRepository`] - Post taxonomy
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod album_repository;
pub mod category_repository;
pub mod comment_repository;
pub mod photo_repository;
pub mod post_repository;
pub mod tag_repository;
pub mod todo_repository;
pub mod user_repository;

pub use album_repository::AlbumRepository;
pub use category_repository::CategoryRepository;
pub use comment_repository::CommentRepository;
pub use photo_repository::PhotoRepository;
pub use post_repository::PostRepository;
pub use tag_repository::TagRepository;
pub use todo_repository::TodoRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use album_repository::MockAlbumRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use photo_repository::MockPhotoRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
