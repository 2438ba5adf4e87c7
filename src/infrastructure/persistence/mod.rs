//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! bound parameters. Rows are decoded into private `FromRow` structs and
//! converted into domain entities.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Users and role assignments
//! - [`PgPostRepository`] - Posts and their tag links
//! - [`PgCommentRepository`] - Comments on posts
//! - [`PgAlbumRepository`] / [`PgPhotoRepository`] - Photo albums
//! - [`PgTodoRepository`] - Todo lists
//! - [`PgCategoryRepository`] / [`PgTagRepository`] - Post taxonomy

pub mod pg_album_repository;
pub mod pg_category_repository;
pub mod pg_comment_repository;
pub mod pg_photo_repository;
pub mod pg_post_repository;
pub mod pg_tag_repository;
pub mod pg_todo_repository;
pub mod pg_user_repository;

pub use pg_album_repository::PgAlbumRepository;
pub use pg_category_repository::PgCategoryRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_photo_repository::PgPhotoRepository;
pub use pg_post_repository::PgPostRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_todo_repository::PgTodoRepository;
pub use pg_user_repository::PgUserRepository;
