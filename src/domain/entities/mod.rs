//! Core domain entities representing the blog data model.
//!
//! Entities are plain data structures; ownership and validation rules are
//! applied by the application services.
//!
//! # Entity Types
//!
//! - [`User`] with its [`Address`], [`Company`] and [`RoleName`]s
//! - [`Post`], [`Comment`], [`Category`], [`Tag`]
//! - [`Album`], [`Photo`]
//! - [`Todo`]
//!
//! # Design Pattern
//!
//! Entities are paired with input structs for creation and update
//! (`NewPost`, `PostUpdate`, `NewUser`, ...).

pub mod album;
pub mod category;
pub mod comment;
pub mod photo;
pub mod post;
pub mod role;
pub mod tag;
pub mod todo;
pub mod user;

pub use album::{Album, NewAlbum};
pub use category::Category;
pub use comment::{Comment, NewComment};
pub use photo::{NewPhoto, Photo};
pub use post::{NewPost, Post, PostUpdate};
pub use role::RoleName;
pub use tag::Tag;
pub use todo::{NewTodo, Todo};
pub use user::{Address, Company, Geo, NewUser, User, UserInfo, UserUpdate};
