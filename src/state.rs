//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AlbumService, AuthService, CategoryService, CommentService, PhotoService, PostService,
    TagService, TodoService, UserService,
};
use crate::domain::repositories::{
    AlbumRepository, CategoryRepository, CommentRepository, PhotoRepository, PostRepository,
    TagRepository, TodoRepository, UserRepository,
};
use crate::infrastructure::persistence::{
    PgAlbumRepository, PgCategoryRepository, PgCommentRepository, PgPhotoRepository,
    PgPostRepository, PgTagRepository, PgTodoRepository, PgUserRepository,
};
use crate::infrastructure::security::JwtProvider;

/// One implementation of every repository trait.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub albums: Arc<dyn AlbumRepository>,
    pub photos: Arc<dyn PhotoRepository>,
    pub todos: Arc<dyn TodoRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub tags: Arc<dyn TagRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            posts: Arc::new(PgPostRepository::new(pool.clone())),
            comments: Arc::new(PgCommentRepository::new(pool.clone())),
            albums: Arc::new(PgAlbumRepository::new(pool.clone())),
            photos: Arc::new(PgPhotoRepository::new(pool.clone())),
            todos: Arc::new(PgTodoRepository::new(pool.clone())),
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            tags: Arc::new(PgTagRepository::new(pool)),
        }
    }
}

/// Application state shared across all request handlers.
///
/// Cloned for each request (cheap due to `Arc` wrappers).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub post_service: Arc<PostService>,
    pub comment_service: Arc<CommentService>,
    pub album_service: Arc<AlbumService>,
    pub photo_service: Arc<PhotoService>,
    pub todo_service: Arc<TodoService>,
    pub category_service: Arc<CategoryService>,
    pub tag_service: Arc<TagService>,
}

impl AppState {
    /// Wires every service to the given repositories.
    pub fn new(repos: Repositories, jwt: JwtProvider) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(repos.users.clone(), jwt)),
            user_service: Arc::new(UserService::new(
                repos.users.clone(),
                repos.posts.clone(),
                repos.albums.clone(),
            )),
            post_service: Arc::new(PostService::new(
                repos.posts.clone(),
                repos.categories.clone(),
                repos.tags.clone(),
            )),
            comment_service: Arc::new(CommentService::new(
                repos.comments.clone(),
                repos.posts.clone(),
            )),
            album_service: Arc::new(AlbumService::new(repos.albums.clone())),
            photo_service: Arc::new(PhotoService::new(repos.photos, repos.albums)),
            todo_service: Arc::new(TodoService::new(repos.todos)),
            category_service: Arc::new(CategoryService::new(repos.categories)),
            tag_service: Arc::new(TagService::new(repos.tags)),
        }
    }
}
