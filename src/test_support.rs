//! Entity builders shared by unit tests.

use chrono::Utc;

use crate::domain::entities::{
    Address, Album, Category, Comment, Company, Geo, Photo, Post, RoleName, Tag, Todo, User,
};
use crate::domain::principal::Principal;

pub fn user(id: i64, username: &str, roles: Vec<RoleName>) -> User {
    User {
        id,
        first_name: "Ervin".to_string(),
        last_name: "Howell".to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "$argon2id$placeholder".to_string(),
        address: Address {
            street: Some("Victor Plains".to_string()),
            suite: Some("Suite 879".to_string()),
            city: Some("Wisokyburgh".to_string()),
            zipcode: Some("0566-7771".to_string()),
            geo: Geo {
                lat: Some("43.9509".to_string()),
                lng: Some("34.4618".to_string()),
            },
        },
        phone: Some("10-692-6593 x09125".to_string()),
        website: Some("http://erwinhowell.com".to_string()),
        company: Company {
            name: Some("Deckow-Crist".to_string()),
            catch_phrase: Some("Proactive didactic contingency".to_string()),
            bs: Some("synergize scalable supply-chains".to_string()),
        },
        roles,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn principal(id: i64) -> Principal {
    Principal::from(&user(id, "ervin", vec![RoleName::User]))
}

pub fn admin(id: i64) -> Principal {
    Principal::from(&user(id, "leanne", vec![RoleName::User, RoleName::Admin]))
}

pub fn post(id: i64, user_id: i64) -> Post {
    Post {
        id,
        title: "Título de mi post actualizado".to_string(),
        body: "Esto es una prueba de actualización del cuerpo y título de un post.".to_string(),
        user_id,
        category_id: 3,
        tags: vec!["test".to_string(), "new".to_string()],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn comment(id: i64, post_id: i64, user_id: i64) -> Comment {
    Comment {
        id,
        name: "ervin".to_string(),
        email: "ervinh94@yahoo.com".to_string(),
        body: "A thoughtful comment body".to_string(),
        post_id,
        user_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn album(id: i64, user_id: i64) -> Album {
    Album {
        id,
        title: "Album de prueba".to_string(),
        user_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn photo(id: i64, album_id: i64) -> Photo {
    Photo {
        id,
        title: "Photo test".to_string(),
        url: "https://via.placeholder.com/600/92c952".to_string(),
        thumbnail_url: "https://via.placeholder.com/150/92c952".to_string(),
        album_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn todo(id: i64, user_id: i64) -> Todo {
    Todo {
        id,
        title: "Write the release notes".to_string(),
        completed: false,
        user_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn category(id: i64, created_by: i64) -> Category {
    Category {
        id,
        name: "test category".to_string(),
        created_by: Some(created_by),
        updated_by: Some(created_by),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn tag(id: i64, name: &str, created_by: i64) -> Tag {
    Tag {
        id,
        name: name.to_string(),
        created_by: Some(created_by),
        updated_by: Some(created_by),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Mocked repositories for handler tests. Unused mocks fail any call.
#[derive(Default)]
pub struct Mocks {
    pub users: crate::domain::repositories::MockUserRepository,
    pub posts: crate::domain::repositories::MockPostRepository,
    pub comments: crate::domain::repositories::MockCommentRepository,
    pub albums: crate::domain::repositories::MockAlbumRepository,
    pub photos: crate::domain::repositories::MockPhotoRepository,
    pub todos: crate::domain::repositories::MockTodoRepository,
    pub categories: crate::domain::repositories::MockCategoryRepository,
    pub tags: crate::domain::repositories::MockTagRepository,
}

pub const JWT_SECRET: &str = "test-secret-test-secret-test-secret";

impl Mocks {
    pub fn into_state(self) -> crate::state::AppState {
        use std::sync::Arc;

        let repos = crate::state::Repositories {
            users: Arc::new(self.users),
            posts: Arc::new(self.posts),
            comments: Arc::new(self.comments),
            albums: Arc::new(self.albums),
            photos: Arc::new(self.photos),
            todos: Arc::new(self.todos),
            categories: Arc::new(self.categories),
            tags: Arc::new(self.tags),
        };

        crate::state::AppState::new(
            repos,
            crate::infrastructure::security::JwtProvider::new(JWT_SECRET, 3600),
        )
    }

    /// API routes under `/api`, with `principal` pre-attached when given.
    pub fn server(self, principal: Option<Principal>) -> axum_test::TestServer {
        let router = axum::Router::new()
            .nest("/api", crate::api::routes::api_routes())
            .with_state(self.into_state());

        let router = match principal {
            Some(principal) => router.layer(axum::Extension(principal)),
            None => router,
        };

        axum_test::TestServer::new(router).unwrap()
    }
}

pub fn config() -> crate::config::Config {
    crate::config::Config {
        database_url: "postgres://localhost/blog_test".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expiration_seconds: 3600,
        auth_rate_per_second: 1,
        auth_rate_burst: 10,
        db_max_connections: 1,
        db_connect_timeout: 1,
        db_idle_timeout: 1,
        db_max_lifetime: 1,
    }
}
