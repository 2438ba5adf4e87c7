//! Post publishing with category checks and tag resolution.

use crate::application::services::permission_denied;
use crate::domain::entities::{NewPost, Post, PostUpdate};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::principal::Principal;
use crate::domain::repositories::{CategoryRepository, PostRepository, TagRepository};
use crate::error::AppError;
use std::sync::Arc;

/// Post content as submitted by a client. Tags are given by name.
#[derive(Debug, Clone)]
pub struct PostData {
    pub title: String,
    pub body: String,
    pub category_id: i64,
    pub tags: Vec<String>,
}

pub struct PostService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            posts,
            categories,
            tags,
        }
    }

    pub async fn get_all_posts(&self, page: PageRequest) -> Result<Page<Post>, AppError> {
        self.posts.list(page).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    pub async fn get_post(&self, id: i64) -> Result<Post, AppError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("Post", "id", id))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    pub async fn get_posts_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> Result<Page<Post>, AppError> {
        self.ensure_category(category_id).await?;
        self.posts.list_by_category(category_id, page).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the tag does not exist.
    pub async fn get_posts_by_tag(
        &self,
        tag_id: i64,
        page: PageRequest,
    ) -> Result<Page<Post>, AppError> {
        if self.tags.find_by_id(tag_id).await?.is_none() {
            return Err(AppError::resource_not_found("Tag", "id", tag_id));
        }
        self.posts.list_by_tag(tag_id, page).await
    }

    /// Publishes a post as the principal.
    ///
    /// Tags that do not exist yet are created on the fly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    pub async fn add_post(&self, data: PostData, principal: &Principal) -> Result<Post, AppError> {
        self.ensure_category(data.category_id).await?;
        let tag_ids = self.resolve_tags(&data.tags, principal).await?;

        let post = self
            .posts
            .create(NewPost {
                title: data.title,
                body: data.body,
                user_id: principal.id,
                category_id: data.category_id,
                tag_ids,
            })
            .await?;

        tracing::info!(post_id = post.id, user_id = principal.id, "Post created");
        Ok(post)
    }

    /// Replaces title, body, category and tags of a post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post or the category does not exist.
    /// Returns [`AppError::Unauthorized`] if the principal may not edit the post.
    pub async fn update_post(
        &self,
        id: i64,
        data: PostData,
        principal: &Principal,
    ) -> Result<Post, AppError> {
        let post = self.get_post(id).await?;
        self.ensure_category(data.category_id).await?;

        if !principal.can_modify(post.user_id) {
            return Err(permission_denied(
                "Post",
                principal,
                "You don't have permission to edit this post",
            ));
        }

        let tag_ids = self.resolve_tags(&data.tags, principal).await?;

        self.posts
            .update(
                id,
                PostUpdate {
                    title: data.title,
                    body: data.body,
                    category_id: data.category_id,
                    tag_ids,
                },
            )
            .await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    /// Returns [`AppError::Unauthorized`] if the principal may not delete the post.
    pub async fn delete_post(&self, id: i64, principal: &Principal) -> Result<(), AppError> {
        let post = self.get_post(id).await?;

        if !principal.can_modify(post.user_id) {
            return Err(permission_denied(
                "Post",
                principal,
                "You don't have permission to delete this post",
            ));
        }

        self.posts.delete(id).await?;
        tracing::info!(post_id = id, deleted_by = principal.id, "Post deleted");

        Ok(())
    }

    async fn ensure_category(&self, category_id: i64) -> Result<(), AppError> {
        match self.categories.find_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::resource_not_found("Category", "id", category_id)),
        }
    }

    /// Maps tag names to ids, creating missing tags. Blank and repeated names are skipped.
    async fn resolve_tags(
        &self,
        names: &[String],
        principal: &Principal,
    ) -> Result<Vec<i64>, AppError> {
        let mut ids = Vec::with_capacity(names.len());

        for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
            let tag = match self.tags.find_by_name(name).await? {
                Some(tag) => tag,
                None => self.tags.create(name, principal.id).await?,
            };

            if !ids.contains(&tag.id) {
                ids.push(tag.id);
            }
        }

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        MockCategoryRepository, MockPostRepository, MockTagRepository,
    };
    use crate::test_support;

    fn post_data(tags: &[&str]) -> PostData {
        PostData {
            title: "Título de mi post actualizado".to_string(),
            body: "Esto es una prueba de actualización del cuerpo y título de un post.".to_string(),
            category_id: 3,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn categories_with(id: i64) -> MockCategoryRepository {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .returning(move |cid| Ok((cid == id).then(|| test_support::category(cid, 1))));
        categories
    }

    fn posts_with(post_id: i64, owner: i64) -> MockPostRepository {
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_by_id()
            .returning(move |id| Ok((id == post_id).then(|| test_support::post(id, owner))));
        posts
    }

    #[tokio::test]
    async fn test_add_post_creates_missing_tags() {
        let mut tags = MockTagRepository::new();
        tags.expect_find_by_name()
            .returning(|name| Ok((name == "test").then(|| test_support::tag(10, "test", 1))));
        tags.expect_create()
            .withf(|name, user_id| name == "new" && *user_id == 2)
            .times(1)
            .returning(|name, user_id| Ok(test_support::tag(11, name, user_id)));

        let mut posts = MockPostRepository::new();
        posts
            .expect_create()
            .withf(|p| p.user_id == 2 && p.tag_ids == vec![10, 11])
            .times(1)
            .returning(|p| Ok(test_support::post(1, p.user_id)));

        let service = PostService::new(Arc::new(posts), Arc::new(categories_with(3)), Arc::new(tags));
        let result = service
            .add_post(post_data(&["test", "new", " test ", ""]), &test_support::principal(2))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_add_post_unknown_category() {
        let mut posts = MockPostRepository::new();
        posts.expect_create().never();

        let service = PostService::new(
            Arc::new(posts),
            Arc::new(categories_with(99)),
            Arc::new(MockTagRepository::new()),
        );
        let err = service
            .add_post(post_data(&[]), &test_support::principal(2))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Category not found with id: '3'");
    }

    #[tokio::test]
    async fn test_update_post_not_found() {
        let service = PostService::new(
            Arc::new(posts_with(1, 2)),
            Arc::new(categories_with(3)),
            Arc::new(MockTagRepository::new()),
        );

        let err = service
            .update_post(20, post_data(&[]), &test_support::principal(2))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Post not found with id: '20'");
    }

    #[tokio::test]
    async fn test_update_post_by_other_user_denied() {
        let mut posts = posts_with(1, 2);
        posts.expect_update().never();

        let service = PostService::new(
            Arc::new(posts),
            Arc::new(categories_with(3)),
            Arc::new(MockTagRepository::new()),
        );

        let err = service
            .update_post(1, post_data(&[]), &test_support::principal(5))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unauthorized { .. }));
        assert_eq!(err.to_string(), "You don't have permission to edit this post");
    }

    #[tokio::test]
    async fn test_update_post_by_admin() {
        let mut posts = posts_with(1, 2);
        posts
            .expect_update()
            .withf(|id, u| *id == 1 && u.category_id == 3)
            .times(1)
            .returning(|id, _| Ok(test_support::post(id, 2)));

        let service = PostService::new(
            Arc::new(posts),
            Arc::new(categories_with(3)),
            Arc::new(MockTagRepository::new()),
        );

        let result = service
            .update_post(1, post_data(&[]), &test_support::admin(9))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_post_denied() {
        let mut posts = posts_with(1, 2);
        posts.expect_delete().never();

        let service = PostService::new(
            Arc::new(posts),
            Arc::new(MockCategoryRepository::new()),
            Arc::new(MockTagRepository::new()),
        );

        let err = service
            .delete_post(1, &test_support::principal(3))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "You don't have permission to delete this post");
    }

    #[tokio::test]
    async fn test_posts_by_unknown_tag() {
        let mut tags = MockTagRepository::new();
        tags.expect_find_by_id().returning(|_| Ok(None));

        let service = PostService::new(
            Arc::new(MockPostRepository::new()),
            Arc::new(MockCategoryRepository::new()),
            Arc::new(tags),
        );

        let err = service
            .get_posts_by_tag(4, PageRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Tag not found with id: '4'");
    }
}
