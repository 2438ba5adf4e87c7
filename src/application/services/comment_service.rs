//! Comments scoped to a post.

use crate::application::services::permission_denied;
use crate::domain::entities::{Comment, NewComment};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::principal::Principal;
use crate::domain::repositories::{CommentRepository, PostRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for comments. Every operation first checks that the post exists
/// and that the comment belongs to it.
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    pub async fn get_all_comments(
        &self,
        post_id: i64,
        page: PageRequest,
    ) -> Result<Page<Comment>, AppError> {
        self.ensure_post(post_id).await?;
        self.comments.list_by_post(post_id, page).await
    }

    /// Adds a comment signed with the principal's username and email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    pub async fn add_comment(
        &self,
        post_id: i64,
        body: String,
        principal: &Principal,
    ) -> Result<Comment, AppError> {
        self.ensure_post(post_id).await?;

        self.comments
            .create(NewComment {
                name: principal.username.clone(),
                email: principal.email.clone(),
                body,
                post_id,
                user_id: principal.id,
            })
            .await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post or the comment does not exist.
    /// Returns [`AppError::Validation`] if the comment belongs to another post.
    pub async fn get_comment(&self, post_id: i64, id: i64) -> Result<Comment, AppError> {
        self.ensure_post(post_id).await?;

        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("Comment", "id", id))?;

        if !comment.belongs_to(post_id) {
            return Err(AppError::bad_request(
                "Comment does not belong to post",
                json!({ "post_id": post_id, "comment_id": id }),
            ));
        }

        Ok(comment)
    }

    /// # Errors
    ///
    /// As [`Self::get_comment`], plus [`AppError::Unauthorized`] if the
    /// principal may not edit the comment.
    pub async fn update_comment(
        &self,
        post_id: i64,
        id: i64,
        body: String,
        principal: &Principal,
    ) -> Result<Comment, AppError> {
        let comment = self.get_comment(post_id, id).await?;

        if !principal.can_modify(comment.user_id) {
            return Err(permission_denied(
                "Comment",
                principal,
                "You don't have permission to update this comment",
            ));
        }

        self.comments.update(id, &body).await
    }

    /// # Errors
    ///
    /// As [`Self::get_comment`], plus [`AppError::Unauthorized`] if the
    /// principal may not delete the comment.
    pub async fn delete_comment(
        &self,
        post_id: i64,
        id: i64,
        principal: &Principal,
    ) -> Result<(), AppError> {
        let comment = self.get_comment(post_id, id).await?;

        if !principal.can_modify(comment.user_id) {
            return Err(permission_denied(
                "Comment",
                principal,
                "You don't have permission to delete this comment",
            ));
        }

        self.comments.delete(id).await
    }

    async fn ensure_post(&self, post_id: i64) -> Result<(), AppError> {
        match self.posts.find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::resource_not_found("Post", "id", post_id)),
        }
    }
}
