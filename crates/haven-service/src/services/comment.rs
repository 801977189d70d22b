//! Comments with one level of threading.
//!
//! A reply must point at a top-level comment on the same article;
//! replies to replies are rejected. Updates and deletes identify the
//! target by article, author and whether the payload names a parent.

use haven_core::{Article, Comment, DomainError, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::requests::{CommentPayload, CommentRequest, UpdateCommentRequest};
use crate::dto::responses::{CommentListResponse, CommentResponse, MessageResponse};
use crate::services::context::ServiceContext;
use crate::services::error::{ServiceError, ServiceResult};

pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(user = %user_id))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        slug: &str,
        request: CommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;
        let article = self.find_by_slug(slug).await?;

        let comment = match request.into_payload() {
            CommentPayload::Flat { body } => {
                Comment::new(self.ctx.next_id(), article.id, user_id, body)?
            }
            CommentPayload::Reply { body, parent_id } => {
                let parent = self
                    .ctx
                    .comment_repo()
                    .find_parent(article.id, parent_id)
                    .await?
                    .ok_or(DomainError::CommentNotFound)?;
                Comment::new_child(self.ctx.next_id(), article.id, user_id, body, parent.id)?
            }
        };

        self.ctx.comment_repo().create(&comment).await?;
        info!(article_id = %article.id, comment_id = %comment.id, child = comment.is_child(), "comment created");

        Ok(CommentResponse::from(&comment))
    }

    #[instrument(skip(self))]
    pub async fn list(&self, slug: &str) -> ServiceResult<CommentListResponse> {
        let article = self.find_by_slug(slug).await?;
        let comments = self.ctx.comment_repo().list_by_article(article.id).await?;
        let responses: Vec<CommentResponse> = comments.iter().map(CommentResponse::from).collect();
        let count = responses.len();
        Ok(CommentListResponse {
            comments: responses,
            count,
        })
    }

    /// Edit the caller's comment on an article. Naming a parent selects
    /// the threaded comment instead of the top-level one.
    #[instrument(skip(self, request), fields(user = %user_id))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        slug: &str,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;
        let article = self.find_by_slug(slug).await?;

        let child = request.parent_id.is_some();
        let mut comment = self
            .ctx
            .comment_repo()
            .find_by_article_author(article.id, user_id, child)
            .await?
            .ok_or(DomainError::CommentNotFound)?;

        comment.edit(request.body)?;
        self.ctx.comment_repo().update(&comment).await?;
        info!(article_id = %article.id, comment_id = %comment.id, "comment updated");

        Ok(CommentResponse::from(&comment))
    }

    /// Remove all of the caller's comments on an article.
    #[instrument(skip(self), fields(user = %user_id))]
    pub async fn delete(&self, user_id: Snowflake, slug: &str) -> ServiceResult<MessageResponse> {
        let article = self.find_by_slug(slug).await?;
        let deleted = self
            .ctx
            .comment_repo()
            .delete_by_article_author(article.id, user_id)
            .await?;
        if deleted == 0 {
            return Err(DomainError::CommentNotFound.into());
        }
        info!(article_id = %article.id, deleted, "comments deleted");

        Ok(MessageResponse::new(format!("Deleted {deleted} comment(s)")))
    }

    async fn find_by_slug(&self, slug: &str) -> ServiceResult<Article> {
        self.ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article", slug))
    }
}
