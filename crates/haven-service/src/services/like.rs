//! Likes and dislikes on articles.
//!
//! An opinion has three distinct verbs: create fails when one exists,
//! update and delete fail when one does not.

use haven_core::{Article, DomainError, Like, Snowflake};
use tracing::{info, instrument};

use crate::dto::requests::OpinionRequest;
use crate::dto::responses::{MessageResponse, OpinionResponse};
use crate::services::context::ServiceContext;
use crate::services::error::{ServiceError, ServiceResult};

pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(user = %user_id))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        slug: &str,
        request: OpinionRequest,
    ) -> ServiceResult<OpinionResponse> {
        let article = self.find_by_slug(slug).await?;
        if self
            .ctx
            .like_repo()
            .find(article.id, user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::OpinionExists.into());
        }

        let like = Like::new(article.id, user_id, request.liked);
        self.ctx.like_repo().create(&like).await?;
        info!(article_id = %article.id, stance = like.stance(), "opinion created");

        Ok(OpinionResponse {
            article_id: article.id,
            stance: like.stance().to_string(),
            message: format!("You have {}d this article", like.stance()),
        })
    }

    #[instrument(skip(self, request), fields(user = %user_id))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        slug: &str,
        request: OpinionRequest,
    ) -> ServiceResult<OpinionResponse> {
        let article = self.find_by_slug(slug).await?;
        self.ctx
            .like_repo()
            .update(article.id, user_id, request.liked)
            .await?;
        let stance = Like::stance_of(request.liked);
        info!(article_id = %article.id, stance, "opinion updated");

        Ok(OpinionResponse {
            article_id: article.id,
            stance: stance.to_string(),
            message: format!("Your opinion is now a {stance}"),
        })
    }

    #[instrument(skip(self), fields(user = %user_id))]
    pub async fn delete(&self, user_id: Snowflake, slug: &str) -> ServiceResult<MessageResponse> {
        let article = self.find_by_slug(slug).await?;
        let like = self
            .ctx
            .like_repo()
            .find(article.id, user_id)
            .await?
            .ok_or(DomainError::OpinionMissing)?;
        self.ctx.like_repo().delete(article.id, user_id).await?;
        info!(article_id = %article.id, stance = like.stance(), "opinion removed");

        Ok(MessageResponse::new(format!(
            "You have removed your {}",
            like.stance()
        )))
    }

    async fn find_by_slug(&self, slug: &str) -> ServiceResult<Article> {
        self.ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article", slug))
    }
}
