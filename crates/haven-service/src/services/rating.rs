//! Article ratings.

use haven_core::{Article, DomainError, Rating, Snowflake};
use tracing::{info, instrument};

use crate::dto::requests::RateArticleRequest;
use crate::dto::responses::RatingResponse;
use crate::services::context::ServiceContext;
use crate::services::error::{ServiceError, ServiceResult};

pub struct RatingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RatingService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Rate an article once; authors cannot rate their own work. The
    /// response carries the recomputed average and count.
    #[instrument(skip(self, request), fields(user = %user_id))]
    pub async fn rate(
        &self,
        user_id: Snowflake,
        slug: &str,
        request: RateArticleRequest,
    ) -> ServiceResult<RatingResponse> {
        let article = self.find_by_slug(slug).await?;
        if article.is_author(user_id) {
            return Err(DomainError::CannotRateOwnArticle.into());
        }

        if self
            .ctx
            .rating_repo()
            .find(article.id, user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyRated.into());
        }

        let rating = Rating::new(article.id, user_id, request.rating, request.review)?;
        self.ctx.rating_repo().create(&rating).await?;
        let summary = self.ctx.rating_repo().summary(article.id).await?;
        info!(article_id = %article.id, value = rating.value, "article rated");

        Ok(RatingResponse {
            article_id: article.id,
            rating: rating.value,
            review: rating.review,
            average: summary.average,
            count: summary.count,
        })
    }

    async fn find_by_slug(&self, slug: &str) -> ServiceResult<Article> {
        self.ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article", slug))
    }
}
