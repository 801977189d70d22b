//! Article favorites.
//!
//! The request flag must agree with the direction of the call: adding
//! requires `favorite: true`, removing requires `favorite: false`.
//! Removal deletes the row outright.

use haven_core::{Article, DomainError, Favorite, Snowflake};
use tracing::{info, instrument};

use crate::dto::requests::FavoriteRequest;
use crate::dto::responses::FavoriteResponse;
use crate::services::context::ServiceContext;
use crate::services::error::{ServiceError, ServiceResult};

pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(user = %user_id))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        slug: &str,
        request: FavoriteRequest,
    ) -> ServiceResult<FavoriteResponse> {
        if !request.favorite {
            return Err(DomainError::FavoriteFlagNotTrue.into());
        }

        let article = self.find_by_slug(slug).await?;
        if self.ctx.favorite_repo().exists(article.id, user_id).await? {
            return Err(DomainError::AlreadyFavorited.into());
        }

        let favorite = Favorite::new(article.id, user_id);
        self.ctx.favorite_repo().create(&favorite).await?;
        info!(article_id = %article.id, "article favorited");

        Ok(FavoriteResponse {
            article_id: article.id,
            message: "Article added to your favorites".to_string(),
        })
    }

    #[instrument(skip(self, request), fields(user = %user_id))]
    pub async fn delete(
        &self,
        user_id: Snowflake,
        slug: &str,
        request: FavoriteRequest,
    ) -> ServiceResult<FavoriteResponse> {
        if request.favorite {
            return Err(DomainError::FavoriteFlagNotFalse.into());
        }

        let article = self.find_by_slug(slug).await?;
        self.ctx.favorite_repo().delete(article.id, user_id).await?;
        info!(article_id = %article.id, "article unfavorited");

        Ok(FavoriteResponse {
            article_id: article.id,
            message: "Article removed from your favorites".to_string(),
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
