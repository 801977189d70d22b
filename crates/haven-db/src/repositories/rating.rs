//! PostgreSQL implementation of RatingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use haven_core::entities::{Rating, RatingSummary};
use haven_core::error::DomainError;
use haven_core::traits::{RatingRepository, RepoResult};
use haven_core::value_objects::Snowflake;

use crate::models::{RatingModel, RatingSummaryModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of RatingRepository
#[derive(Clone)]
pub struct PgRatingRepository {
    pool: PgPool,
}

impl PgRatingRepository {
    /// Create a new PgRatingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PgRatingRepository {
    #[instrument(skip(self))]
    async fn find(&self, article_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Rating>> {
        let result = sqlx::query_as::<_, RatingModel>(
            r"
            SELECT article_id, user_id, value, review, created_at
            FROM ratings
            WHERE article_id = $1 AND user_id = $2
            ",
        )
        .bind(article_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Rating::from))
    }

    #[instrument(skip(self, rating))]
    async fn create(&self, rating: &Rating) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO ratings (article_id, user_id, value, review, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(rating.article_id.into_inner())
        .bind(rating.user_id.into_inner())
        .bind(rating.value)
        .bind(&rating.review)
        .bind(rating.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyRated))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn summary(&self, article_id: Snowflake) -> RepoResult<RatingSummary> {
        let result = sqlx::query_as::<_, RatingSummaryModel>(
            r"
            SELECT AVG(value)::DOUBLE PRECISION AS average, COUNT(*) AS count
            FROM ratings
            WHERE article_id = $1
            ",
        )
        .bind(article_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(RatingSummary::from(result))
    }
}
