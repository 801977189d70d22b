//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use haven_core::entities::Like;
use haven_core::error::DomainError;
use haven_core::traits::{LikeRepository, RepoResult};
use haven_core::value_objects::Snowflake;

use crate::models::LikeModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn find(&self, article_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Like>> {
        let result = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT article_id, user_id, liked, created_at, updated_at
            FROM likes
            WHERE article_id = $1 AND user_id = $2
            ",
        )
        .bind(article_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Like::from))
    }

    #[instrument(skip(self, like))]
    async fn create(&self, like: &Like) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO likes (article_id, user_id, liked, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(like.article_id.into_inner())
        .bind(like.user_id.into_inner())
        .bind(like.liked)
        .bind(like.created_at)
        .bind(like.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::OpinionExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        article_id: Snowflake,
        user_id: Snowflake,
        liked: bool,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE likes
            SET liked = $3, updated_at = NOW()
            WHERE article_id = $1 AND user_id = $2
            ",
        )
        .bind(article_id.into_inner())
        .bind(user_id.into_inner())
        .bind(liked)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::OpinionMissing);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, article_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM likes WHERE article_id = $1 AND user_id = $2
            ",
        )
        .bind(article_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::OpinionMissing);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgLikeRepository>();
    }
}
