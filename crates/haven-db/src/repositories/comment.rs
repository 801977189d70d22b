//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use haven_core::entities::Comment;
use haven_core::error::DomainError;
use haven_core::traits::{CommentRepository, RepoResult};
use haven_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, article_id, author_id, body, parent_id, created_at, updated_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_parent(
        &self,
        article_id: Snowflake,
        comment_id: Snowflake,
    ) -> RepoResult<Option<Comment>> {
        // Only top-level comments qualify as thread parents
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, article_id, author_id, body, parent_id, created_at, updated_at
            FROM comments
            WHERE id = $1 AND article_id = $2 AND parent_id IS NULL
            ",
        )
        .bind(comment_id.into_inner())
        .bind(article_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_article_author(
        &self,
        article_id: Snowflake,
        author_id: Snowflake,
        child: bool,
    ) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, article_id, author_id, body, parent_id, created_at, updated_at
            FROM comments
            WHERE article_id = $1 AND author_id = $2
              AND (($3 AND parent_id IS NOT NULL) OR (NOT $3 AND parent_id IS NULL))
            ORDER BY created_at DESC
            LIMIT 1
            ",
        )
        .bind(article_id.into_inner())
        .bind(author_id.into_inner())
        .bind(child)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list_by_article(&self, article_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, article_id, author_id, body, parent_id, created_at, updated_at
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at
            ",
        )
        .bind(article_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, article_id, author_id, body, parent_id,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.article_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(&comment.body)
        .bind(comment.parent_id.map(Snowflake::into_inner))
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, comment))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE comments
            SET body = $2, updated_at = $3
            WHERE id = $1
            ",
        )
        .bind(comment.id.into_inner())
        .bind(&comment.body)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_article_author(
        &self,
        article_id: Snowflake,
        author_id: Snowflake,
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM comments WHERE article_id = $1 AND author_id = $2
            ",
        )
        .bind(article_id.into_inner())
        .bind(author_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
