//! PostgreSQL implementation of ArticleRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use haven_core::entities::{Article, Notification};
use haven_core::error::DomainError;
use haven_core::traits::{ArticleFilter, ArticleRepository, RepoResult};
use haven_core::value_objects::Snowflake;

use crate::mappers::article_with_tags;
use crate::models::ArticleModel;

use super::error::{article_not_found, map_db_error};

const ARTICLE_COLUMNS: &str = "id, author_id, title, slug, description, body, published, \
                               first_published_at, created_at, updated_at";

/// PostgreSQL implementation of ArticleRepository
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    /// Create a new PgArticleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the tag set for one article
    async fn load_tags(&self, article_id: i64) -> Result<Vec<String>, DomainError> {
        let tags = sqlx::query_scalar::<_, String>(
            r"
            SELECT tag FROM article_tags WHERE article_id = $1 ORDER BY tag
            ",
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(tags)
    }

    /// Attach tag sets to a batch of article rows
    async fn with_tags(&self, models: Vec<ArticleModel>) -> RepoResult<Vec<Article>> {
        let mut articles = Vec::with_capacity(models.len());
        for model in models {
            let tags = self.load_tags(model.id).await?;
            articles.push(article_with_tags(model, tags));
        }
        Ok(articles)
    }

    /// Replace the tag set of an article inside an open transaction
    async fn replace_tags(
        tx: &mut Transaction<'_, Postgres>,
        article_id: i64,
        tags: &[String],
    ) -> Result<(), DomainError> {
        sqlx::query(
            r"
            DELETE FROM article_tags WHERE article_id = $1
            ",
        )
        .bind(article_id)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        for tag in tags {
            sqlx::query(
                r"
                INSERT INTO article_tags (article_id, tag)
                VALUES ($1, $2)
                ON CONFLICT (article_id, tag) DO NOTHING
                ",
            )
            .bind(article_id)
            .bind(tag)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;
        }

        Ok(())
    }

    /// Run the article row part of an update inside an open transaction
    async fn update_row(
        tx: &mut Transaction<'_, Postgres>,
        article: &Article,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r"
            UPDATE articles
            SET title = $2, description = $3, body = $4, published = $5,
                first_published_at = $6, updated_at = $7
            WHERE id = $1
            ",
        )
        .bind(article.id.into_inner())
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.body)
        .bind(article.published)
        .bind(article.first_published_at)
        .bind(article.updated_at)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(article_not_found(article.id));
        }

        Self::replace_tags(tx, article.id.into_inner(), &article.tags).await
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>> {
        let result = sqlx::query_as::<_, ArticleModel>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let tags = self.load_tags(model.id).await?;
                Ok(Some(article_with_tags(model, tags)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Article>> {
        let result = sqlx::query_as::<_, ArticleModel>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let tags = self.load_tags(model.id).await?;
                Ok(Some(article_with_tags(model, tags)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, article))]
    async fn create(&self, article: &Article) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO articles (id, author_id, title, slug, description, body, published,
                                  first_published_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(article.id.into_inner())
        .bind(article.author_id.into_inner())
        .bind(&article.title)
        .bind(article.slug.as_str())
        .bind(&article.description)
        .bind(&article.body)
        .bind(article.published)
        .bind(article.first_published_at)
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        Self::replace_tags(&mut tx, article.id.into_inner(), &article.tags).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, article))]
    async fn update(&self, article: &Article) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        Self::update_row(&mut tx, article).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, article, notifications), fields(count = notifications.len()))]
    async fn update_with_notifications(
        &self,
        article: &Article,
        notifications: &[Notification],
    ) -> RepoResult<()> {
        // Publish flip and its fanout rows must land together; a crash in
        // between must never leave one without the other.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        Self::update_row(&mut tx, article).await?;

        for notification in notifications {
            sqlx::query(
                r"
                INSERT INTO notifications (id, article_id, title, body, owner_id,
                                           read_status, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ",
            )
            .bind(notification.id.into_inner())
            .bind(notification.article_id.into_inner())
            .bind(&notification.title)
            .bind(&notification.body)
            .bind(notification.owner_id.into_inner())
            .bind(notification.read_status)
            .bind(notification.created_at)
            .bind(notification.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM articles WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(article_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_published(&self, limit: i64, offset: i64) -> RepoResult<Vec<Article>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, ArticleModel>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE published = TRUE
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.with_tags(results).await
    }

    #[instrument(skip(self))]
    async fn list_by_author(
        &self,
        author_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Article>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, ArticleModel>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE author_id = $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(author_id.into_inner())
        .bind(limit)
        .bind(offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.with_tags(results).await
    }

    #[instrument(skip(self))]
    async fn search(&self, filter: &ArticleFilter) -> RepoResult<Vec<Article>> {
        let results = sqlx::query_as::<_, ArticleModel>(
            r"
            SELECT DISTINCT a.id, a.author_id, a.title, a.slug, a.description, a.body,
                   a.published, a.first_published_at, a.created_at, a.updated_at
            FROM articles a
            JOIN users u ON u.id = a.author_id
            LEFT JOIN article_tags t ON t.article_id = a.id
            WHERE a.published = TRUE
              AND ($1::TEXT IS NULL OR a.title ILIKE '%' || $1 || '%' ESCAPE '\')
              AND ($2::TEXT IS NULL OR u.username ILIKE '%' || $2 || '%' ESCAPE '\')
              AND ($3::TEXT IS NULL OR t.tag = $3)
            ORDER BY a.created_at DESC
            ",
        )
        .bind(filter.title.as_deref().map(escape_like))
        .bind(filter.author.as_deref().map(escape_like))
        .bind(&filter.tag)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.with_tags(results).await
    }
}

/// Escape LIKE metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgArticleRepository>();
    }

    #[test]
    fn test_escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("50% off"), "50\\% off");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
