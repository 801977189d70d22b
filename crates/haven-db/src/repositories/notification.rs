//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use haven_core::entities::Notification;
use haven_core::traits::{NotificationRepository, RepoResult};
use haven_core::value_objects::Snowflake;

use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner_id: Snowflake) -> RepoResult<Vec<Notification>> {
        let results = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, article_id, title, body, owner_id, read_status, created_at, updated_at
            FROM notifications
            WHERE owner_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(owner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Notification::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_unread(&self, owner_id: Snowflake) -> RepoResult<Vec<Notification>> {
        let results = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, article_id, title, body, owner_id, read_status, created_at, updated_at
            FROM notifications
            WHERE owner_id = $1 AND read_status = FALSE
            ORDER BY created_at DESC
            ",
        )
        .bind(owner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Notification::from).collect())
    }

    #[instrument(skip(self))]
    async fn unread_ids(&self, owner_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let results = sqlx::query_scalar::<_, i64>(
            r"
            SELECT id FROM notifications
            WHERE owner_id = $1 AND read_status = FALSE
            ORDER BY created_at DESC
            ",
        )
        .bind(owner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn mark_read(&self, owner_id: Snowflake, ids: &[Snowflake]) -> RepoResult<()> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        sqlx::query(
            r"
            UPDATE notifications
            SET read_status = TRUE, updated_at = NOW()
            WHERE owner_id = $1 AND id = ANY($2)
            ",
        )
        .bind(owner_id.into_inner())
        .bind(&raw_ids)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgNotificationRepository>();
    }
}
