//! Notification entity - produced by the publish fanout

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Notification owned by a follower of an article's author
///
/// Title and body are snapshots taken at publish time, not live links to
/// the article. Only the owner can flip `read_status`; rows are never
/// auto-deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Snowflake,
    pub article_id: Snowflake,
    pub title: String,
    pub body: String,
    pub owner_id: Snowflake,
    pub read_status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    /// Create an unread notification snapshotting the article content
    pub fn new(
        id: Snowflake,
        article_id: Snowflake,
        title: String,
        body: String,
        owner_id: Snowflake,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            article_id,
            title,
            body,
            owner_id,
            read_status: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark as read
    pub fn mark_read(&mut self) {
        self.read_status = true;
        self.updated_at = Utc::now();
    }

    #[inline]
    pub fn is_unread(&self) -> bool {
        !self.read_status
    }
}
