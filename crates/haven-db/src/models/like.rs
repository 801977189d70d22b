//! Like database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the likes table
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub article_id: i64,
    pub user_id: i64,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
