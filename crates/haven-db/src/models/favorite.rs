//! Favorite database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the favorites table
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteModel {
    pub article_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
