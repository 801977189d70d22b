//! Profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the profiles table joined with the owning user's
/// username
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub user_id: i64,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub followers: i32,
    pub following: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
