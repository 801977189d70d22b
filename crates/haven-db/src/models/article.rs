//! Article database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the articles table
///
/// Tags live in their own table and are loaded separately.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleModel {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub body: String,
    pub published: bool,
    pub first_published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
