//! Rating database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the ratings table
#[derive(Debug, Clone, FromRow)]
pub struct RatingModel {
    pub article_id: i64,
    pub user_id: i64,
    pub value: i16,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate row produced by the summary query
#[derive(Debug, Clone, FromRow)]
pub struct RatingSummaryModel {
    pub average: Option<f64>,
    pub count: i64,
}
