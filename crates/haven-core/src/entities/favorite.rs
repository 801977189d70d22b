//! Favorite entity - presence of the row means "favorited"

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Favorite row: at most one per (article, user); deleted on un-favorite,
/// never flagged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub article_id: Snowflake,
    pub user_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(article_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            article_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
