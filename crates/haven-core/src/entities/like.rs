//! Like entity - a per-user boolean stance on an article

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Like row: at most one per (article, user)
///
/// `liked == true` is a like, `liked == false` a dislike; no row at all
/// means no opinion. The value is never stored as null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub article_id: Snowflake,
    pub user_id: Snowflake,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Like {
    /// Create a new opinion row
    pub fn new(article_id: Snowflake, user_id: Snowflake, liked: bool) -> Self {
        let now = Utc::now();
        Self {
            article_id,
            user_id,
            liked,
            created_at: now,
            updated_at: now,
        }
    }

    /// Human-readable stance, used in response messages
    pub fn stance(&self) -> &'static str {
        if self.liked {
            "like"
        } else {
            "dislike"
        }
    }

    /// Stance wording for a raw boolean
    pub fn stance_of(liked: bool) -> &'static str {
        if liked {
            "like"
        } else {
            "dislike"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stance_wording() {
        let like = Like::new(Snowflake::new(1), Snowflake::new(2), true);
        assert_eq!(like.stance(), "like");
        let dislike = Like::new(Snowflake::new(1), Snowflake::new(2), false);
        assert_eq!(dislike.stance(), "dislike");
    }
}
