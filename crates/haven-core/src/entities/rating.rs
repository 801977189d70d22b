//! Rating entity - a 1-5 score a reader gives an article

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Lowest accepted rating value
pub const RATING_MIN: i16 = 1;
/// Highest accepted rating value
pub const RATING_MAX: i16 = 5;

/// Rating: at most one per (article, user), never on the rater's own article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub article_id: Snowflake,
    pub user_id: Snowflake,
    pub value: i16,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    /// Create a new rating; fails if the value is outside [1, 5]
    pub fn new(
        article_id: Snowflake,
        user_id: Snowflake,
        value: i16,
        review: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_value(value)?;
        Ok(Self {
            article_id,
            user_id,
            value,
            review,
            created_at: Utc::now(),
        })
    }

    /// Check a rating value against the accepted range
    pub fn validate_value(value: i16) -> Result<(), DomainError> {
        if (RATING_MIN..=RATING_MAX).contains(&value) {
            Ok(())
        } else {
            Err(DomainError::RatingOutOfRange(value))
        }
    }
}

/// Aggregate view of an article's ratings, recomputed after each new rating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average: f64,
    pub count: i64,
}

impl RatingSummary {
    /// An article with no ratings yet
    pub const fn empty() -> Self {
        Self {
            average: 0.0,
            count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        assert!(Rating::validate_value(1).is_ok());
        assert!(Rating::validate_value(5).is_ok());
        assert!(Rating::validate_value(0).is_err());
        assert!(Rating::validate_value(6).is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = Rating::new(Snowflake::new(1), Snowflake::new(2), 0, None).unwrap_err();
        assert_eq!(err.code(), "RATING_OUT_OF_RANGE");
    }

    #[test]
    fn test_new_accepts_review() {
        let rating = Rating::new(
            Snowflake::new(1),
            Snowflake::new(2),
            4,
            Some("solid read".to_string()),
        )
        .unwrap();
        assert_eq!(rating.value, 4);
        assert_eq!(rating.review.as_deref(), Some("solid read"));
    }
}
