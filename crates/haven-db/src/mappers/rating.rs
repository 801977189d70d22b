//! Rating entity <-> model mapper

use haven_core::entities::{Rating, RatingSummary};
use haven_core::value_objects::Snowflake;

use crate::models::{RatingModel, RatingSummaryModel};

/// Convert RatingModel to Rating entity
impl From<RatingModel> for Rating {
    fn from(model: RatingModel) -> Self {
        Rating {
            article_id: Snowflake::new(model.article_id),
            user_id: Snowflake::new(model.user_id),
            value: model.value,
            review: model.review,
            created_at: model.created_at,
        }
    }
}

/// Convert the aggregate row to a RatingSummary
impl From<RatingSummaryModel> for RatingSummary {
    fn from(model: RatingSummaryModel) -> Self {
        RatingSummary {
            average: model.average.unwrap_or(0.0),
            count: model.count,
        }
    }
}
