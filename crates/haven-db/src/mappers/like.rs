//! Like entity <-> model mapper

use haven_core::entities::Like;
use haven_core::value_objects::Snowflake;

use crate::models::LikeModel;

/// Convert LikeModel to Like entity
impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            article_id: Snowflake::new(model.article_id),
            user_id: Snowflake::new(model.user_id),
            liked: model.liked,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
