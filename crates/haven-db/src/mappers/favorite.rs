//! Favorite entity <-> model mapper

use haven_core::entities::Favorite;
use haven_core::value_objects::Snowflake;

use crate::models::FavoriteModel;

/// Convert FavoriteModel to Favorite entity
impl From<FavoriteModel> for Favorite {
    fn from(model: FavoriteModel) -> Self {
        Favorite {
            article_id: Snowflake::new(model.article_id),
            user_id: Snowflake::new(model.user_id),
            created_at: model.created_at,
        }
    }
}
