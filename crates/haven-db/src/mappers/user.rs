//! User entity <-> model mapper

use haven_core::entities::User;
use haven_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            verified: model.verified,
            active: model.active,
            social_id: model.social_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
