//! Profile entity <-> model mapper

use haven_core::entities::Profile;
use haven_core::value_objects::Snowflake;

use crate::models::ProfileModel;

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            user_id: Snowflake::new(model.user_id),
            username: model.username,
            bio: model.bio,
            image: model.image,
            followers: model.followers,
            following: model.following,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
