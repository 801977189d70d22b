//! Profile entity - the public face of a user plus its social graph counters

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Profile, 1:1 with a User
///
/// `followers`/`following` are denormalized copies of the follow edge-set
/// cardinality. The repository updates them in the same transaction as the
/// edge itself so they can never drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user_id: Snowflake,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub followers: i32,
    pub following: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create an empty profile for a freshly registered user
    pub fn new(user_id: Snowflake, username: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            username,
            bio: None,
            image: None,
            followers: 0,
            following: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile update (None leaves the field untouched)
    pub fn update(&mut self, bio: Option<String>, image: Option<String>) {
        if let Some(bio) = bio {
            self.bio = Some(bio);
        }
        if let Some(image) = image {
            self.image = Some(image);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_has_zero_counters() {
        let profile = Profile::new(Snowflake::new(7), "writer".to_string());
        assert_eq!(profile.followers, 0);
        assert_eq!(profile.following, 0);
        assert!(profile.bio.is_none());
    }

    #[test]
    fn test_update_leaves_unset_fields() {
        let mut profile = Profile::new(Snowflake::new(7), "writer".to_string());
        profile.update(Some("about me".to_string()), None);
        profile.update(None, Some("https://cdn.example.com/me.png".to_string()));
        assert_eq!(profile.bio.as_deref(), Some("about me"));
        assert_eq!(profile.image.as_deref(), Some("https://cdn.example.com/me.png"));
    }
}
