//! User entity - a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User account
///
/// Credentials live in the database layer; the entity only carries the
/// identity attributes the rest of the domain needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub verified: bool,
    pub active: bool,
    /// Identifier handed back by a social-login provider, when used
    pub social_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new unverified, active User
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            verified: false,
            active: true,
            social_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the account as verified
    pub fn verify(&mut self) {
        self.verified = true;
        self.updated_at = Utc::now();
    }

    /// Deactivate the account (accounts are never hard-deleted)
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }

    #[inline]
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_unverified_and_active() {
        let user = User::new(
            Snowflake::new(1),
            "writer".to_string(),
            "writer@example.com".to_string(),
        );
        assert!(!user.is_verified());
        assert!(user.is_active());
        assert!(user.social_id.is_none());
    }

    #[test]
    fn test_verify() {
        let mut user = User::new(
            Snowflake::new(1),
            "writer".to_string(),
            "writer@example.com".to_string(),
        );
        user.verify();
        assert!(user.is_verified());
    }
}
