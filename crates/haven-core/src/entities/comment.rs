//! Comment entity - flat comments plus one level of threading

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Maximum comment body length, spaces included
pub const COMMENT_MAX_LEN: usize = 8000;

/// Comment on an article
///
/// `parent_id` present means this is a child comment of a top-level comment
/// on the same article. Threading depth is exactly one: a child comment is
/// never itself a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub article_id: Snowflake,
    pub author_id: Snowflake,
    pub body: String,
    pub parent_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a top-level comment
    pub fn new(
        id: Snowflake,
        article_id: Snowflake,
        author_id: Snowflake,
        body: String,
    ) -> Result<Self, DomainError> {
        Self::validate_body(&body)?;
        let now = Utc::now();
        Ok(Self {
            id,
            article_id,
            author_id,
            body,
            parent_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Create a child comment under a top-level parent
    pub fn new_child(
        id: Snowflake,
        article_id: Snowflake,
        author_id: Snowflake,
        body: String,
        parent_id: Snowflake,
    ) -> Result<Self, DomainError> {
        Self::validate_body(&body)?;
        let now = Utc::now();
        Ok(Self {
            id,
            article_id,
            author_id,
            body,
            parent_id: Some(parent_id),
            created_at: now,
            updated_at: now,
        })
    }

    /// Check a body against the 8000 character limit, spaces included
    pub fn validate_body(body: &str) -> Result<(), DomainError> {
        if body.chars().count() > COMMENT_MAX_LEN {
            return Err(DomainError::CommentTooLong {
                max: COMMENT_MAX_LEN,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn is_child(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Replace the body, re-validating the length
    pub fn edit(&mut self, body: String) -> Result<(), DomainError> {
        Self::validate_body(&body)?;
        self.body = body;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_at_limit_is_accepted() {
        let body = "x".repeat(COMMENT_MAX_LEN);
        assert!(Comment::validate_body(&body).is_ok());
    }

    #[test]
    fn test_body_over_limit_is_rejected() {
        let body = "x".repeat(COMMENT_MAX_LEN + 1);
        assert!(Comment::validate_body(&body).is_err());
    }

    #[test]
    fn test_child_comment_links_parent() {
        let comment = Comment::new_child(
            Snowflake::new(2),
            Snowflake::new(1),
            Snowflake::new(10),
            "agreed".to_string(),
            Snowflake::new(99),
        )
        .unwrap();
        assert!(comment.is_child());
        assert_eq!(comment.parent_id, Some(Snowflake::new(99)));
    }

    #[test]
    fn test_edit_revalidates_length() {
        let mut comment = Comment::new(
            Snowflake::new(2),
            Snowflake::new(1),
            Snowflake::new(10),
            "first".to_string(),
        )
        .unwrap();
        assert!(comment.edit("x".repeat(COMMENT_MAX_LEN + 1)).is_err());
        assert_eq!(comment.body, "first");
    }
}
