//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Article not found: {0}")]
    ArticleNotFound(Snowflake),

    #[error("Comment not found for this article")]
    CommentNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Please check if your email is valid")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Title cannot be more than {max} characters")]
    TitleTooLong { max: usize },

    #[error("Description cannot be more than {max} characters")]
    DescriptionTooLong { max: usize },

    #[error("A comment cannot be more than {max} characters including spaces.")]
    CommentTooLong { max: usize },

    #[error("Rating should be in range of 1 to 5.")]
    RatingOutOfRange(i16),

    #[error("Send favorite as true to favorite an article")]
    FavoriteFlagNotTrue,

    #[error("Send favorite as false to remove a favorite")]
    FavoriteFlagNotFalse,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the author can modify this article")]
    NotArticleAuthor,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("The email address you have used is already registered.")]
    EmailTaken,

    #[error("The username you have used is already taken.")]
    UsernameTaken,

    #[error("You cannot rate your own article")]
    CannotRateOwnArticle,

    #[error("You cannot rate an article twice.")]
    AlreadyRated,

    #[error("You have already provided a like or dislike for this article")]
    OpinionExists,

    #[error("You need to first like or dislike the article")]
    OpinionMissing,

    #[error("You have already added this article to your favorites")]
    AlreadyFavorited,

    #[error("This article is not in your favorites")]
    NotFavorited,

    #[error("You can not follow yourself.")]
    CannotFollowSelf,

    #[error("Already following this user")]
    AlreadyFollowing,

    #[error("You do not follow this user")]
    NotFollowing,

    #[error("The {0} Id(s) do not exist.")]
    UnknownNotificationIds(String),

    // =========================================================================
    // Empty Result Errors (empty-collection-as-error, by design)
    // =========================================================================
    #[error("you have no articles")]
    NoArticles,

    #[error("No articles match your search")]
    NoResultsMatch,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::ArticleNotFound(_) => "UNKNOWN_ARTICLE",
            Self::CommentNotFound => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::TitleTooLong { .. } => "TITLE_TOO_LONG",
            Self::DescriptionTooLong { .. } => "DESCRIPTION_TOO_LONG",
            Self::CommentTooLong { .. } => "COMMENT_TOO_LONG",
            Self::RatingOutOfRange(_) => "RATING_OUT_OF_RANGE",
            Self::FavoriteFlagNotTrue => "FAVORITE_FLAG_NOT_TRUE",
            Self::FavoriteFlagNotFalse => "FAVORITE_FLAG_NOT_FALSE",

            // Authorization
            Self::NotArticleAuthor => "NOT_ARTICLE_AUTHOR",

            // Business Rules
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::CannotRateOwnArticle => "CANNOT_RATE_OWN_ARTICLE",
            Self::AlreadyRated => "ALREADY_RATED",
            Self::OpinionExists => "OPINION_EXISTS",
            Self::OpinionMissing => "OPINION_MISSING",
            Self::AlreadyFavorited => "ALREADY_FAVORITED",
            Self::NotFavorited => "NOT_FAVORITED",
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",
            Self::AlreadyFollowing => "ALREADY_FOLLOWING",
            Self::NotFollowing => "NOT_FOLLOWING",
            Self::UnknownNotificationIds(_) => "UNKNOWN_NOTIFICATION_IDS",

            // Empty Results
            Self::NoArticles => "NO_ARTICLES",
            Self::NoResultsMatch => "NO_RESULTS_MATCH",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ProfileNotFound(_)
                | Self::ArticleNotFound(_)
                | Self::CommentNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidUsername(_)
                | Self::WeakPassword(_)
                | Self::TitleTooLong { .. }
                | Self::DescriptionTooLong { .. }
                | Self::CommentTooLong { .. }
                | Self::RatingOutOfRange(_)
                | Self::FavoriteFlagNotTrue
                | Self::FavoriteFlagNotFalse
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotArticleAuthor)
    }

    /// Check if this is a business rule violation
    ///
    /// Business rule violations surface as 400 responses, matching the
    /// product's contract (not 409).
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::EmailTaken
                | Self::UsernameTaken
                | Self::CannotRateOwnArticle
                | Self::AlreadyRated
                | Self::OpinionExists
                | Self::OpinionMissing
                | Self::AlreadyFavorited
                | Self::NotFavorited
                | Self::CannotFollowSelf
                | Self::AlreadyFollowing
                | Self::NotFollowing
                | Self::UnknownNotificationIds(_)
        )
    }

    /// Check if this is an empty-result-set error
    ///
    /// Listing and search surface "nothing matched" as an error rather than
    /// an empty array. Deliberate product behavior.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoArticles | Self::NoResultsMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ArticleNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_ARTICLE");

        let err = DomainError::AlreadyRated;
        assert_eq!(err.code(), "ALREADY_RATED");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::CommentNotFound.is_not_found());
        assert!(!DomainError::AlreadyRated.is_not_found());
    }

    #[test]
    fn test_business_rules_are_not_validation() {
        assert!(DomainError::OpinionExists.is_business_rule());
        assert!(!DomainError::OpinionExists.is_validation());
        assert!(DomainError::RatingOutOfRange(6).is_validation());
        assert!(!DomainError::RatingOutOfRange(6).is_business_rule());
    }

    #[test]
    fn test_empty_results_are_their_own_kind() {
        assert!(DomainError::NoArticles.is_empty_result());
        assert!(DomainError::NoResultsMatch.is_empty_result());
        assert!(!DomainError::NoArticles.is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::CommentTooLong { max: 8000 };
        assert_eq!(
            err.to_string(),
            "A comment cannot be more than 8000 characters including spaces."
        );

        let err = DomainError::UnknownNotificationIds("[3, 9]".to_string());
        assert_eq!(err.to_string(), "The [3, 9] Id(s) do not exist.");
    }
}
