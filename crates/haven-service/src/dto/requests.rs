//! Request DTOs with validation rules.

use haven_core::Snowflake;
use serde::Deserialize;
use validator::Validate;

/// New account registration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 5, max = 25, message = "Username must be 5 to 25 characters long"))]
    pub username: String,

    #[validate(email(message = "Please check if your email is valid"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters long"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please check if your email is valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Request a password reset link by email.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Please check if your email is valid"))]
    pub email: String,
}

/// Set a new password from an emailed reset token.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters long"))]
    pub new_password: String,
}

/// Partial update of the authenticated user's account.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Please check if your email is valid"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters long"))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters long"))]
    pub bio: Option<String>,

    #[validate(length(max = 500, message = "Image URL must be at most 500 characters long"))]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1 to 150 characters long"))]
    pub title: String,

    #[validate(length(max = 600, message = "Description must be at most 600 characters long"))]
    pub description: String,

    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateArticleRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1 to 150 characters long"))]
    pub title: Option<String>,

    #[validate(length(max = 600, message = "Description must be at most 600 characters long"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "Body is required"))]
    pub body: Option<String>,

    pub tags: Option<Vec<String>>,

    pub published: Option<bool>,
}

/// Rating values are range-checked by the domain so the exact
/// error message stays in one place.
#[derive(Debug, Clone, Deserialize)]
pub struct RateArticleRequest {
    pub rating: i16,
    pub review: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpinionRequest {
    pub liked: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteRequest {
    pub favorite: bool,
}

/// Raw comment payload as posted by the client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,

    pub parent_id: Option<Snowflake>,
}

impl CommentRequest {
    /// Resolves the optional parent into an explicit payload shape.
    pub fn into_payload(self) -> CommentPayload {
        match self.parent_id {
            Some(parent_id) => CommentPayload::Reply {
                body: self.body,
                parent_id,
            },
            None => CommentPayload::Flat { body: self.body },
        }
    }
}

/// A comment is either top-level or a reply to a top-level comment.
/// The distinction is made once, before any validation runs.
#[derive(Debug, Clone)]
pub enum CommentPayload {
    Flat { body: String },
    Reply { body: String, parent_id: Snowflake },
}

impl CommentPayload {
    pub fn body(&self) -> &str {
        match self {
            Self::Flat { body } | Self::Reply { body, .. } => body,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,

    pub parent_id: Option<Snowflake>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MarkReadRequest {
    #[validate(length(min = 1, message = "At least one notification id is required"))]
    pub ids: Vec<Snowflake>,
}

/// Search filters; at least one must be present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchArticlesRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub tag: Option<String>,
}
