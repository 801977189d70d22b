//! Response DTOs returned by the service layer.

use chrono::{DateTime, Utc};
use haven_core::Snowflake;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub followers: i32,
    pub following: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FollowersResponse {
    pub followers: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleResponse {
    pub id: Snowflake,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub author: String,
    pub published: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleResponse>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingResponse {
    pub article_id: Snowflake,
    pub rating: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    pub average: f64,
    pub count: i64,
}

/// The stance field is "like" or "dislike", mirroring the stored flag.
#[derive(Debug, Clone, Serialize)]
pub struct OpinionResponse {
    pub article_id: Snowflake,
    pub stance: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteResponse {
    pub article_id: Snowflake,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: Snowflake,
    pub article_id: Snowflake,
    pub author: Snowflake,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: Snowflake,
    pub article_id: Snowflake,
    pub title: String,
    pub body: String,
    pub read_status: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationResponse>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkReadResponse {
    pub marked: Vec<Snowflake>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
