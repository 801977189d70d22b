//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub verified: bool,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<String>,
    pub published: bool,
}

impl CreateArticleRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Article {suffix}"),
            description: "A test article".to_string(),
            body: "Body of the test article.".to_string(),
            tags: vec!["testing".to_string()],
            published: false,
        }
    }

    pub fn published() -> Self {
        Self {
            published: true,
            ..Self::unique()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ArticleResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub author: String,
    pub published: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleResponse>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub followers: i32,
    pub following: i32,
}

#[derive(Debug, Deserialize)]
pub struct FollowersResponse {
    pub followers: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RatingResponse {
    pub article_id: String,
    pub rating: i16,
    pub average: f64,
    pub count: i64,
}

#[derive(Debug, Deserialize)]
pub struct OpinionResponse {
    pub article_id: String,
    pub stance: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub article_id: String,
    pub body: String,
    pub parent_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    pub article_id: String,
    pub title: String,
    pub read_status: bool,
}

#[derive(Debug, Deserialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationResponse>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
