//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

/// Register a fresh user and return the register request plus tokens
async fn register_user(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/users", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Create a published article and return its slug
async fn publish_article(server: &TestServer, token: &str) -> ArticleResponse {
    let request = CreateArticleRequest::published();
    let response = server
        .post_auth("/api/v1/articles", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert!(!auth.user.verified);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/v1/users", &request).await.unwrap();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.error.message,
        "The email address you have used is already registered."
    );
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "lowercaseonly".to_string();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_short_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.username = "abc".to_string();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/users/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.username, register_req.username);
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let response = server
        .post(
            "/api/v1/users/login",
            &json!({ "email": register_req.email, "password": "WrongPass999" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .post(
            "/api/v1/users/refresh",
            &json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.access_token.is_empty());
}

#[tokio::test]
async fn test_forgot_password_unknown_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/users/password/forgot",
            &json!({ "email": "nobody@example.com" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_forgot_password_sends_link_message() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let response = server
        .post(
            "/api/v1/users/password/forgot",
            &json!({ "email": register_req.email }),
        )
        .await
        .unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.message.contains("password reset link has been sent"));
}

#[tokio::test]
async fn test_reset_password_changes_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register_user(&server).await;

    // Mint the reset token the same way the emailed link does
    let config = integration_tests::test_config().unwrap();
    let jwt = haven_common::JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    );
    let user_id = haven_core::Snowflake::parse(&auth.user.id).unwrap();
    let token = jwt.generate_reset_token(user_id).unwrap();

    let response = server
        .post(
            &format!("/api/v1/users/password/reset/{token}"),
            &json!({ "new_password": "BrandNew456" }),
        )
        .await
        .unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Password has been successfully reset");

    // The old password no longer works, the new one does
    let response = server
        .post(
            "/api/v1/users/login",
            &json!({ "email": register_req.email, "password": register_req.password }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post(
            "/api/v1/users/login",
            &json!({ "email": register_req.email, "password": "BrandNew456" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_reset_password_rejects_bad_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    // An access token is not a reset token
    let response = server
        .post(
            &format!("/api/v1/users/password/reset/{}", auth.access_token),
            &json!({ "new_password": "BrandNew456" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/user").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let response = server
        .get(&format!("/api/v1/profiles/{}", register_req.username))
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.username, register_req.username);
    assert_eq!(profile.followers, 0);
}

#[tokio::test]
async fn test_follow_updates_both_counters() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (follower_req, follower_auth) = register_user(&server).await;
    let (followee_req, _) = register_user(&server).await;

    let response = server
        .post_auth(
            &format!("/api/v1/profiles/{}/follow", followee_req.username),
            &follower_auth.access_token,
            &json!({}),
        )
        .await
        .unwrap();
    let followee: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(followee.followers, 1);

    let response = server
        .get(&format!("/api/v1/profiles/{}", follower_req.username))
        .await
        .unwrap();
    let follower: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(follower.following, 1);
}

#[tokio::test]
async fn test_cannot_follow_self() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register_user(&server).await;

    let response = server
        .post_auth(
            &format!("/api/v1/profiles/{}/follow", register_req.username),
            &auth.access_token,
            &json!({}),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.message, "You can not follow yourself.");
}

#[tokio::test]
async fn test_list_followers_by_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (follower_req, follower_auth) = register_user(&server).await;
    let (followee_req, followee_auth) = register_user(&server).await;

    let response = server
        .post_auth(
            &format!("/api/v1/profiles/{}/follow", followee_req.username),
            &follower_auth.access_token,
            &json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Any authenticated user can list another profile's followers
    let response = server
        .get_auth(
            &format!("/api/v1/profiles/{}/followers", followee_req.username),
            &followee_auth.access_token,
        )
        .await
        .unwrap();
    let body: FollowersResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.count, 1);
    assert!(body.followers.contains(&follower_req.username));

    let response = server
        .get_auth(
            "/api/v1/profiles/no_such_user_at_all/followers",
            &followee_auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Article Tests
// ============================================================================

#[tokio::test]
async fn test_create_article_mints_slug() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = CreateArticleRequest::unique();
    let response = server
        .post_auth("/api/v1/articles", &auth.access_token, &request)
        .await
        .unwrap();
    let article: ArticleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(article.slug.starts_with("test-article-"));
    assert!(!article.published);
    assert_eq!(article.tags, vec!["testing"]);
}

#[tokio::test]
async fn test_slug_survives_title_change() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let article = publish_article(&server, &auth.access_token).await;

    let response = server
        .patch_auth(
            &format!("/api/v1/articles/{}", article.slug),
            &auth.access_token,
            &json!({ "title": "A Completely New Title" }),
        )
        .await
        .unwrap();
    let updated: ArticleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.title, "A Completely New Title");
    assert_eq!(updated.slug, article.slug);
}

#[tokio::test]
async fn test_only_author_can_update() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author_auth) = register_user(&server).await;
    let (_, other_auth) = register_user(&server).await;
    let article = publish_article(&server, &author_auth.access_token).await;

    let response = server
        .patch_auth(
            &format!("/api/v1/articles/{}", article.slug),
            &other_auth.access_token,
            &json!({ "title": "Hijacked" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_own_articles_empty_is_error() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .get_auth("/api/v1/articles/mine", &auth.access_token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.message, "you have no articles");
}

#[tokio::test]
async fn test_search_no_match_is_error() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/articles/search?title=zxqv-nothing-matches-this")
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.message, "No articles match your search");
}

#[tokio::test]
async fn test_search_by_tag() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let suffix = unique_suffix();
    let tag = format!("searchtag{suffix}");
    let mut request = CreateArticleRequest::published();
    request.tags = vec![tag.clone()];
    let response = server
        .post_auth("/api/v1/articles", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/articles/search?tag={tag}"))
        .await
        .unwrap();
    let list: ArticleListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.count, 1);
    assert!(list.articles[0].tags.contains(&tag));
}

// ============================================================================
// Rating Tests
// ============================================================================

#[tokio::test]
async fn test_rating_boundaries() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author_auth) = register_user(&server).await;
    let (_, reader_auth) = register_user(&server).await;
    let article = publish_article(&server, &author_auth.access_token).await;
    let path = format!("/api/v1/articles/{}/rate", article.slug);

    // Out of range on both sides
    for value in [0, 6] {
        let response = server
            .post_auth(&path, &reader_auth.access_token, &json!({ "rating": value }))
            .await
            .unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.error.message, "Rating should be in range of 1 to 5.");
    }

    let response = server
        .post_auth(&path, &reader_auth.access_token, &json!({ "rating": 5 }))
        .await
        .unwrap();
    let rating: RatingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(rating.rating, 5);
    assert!((rating.average - 5.0).abs() < f64::EPSILON);
    assert_eq!(rating.count, 1);
}

#[tokio::test]
async fn test_cannot_rate_own_article() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let article = publish_article(&server, &auth.access_token).await;

    let response = server
        .post_auth(
            &format!("/api/v1/articles/{}/rate", article.slug),
            &auth.access_token,
            &json!({ "rating": 3 }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_cannot_rate_twice() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author_auth) = register_user(&server).await;
    let (_, reader_auth) = register_user(&server).await;
    let article = publish_article(&server, &author_auth.access_token).await;
    let path = format!("/api/v1/articles/{}/rate", article.slug);

    let response = server
        .post_auth(&path, &reader_auth.access_token, &json!({ "rating": 4 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(&path, &reader_auth.access_token, &json!({ "rating": 2 }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.message, "You cannot rate an article twice.");
}

// ============================================================================
// Like/Dislike Tests
// ============================================================================

#[tokio::test]
async fn test_opinion_verb_ordering() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author_auth) = register_user(&server).await;
    let (_, reader_auth) = register_user(&server).await;
    let article = publish_article(&server, &author_auth.access_token).await;
    let path = format!("/api/v1/articles/{}/like", article.slug);

    // Update before create fails
    let response = server
        .patch_auth(&path, &reader_auth.access_token, &json!({ "liked": true }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.error.message,
        "You need to first like or dislike the article"
    );

    // Create
    let response = server
        .post_auth(&path, &reader_auth.access_token, &json!({ "liked": true }))
        .await
        .unwrap();
    let opinion: OpinionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(opinion.stance, "like");

    // Second create fails
    let response = server
        .post_auth(&path, &reader_auth.access_token, &json!({ "liked": false }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.error.message,
        "You have already provided a like or dislike for this article"
    );

    // Update flips the stance
    let response = server
        .patch_auth(&path, &reader_auth.access_token, &json!({ "liked": false }))
        .await
        .unwrap();
    let opinion: OpinionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(opinion.stance, "dislike");

    // Delete, then delete again fails
    let response = server
        .delete_auth(&path, &reader_auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&path, &reader_auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Favorite Tests
// ============================================================================

#[tokio::test]
async fn test_favorite_flag_directions() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author_auth) = register_user(&server).await;
    let (_, reader_auth) = register_user(&server).await;
    let article = publish_article(&server, &author_auth.access_token).await;
    let path = format!("/api/v1/articles/{}/favorite", article.slug);

    // Adding with favorite=false is rejected
    let response = server
        .post_auth(&path, &reader_auth.access_token, &json!({ "favorite": false }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.error.message,
        "Send favorite as true to favorite an article"
    );

    // Add
    let response = server
        .post_auth(&path, &reader_auth.access_token, &json!({ "favorite": true }))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Adding twice is rejected
    let response = server
        .post_auth(&path, &reader_auth.access_token, &json!({ "favorite": true }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.error.message,
        "You have already added this article to your favorites"
    );

    // Remove with favorite=false
    let response = server
        .delete_auth_json(&path, &reader_auth.access_token, &json!({ "favorite": false }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Removing again is rejected
    let response = server
        .delete_auth_json(&path, &reader_auth.access_token, &json!({ "favorite": false }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.message, "This article is not in your favorites");
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_threading() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author_auth) = register_user(&server).await;
    let (_, reader_auth) = register_user(&server).await;
    let article = publish_article(&server, &author_auth.access_token).await;
    let path = format!("/api/v1/articles/{}/comments", article.slug);

    // Top-level comment
    let response = server
        .post_auth(&path, &author_auth.access_token, &json!({ "body": "First!" }))
        .await
        .unwrap();
    let top: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(top.parent_id.is_none());

    // Reply to it
    let response = server
        .post_auth(
            &path,
            &reader_auth.access_token,
            &json!({ "body": "A reply", "parent_id": top.id }),
        )
        .await
        .unwrap();
    let reply: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.parent_id.as_deref(), Some(top.id.as_str()));

    // Reply to the reply is rejected
    let response = server
        .post_auth(
            &path,
            &author_auth.access_token,
            &json!({ "body": "Too deep", "parent_id": reply.id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Listing returns both, oldest first
    let response = server.get(&path).await.unwrap();
    let list: CommentListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.count, 2);
    assert_eq!(list.comments[0].body, "First!");
}

#[tokio::test]
async fn test_comment_length_limit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let article = publish_article(&server, &auth.access_token).await;
    let path = format!("/api/v1/articles/{}/comments", article.slug);

    // Exactly 8000 characters is accepted
    let response = server
        .post_auth(&path, &auth.access_token, &json!({ "body": "x".repeat(8000) }))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // 8001 is rejected
    let response = server
        .post_auth(&path, &auth.access_token, &json!({ "body": "x".repeat(8001) }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_publish_fanout_end_to_end() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (author_req, author_auth) = register_user(&server).await;
    let (_, follower_auth) = register_user(&server).await;

    // Follower follows the author
    let response = server
        .post_auth(
            &format!("/api/v1/profiles/{}/follow", author_req.username),
            &follower_auth.access_token,
            &json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Author creates a draft, then publishes it
    let request = CreateArticleRequest::unique();
    let response = server
        .post_auth("/api/v1/articles", &author_auth.access_token, &request)
        .await
        .unwrap();
    let article: ArticleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/articles/{}", article.slug),
            &author_auth.access_token,
            &json!({ "published": true }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Follower got exactly one unread notification for this article
    let response = server
        .get_auth("/api/v1/notifications/unread", &follower_auth.access_token)
        .await
        .unwrap();
    let list: NotificationListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let matching: Vec<_> = list
        .notifications
        .iter()
        .filter(|n| n.article_id == article.id)
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].title, request.title);
    assert!(!matching[0].read_status);

    let notification_id = matching[0].id.clone();

    // Republishing does not fan out again
    let response = server
        .patch_auth(
            &format!("/api/v1/articles/{}", article.slug),
            &author_auth.access_token,
            &json!({ "published": false }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = server
        .patch_auth(
            &format!("/api/v1/articles/{}", article.slug),
            &author_auth.access_token,
            &json!({ "published": true }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/v1/notifications/unread", &follower_auth.access_token)
        .await
        .unwrap();
    let list: NotificationListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        list.notifications
            .iter()
            .filter(|n| n.article_id == article.id)
            .count(),
        1
    );

    // Mark it read
    let response = server
        .post_auth(
            "/api/v1/notifications/read",
            &follower_auth.access_token,
            &json!({ "ids": [notification_id] }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Marking an unknown id fails with the offending ids in the message
    let response = server
        .post_auth(
            "/api/v1/notifications/read",
            &follower_auth.access_token,
            &json!({ "ids": ["999999999999"] }),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body.error.message.contains("do not exist"));
}
