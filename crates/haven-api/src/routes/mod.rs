//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{articles, auth, comments, health, interactions, notifications, profiles};
use crate::state::AppState;

/// Create the main API router (health is mounted separately so it can
/// bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(profile_routes())
        .merge(article_routes())
        .merge(notification_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(auth::register))
        .route("/users/login", post(auth::login))
        .route("/users/refresh", post(auth::refresh_token))
        .route("/users/verify/:token", get(auth::verify_email))
        .route("/users/password/forgot", post(auth::forgot_password))
        .route("/users/password/reset/:token", post(auth::reset_password))
        .route("/user", get(auth::get_current_user))
        .route("/user", patch(auth::update_current_user))
}

fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles/:username", get(profiles::get_profile))
        .route("/profiles/:username/follow", post(profiles::follow))
        .route("/profiles/:username/follow", delete(profiles::unfollow))
        .route("/profiles/:username/followers", get(profiles::followers))
        .route("/profile", patch(profiles::update_profile))
}

fn article_routes() -> Router<AppState> {
    Router::new()
        // Article CRUD
        .route("/articles", post(articles::create_article))
        .route("/articles", get(articles::list_articles))
        .route("/articles/mine", get(articles::list_own_articles))
        .route("/articles/search", get(articles::search_articles))
        .route("/articles/:slug", get(articles::get_article))
        .route("/articles/:slug", patch(articles::update_article))
        .route("/articles/:slug", delete(articles::delete_article))
        // Interactions
        .route("/articles/:slug/rate", post(interactions::rate_article))
        .route("/articles/:slug/like", post(interactions::create_opinion))
        .route("/articles/:slug/like", patch(interactions::update_opinion))
        .route("/articles/:slug/like", delete(interactions::delete_opinion))
        .route(
            "/articles/:slug/favorite",
            post(interactions::create_favorite),
        )
        .route(
            "/articles/:slug/favorite",
            delete(interactions::delete_favorite),
        )
        // Comments
        .route("/articles/:slug/comments", post(comments::create_comment))
        .route("/articles/:slug/comments", get(comments::list_comments))
        .route("/articles/:slug/comments", patch(comments::update_comment))
        .route("/articles/:slug/comments", delete(comments::delete_comments))
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list_notifications))
        .route(
            "/notifications/unread",
            get(notifications::list_unread_notifications),
        )
        .route("/notifications/read", post(notifications::mark_read))
}
