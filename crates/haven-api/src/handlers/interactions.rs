//! Article interaction handlers: ratings, likes, and favorites.

use axum::{
    extract::{Path, State},
    Json,
};
use haven_service::dto::{
    FavoriteRequest, FavoriteResponse, MessageResponse, OpinionRequest, OpinionResponse,
    RateArticleRequest, RatingResponse,
};
use haven_service::{FavoriteService, LikeService, RatingService};

use crate::extractors::AuthUser;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Rate an article once, 1 to 5
///
/// POST /articles/:slug/rate
pub async fn rate_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    Json(request): Json<RateArticleRequest>,
) -> ApiResult<Created<Json<RatingResponse>>> {
    let service = RatingService::new(state.service_context());
    let response = service.rate(auth.user_id, &slug, request).await?;
    Ok(Created(Json(response)))
}

/// Record a like or dislike; fails if one already exists
///
/// POST /articles/:slug/like
pub async fn create_opinion(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    Json(request): Json<OpinionRequest>,
) -> ApiResult<Created<Json<OpinionResponse>>> {
    let service = LikeService::new(state.service_context());
    let response = service.create(auth.user_id, &slug, request).await?;
    Ok(Created(Json(response)))
}

/// Flip an existing like or dislike
///
/// PATCH /articles/:slug/like
pub async fn update_opinion(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    Json(request): Json<OpinionRequest>,
) -> ApiResult<Json<OpinionResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.update(auth.user_id, &slug, request).await?;
    Ok(Json(response))
}

/// Withdraw an existing like or dislike
///
/// DELETE /articles/:slug/like
pub async fn delete_opinion(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.delete(auth.user_id, &slug).await?;
    Ok(Json(response))
}

/// Add an article to favorites; the flag must be true
///
/// POST /articles/:slug/favorite
pub async fn create_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    Json(request): Json<FavoriteRequest>,
) -> ApiResult<Created<Json<FavoriteResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.create(auth.user_id, &slug, request).await?;
    Ok(Created(Json(response)))
}

/// Remove an article from favorites; the flag must be false
///
/// DELETE /articles/:slug/favorite
pub async fn delete_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    Json(request): Json<FavoriteRequest>,
) -> ApiResult<Json<FavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.delete(auth.user_id, &slug, request).await?;
    Ok(Json(response))
}
