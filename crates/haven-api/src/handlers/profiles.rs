//! Profile and follow-graph handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use haven_service::dto::{FollowersResponse, ProfileResponse, UpdateProfileRequest};
use haven_service::ProfileService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Fetch a public profile
///
/// GET /profiles/:username
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.get(&username).await?;
    Ok(Json(response))
}

/// Update the authenticated user's profile
///
/// PATCH /profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.update(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Follow a user
///
/// POST /profiles/:username/follow
pub async fn follow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.follow(auth.user_id, &username).await?;
    Ok(Json(response))
}

/// Unfollow a user
///
/// DELETE /profiles/:username/follow
pub async fn unfollow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.unfollow(auth.user_id, &username).await?;
    Ok(Json(response))
}

/// List the usernames following a profile
///
/// GET /profiles/:username/followers
pub async fn followers(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<FollowersResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.followers(&username).await?;
    Ok(Json(response))
}
