//! Comment handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use haven_service::dto::{
    CommentListResponse, CommentRequest, CommentResponse, MessageResponse, UpdateCommentRequest,
};
use haven_service::CommentService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Comment on an article; naming a parent makes a one-level reply
///
/// POST /articles/:slug/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.create(auth.user_id, &slug, request).await?;
    Ok(Created(Json(response)))
}

/// List an article's comments, oldest first
///
/// GET /articles/:slug/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<CommentListResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.list(&slug).await?;
    Ok(Json(response))
}

/// Edit the caller's comment on an article
///
/// PATCH /articles/:slug/comments
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.update(auth.user_id, &slug, request).await?;
    Ok(Json(response))
}

/// Delete the caller's comments on an article
///
/// DELETE /articles/:slug/comments
pub async fn delete_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.delete(auth.user_id, &slug).await?;
    Ok(Json(response))
}
