//! Notification handlers.

use axum::{extract::State, Json};
use haven_service::dto::{MarkReadRequest, MarkReadResponse, NotificationListResponse};
use haven_service::NotificationService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// All of the caller's notifications, newest first
///
/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<NotificationListResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(Json(response))
}

/// Unread notifications only
///
/// GET /notifications/unread
pub async fn list_unread_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<NotificationListResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.list_unread(auth.user_id).await?;
    Ok(Json(response))
}

/// Mark notifications as read; every id must be one of the caller's
/// unread notifications
///
/// POST /notifications/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<MarkReadRequest>,
) -> ApiResult<Json<MarkReadResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.mark_read(auth.user_id, request).await?;
    Ok(Json(response))
}
