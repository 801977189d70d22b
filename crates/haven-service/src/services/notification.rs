//! Publish notifications for followers.

use std::collections::HashSet;

use haven_core::{DomainError, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::requests::MarkReadRequest;
use crate::dto::responses::{MarkReadResponse, NotificationListResponse, NotificationResponse};
use crate::services::context::ServiceContext;
use crate::services::error::ServiceResult;

pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, owner_id: Snowflake) -> ServiceResult<NotificationListResponse> {
        let notifications = self.ctx.notification_repo().list_by_owner(owner_id).await?;
        Ok(to_list_response(&notifications))
    }

    #[instrument(skip(self))]
    pub async fn list_unread(
        &self,
        owner_id: Snowflake,
    ) -> ServiceResult<NotificationListResponse> {
        let notifications = self.ctx.notification_repo().list_unread(owner_id).await?;
        Ok(to_list_response(&notifications))
    }

    /// Mark notifications as read. Every requested id must be one of the
    /// caller's unread notifications, otherwise nothing is marked.
    #[instrument(skip(self, request), fields(owner = %owner_id))]
    pub async fn mark_read(
        &self,
        owner_id: Snowflake,
        request: MarkReadRequest,
    ) -> ServiceResult<MarkReadResponse> {
        request.validate()?;

        let unread: HashSet<Snowflake> = self
            .ctx
            .notification_repo()
            .unread_ids(owner_id)
            .await?
            .into_iter()
            .collect();

        let unknown: Vec<i64> = request
            .ids
            .iter()
            .filter(|id| !unread.contains(id))
            .map(|id| id.into_inner())
            .collect();
        if !unknown.is_empty() {
            return Err(DomainError::UnknownNotificationIds(format!("{unknown:?}")).into());
        }

        self.ctx
            .notification_repo()
            .mark_read(owner_id, &request.ids)
            .await?;
        info!(count = request.ids.len(), "notifications marked read");

        Ok(MarkReadResponse {
            marked: request.ids,
        })
    }
}

fn to_list_response(notifications: &[haven_core::Notification]) -> NotificationListResponse {
    let responses: Vec<NotificationResponse> =
        notifications.iter().map(NotificationResponse::from).collect();
    let count = responses.len();
    NotificationListResponse {
        notifications: responses,
        count,
    }
}
