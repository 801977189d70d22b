//! Notification entity <-> model mapper

use haven_core::entities::Notification;
use haven_core::value_objects::Snowflake;

use crate::models::NotificationModel;

/// Convert NotificationModel to Notification entity
impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: Snowflake::new(model.id),
            article_id: Snowflake::new(model.article_id),
            title: model.title,
            body: model.body,
            owner_id: Snowflake::new(model.owner_id),
            read_status: model.read_status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
