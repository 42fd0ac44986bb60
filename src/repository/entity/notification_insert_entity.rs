use super::UserEntity;
use crate::dto::NotificationType;
use bson::{DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct NotificationInsertEntity {
    pub title: String,
    pub description: String,
    pub notification_type: NotificationType,
    pub action: String,
    pub recipient_id: Uuid,
    pub sender: UserEntity,
    pub read: bool,
    pub deleted: bool,
    pub created_at: DateTime,
}
