use super::UserEntity;
use crate::dto::NotificationType;
use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct NotificationFindEntity {
    pub _id: ObjectId,
    pub title: String,
    pub description: String,
    pub notification_type: NotificationType,
    pub action: String,
    pub recipient_id: Uuid,
    pub sender: UserEntity,
    pub read: bool,
    pub created_at: DateTime,
}
