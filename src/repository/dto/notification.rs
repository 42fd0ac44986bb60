use super::User;
use crate::{dto::NotificationType, repository::entity::NotificationFindEntity};
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct Notification {
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub notification_type: NotificationType,
    pub action: String,
    pub recipient_id: Uuid,
    pub sender: User,
    pub read: bool,
    pub created_at: OffsetDateTime,
}

impl From<NotificationFindEntity> for Notification {
    fn from(entity: NotificationFindEntity) -> Self {
        Self {
            id: entity._id,
            title: entity.title,
            description: entity.description,
            notification_type: entity.notification_type,
            action: entity.action,
            recipient_id: entity.recipient_id.into(),
            sender: User::from(entity.sender),
            read: entity.read,
            created_at: entity.created_at.to_time_0_3(),
        }
    }
}
