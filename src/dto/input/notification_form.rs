use crate::dto::NotificationType;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct NotificationForm {
    pub title: String,
    pub description: String,

    #[serde(rename = "type")]
    pub notification_type: NotificationType,

    /// Relative navigation target opened by the client
    pub action: String,

    /// ID of the user the notification is addressed to
    pub to: Uuid,
}
