use super::UserInfo;
use crate::{dto::NotificationType, repository};
use serde::Serialize;
use time::OffsetDateTime;

///
/// View of a notification sent to its recipient, both in list responses
/// and as the payload of the `notification` stream event. `user` is the
/// public identity of the user whose action produced the notification.
///
#[derive(Debug, Clone, Serialize)]
pub struct NotificationInfo {
    pub id: String,
    pub title: String,
    pub description: String,

    #[serde(rename = "type")]
    pub notification_type: NotificationType,

    pub action: String,
    pub user: UserInfo,
    pub read: bool,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<repository::Notification> for NotificationInfo {
    fn from(notification: repository::Notification) -> Self {
        Self {
            id: notification.id.to_hex(),
            title: notification.title,
            description: notification.description,
            notification_type: notification.notification_type,
            action: notification.action,
            user: UserInfo::from(notification.sender),
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::Value;
    use uuid::Uuid;

    #[test]
    fn notification_info_json_serialize_ok() {
        let notification = NotificationInfo {
            id: "66ba6ae013c02d5f2bbcdefd".to_string(),
            title: "New Like".to_string(),
            description: "somebody liked your setup".to_string(),
            notification_type: NotificationType::Like,
            action: "/setups/1".to_string(),
            user: UserInfo {
                id: Uuid::new_v4(),
                full_name: "Some Body".to_string(),
                email: "somebody@example.com".to_string(),
                username: "somebody".to_string(),
                profession: "streamer".to_string(),
                enabled: true,
            },
            read: false,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_string(&notification).unwrap();

        let object = serde_json::from_str::<Value>(&json).unwrap();
        let object = object.as_object().unwrap();
        assert_eq!(
            object.get("type").unwrap().as_str().unwrap(),
            NotificationType::Like.to_string()
        );
        assert_eq!(
            object.get("created_at").unwrap().as_str().unwrap(),
            "1970-01-01T00:00:00Z"
        );
        let user = object.get("user").unwrap().as_object().unwrap();
        assert_eq!(user.get("full_name").unwrap().as_str().unwrap(), "Some Body");
    }
}
