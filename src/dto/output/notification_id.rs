use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationId {
    pub id: String,
}
