use crate::repository;
use serde::Serialize;
use uuid::Uuid;

///
/// Public identity of a user, safe to embed in payloads sent to other users
///
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub profession: String,
    pub enabled: bool,
}

impl From<repository::User> for UserInfo {
    fn from(user: repository::User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            username: user.username,
            profession: user.profession,
            enabled: user.enabled,
        }
    }
}
