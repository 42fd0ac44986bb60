use crate::repository::dto::User;
use bson::Uuid;
use serde::{Deserialize, Serialize};

///
/// User document, also embedded in notification documents as the
/// denormalized sender snapshot
///
#[derive(Debug, Serialize, Deserialize)]
pub struct UserEntity {
    pub _id: Uuid,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub profession: String,
    pub enabled: bool,
}

impl From<&User> for UserEntity {
    fn from(user: &User) -> Self {
        Self {
            _id: user.id.into(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            profession: user.profession.clone(),
            enabled: user.enabled,
        }
    }
}
