use crate::repository::entity::UserEntity;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub profession: String,
    pub enabled: bool,
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity._id.into(),
            full_name: entity.full_name,
            email: entity.email,
            username: entity.username,
            profession: entity.profession,
            enabled: entity.enabled,
        }
    }
}
