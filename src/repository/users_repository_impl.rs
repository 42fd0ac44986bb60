use super::{dto::User, entity::UserEntity, Error, UsersRepository};
use axum::async_trait;
use bson::doc;
use mongodb::Database;
use uuid::Uuid;

const USERS: &str = "users";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find(&self, user_id: Uuid) -> Result<Option<User>, Error> {
        let user_entity = self
            .database
            .collection::<UserEntity>(USERS)
            .find_one(doc! {
                "_id": bson::Uuid::from(user_id),
            })
            .await?;

        Ok(user_entity.map(User::from))
    }
}
