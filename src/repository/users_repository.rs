use super::{dto::User, error::Error};
use axum::async_trait;
use uuid::Uuid;

///
/// Read only access to the user directory. Users are managed by another
/// part of the platform; this service only resolves identities.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find(&self, user_id: Uuid) -> Result<Option<User>, Error>;
}
