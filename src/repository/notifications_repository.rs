use super::{
    dto::{Notification, User},
    error::Error,
};
use crate::dto::{input, NotificationType};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Inserts new notification addressed to the recipient.
    /// `sender` is stored as a snapshot taken at creation time.
    ///
    /// ### Returns
    /// inserted notification
    ///
    async fn insert(
        &self,
        recipient_id: Uuid,
        sender: User,
        created_at: OffsetDateTime,
        title: String,
        description: String,
        notification_type: NotificationType,
        action: String,
    ) -> Result<Notification, Error>;

    ///
    /// Finds recipient's notifications that are not deleted, sorted
    /// descending by creation date. `read` of [None] matches notifications
    /// regardless of their read flag.
    ///
    async fn find_many_by_recipient(
        &self,
        recipient_id: Uuid,
        read: Option<bool>,
        pagination: input::Pagination,
    ) -> Result<Vec<Notification>, Error>;

    ///
    /// Updates notification read flag. Setting the flag to the value
    /// it already has is not an error.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - notification does not exist
    ///     - notification is not addressed to the recipient
    ///
    async fn update_read(
        &self,
        id: ObjectId,
        recipient_id: Uuid,
        read: bool,
    ) -> Result<(), Error>;

    ///
    /// Marks all recipient's notifications as read
    ///
    async fn update_read_all(&self, recipient_id: Uuid) -> Result<(), Error>;

    ///
    /// Marks notification as deleted. Documents are never physically
    /// removed.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - notification does not exist
    ///     - notification is not addressed to the recipient
    ///
    async fn delete(&self, id: ObjectId, recipient_id: Uuid) -> Result<(), Error>;

    ///
    /// Marks all recipient's notifications as deleted
    ///
    async fn delete_all(&self, recipient_id: Uuid) -> Result<(), Error>;
}
