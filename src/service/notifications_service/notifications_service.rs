use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Creates notification addressed to `form.to` on behalf of the acting
    /// user and pushes it to the recipient's live connection when one is
    /// open. Failing to persist fails the whole operation; an unreachable
    /// or dead connection does not.
    ///
    /// ### Returns
    /// ID of created notification
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when acting user or recipient is unknown
    ///
    async fn create_notification(
        &self,
        acting_user_id: Uuid,
        form: input::NotificationForm,
    ) -> Result<output::NotificationId, Error>;

    ///
    /// Find user's unread notifications, newest first
    ///
    async fn find_unread_notifications(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
    ) -> Result<Vec<output::NotificationInfo>, Error>;

    ///
    /// Find user's read notifications, newest first
    ///
    async fn find_read_notifications(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
    ) -> Result<Vec<output::NotificationInfo>, Error>;

    ///
    /// Find all user's notifications that were not deleted, newest first
    ///
    async fn find_all_notifications(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
    ) -> Result<Vec<output::NotificationInfo>, Error>;

    ///
    /// Marks notification as read. Marking an already read notification
    /// is not an error.
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when notification does not exist
    ///   or is not addressed to the user
    ///
    async fn mark_as_read(&self, notification_id: ObjectId, user_id: Uuid) -> Result<(), Error>;

    ///
    /// Marks notification as unread
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when notification does not exist
    ///   or is not addressed to the user
    ///
    async fn mark_as_unread(&self, notification_id: ObjectId, user_id: Uuid) -> Result<(), Error>;

    ///
    /// Marks all user's notifications as read
    ///
    async fn mark_all_as_read(&self, user_id: Uuid) -> Result<(), Error>;

    ///
    /// Soft deletes notification
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when notification does not exist
    ///   or is not addressed to the user
    ///
    async fn delete_notification(
        &self,
        notification_id: ObjectId,
        user_id: Uuid,
    ) -> Result<(), Error>;

    ///
    /// Soft deletes all user's notifications
    ///
    async fn delete_all_notifications(&self, user_id: Uuid) -> Result<(), Error>;
}
