use super::NotificationsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, NotificationsRepository, UsersRepository},
    service::connections_service::ConnectionsService,
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct NotificationsServiceImpl {
    notifications_repository: Arc<dyn NotificationsRepository>,
    users_repository: Arc<dyn UsersRepository>,
    connections_service: Arc<dyn ConnectionsService>,
}

impl NotificationsServiceImpl {
    pub fn new(
        notifications_repository: Arc<dyn NotificationsRepository>,
        users_repository: Arc<dyn UsersRepository>,
        connections_service: Arc<dyn ConnectionsService>,
    ) -> Self {
        Self {
            notifications_repository,
            users_repository,
            connections_service,
        }
    }

    async fn find_user(&self, user_id: Uuid) -> Result<repository::User, Error> {
        let user = self
            .users_repository
            .find(user_id)
            .await?
            .ok_or(Error::UserNotExist)?;

        Ok(user)
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn create_notification(
        &self,
        acting_user_id: Uuid,
        form: input::NotificationForm,
    ) -> Result<output::NotificationId, Error> {
        tracing::info!(notification_type = %form.notification_type, "creating notification");
        tracing::trace!(?form);

        let sender = self.find_user(acting_user_id).await?;
        let recipient = self.find_user(form.to).await?;

        let notification = self
            .notifications_repository
            .insert(
                recipient.id,
                sender,
                OffsetDateTime::now_utc(),
                form.title,
                form.description,
                form.notification_type,
                form.action,
            )
            .await?;

        let id = notification.id.to_hex();
        tracing::info!(id, "created notification");

        // Live push is strictly subordinate to persistence; whatever
        // happens to the connection the stored row stays the source
        // of truth the client can poll
        self.connections_service
            .push_notification(recipient.id, output::NotificationInfo::from(notification))
            .await;

        Ok(output::NotificationId { id })
    }

    async fn find_unread_notifications(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
    ) -> Result<Vec<output::NotificationInfo>, Error> {
        tracing::info!("finding unread notifications");

        let notifications = self
            .notifications_repository
            .find_many_by_recipient(user_id, Some(false), pagination)
            .await?;
        tracing::info!(count = notifications.len(), "found notifications");

        let notifications = notifications
            .into_iter()
            .map(output::NotificationInfo::from)
            .collect();

        Ok(notifications)
    }

    async fn find_read_notifications(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
    ) -> Result<Vec<output::NotificationInfo>, Error> {
        tracing::info!("finding read notifications");

        let notifications = self
            .notifications_repository
            .find_many_by_recipient(user_id, Some(true), pagination)
            .await?;
        tracing::info!(count = notifications.len(), "found notifications");

        let notifications = notifications
            .into_iter()
            .map(output::NotificationInfo::from)
            .collect();

        Ok(notifications)
    }

    async fn find_all_notifications(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
    ) -> Result<Vec<output::NotificationInfo>, Error> {
        tracing::info!("finding all notifications");

        let notifications = self
            .notifications_repository
            .find_many_by_recipient(user_id, None, pagination)
            .await?;
        tracing::info!(count = notifications.len(), "found notifications");

        let notifications = notifications
            .into_iter()
            .map(output::NotificationInfo::from)
            .collect();

        Ok(notifications)
    }

    async fn mark_as_read(&self, notification_id: ObjectId, user_id: Uuid) -> Result<(), Error> {
        tracing::info!("marking notification as read");

        self.notifications_repository
            .update_read(notification_id, user_id, true)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::NotificationNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("marked notification as read");

        Ok(())
    }

    async fn mark_as_unread(&self, notification_id: ObjectId, user_id: Uuid) -> Result<(), Error> {
        tracing::info!("marking notification as unread");

        self.notifications_repository
            .update_read(notification_id, user_id, false)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::NotificationNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("marked notification as unread");

        Ok(())
    }

    async fn mark_all_as_read(&self, user_id: Uuid) -> Result<(), Error> {
        tracing::info!("marking all notifications as read");

        self.notifications_repository
            .update_read_all(user_id)
            .await?;

        tracing::info!("marked all notifications as read");

        Ok(())
    }

    async fn delete_notification(
        &self,
        notification_id: ObjectId,
        user_id: Uuid,
    ) -> Result<(), Error> {
        tracing::info!("deleting notification");

        self.notifications_repository
            .delete(notification_id, user_id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::NotificationNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("deleted notification");

        Ok(())
    }

    async fn delete_all_notifications(&self, user_id: Uuid) -> Result<(), Error> {
        tracing::info!("deleting all notifications");

        self.notifications_repository.delete_all(user_id).await?;

        tracing::info!("deleted all notifications");

        Ok(())
    }
}
