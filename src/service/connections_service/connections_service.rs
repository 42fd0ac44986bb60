use super::dto::SseEvent;
use crate::dto::output;
use axum::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionsService: Send + Sync {
    ///
    /// Opens a subscription for the user, displacing any connection the
    /// user already has, and emits the initial event into the stream.
    ///
    /// ### Returns
    /// receiver draining the connection's event stream; it yields [None]
    /// once the connection was removed from the registry
    ///
    async fn subscribe(&self, user_id: Uuid) -> mpsc::Receiver<SseEvent>;

    ///
    /// Best effort live push. A missing connection is not an error and a
    /// failed write evicts the connection; the persisted notification is
    /// the recovery path either way.
    ///
    async fn push_notification(&self, user_id: Uuid, notification: output::NotificationInfo);

    ///
    /// Writes a heartbeat event to every registered connection, evicting
    /// connections whose channel is gone. One dead connection never stops
    /// the sweep over the rest.
    ///
    async fn send_heartbeats(&self);

    ///
    /// Notifies every connection that the server is stopping and releases
    /// all of them.
    ///
    async fn close_all(&self);
}
