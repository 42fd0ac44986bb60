use super::{
    dto::{Connection, ConnectionsServiceConfig, SseEvent},
    ConnectionsRegistry, ConnectionsService,
};
use crate::dto::output;
use axum::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

pub struct ConnectionsServiceImpl {
    config: ConnectionsServiceConfig,
    registry: Arc<ConnectionsRegistry>,
}

impl ConnectionsServiceImpl {
    pub fn new(config: ConnectionsServiceConfig, registry: Arc<ConnectionsRegistry>) -> Self {
        Self { config, registry }
    }

    ///
    /// Schedules forced completion of the connection once its lifespan
    /// passes. Removal is conditional, so a watchdog of an already
    /// displaced connection does nothing.
    ///
    fn spawn_lifespan_watchdog(&self, user_id: Uuid, connection_id: Uuid) {
        let registry = Arc::clone(&self.registry);
        let connection_lifespan = self.config.connection_lifespan;

        tokio::spawn(async move {
            tokio::time::sleep(connection_lifespan).await;
            if registry.remove(user_id, connection_id).await {
                tracing::info!(%user_id, "connection reached maximum lifespan");
            }
        });
    }

    async fn remove_connection(&self, connection: &Connection) {
        if self.registry.remove(connection.user_id, connection.id).await {
            tracing::info!(user_id = %connection.user_id, "removed connection");
        }
    }
}

#[async_trait]
impl ConnectionsService for ConnectionsServiceImpl {
    async fn subscribe(&self, user_id: Uuid) -> mpsc::Receiver<SseEvent> {
        tracing::info!(%user_id, "subscribing to notifications");

        let (connection, events_rx) =
            Connection::new(user_id, self.config.connection_buffer_size);
        self.spawn_lifespan_watchdog(user_id, connection.id);
        self.registry.put(connection.clone()).await;

        match connection.send(SseEvent::Init) {
            Ok(()) => tracing::info!(%user_id, "subscribed to notifications"),
            Err(err) => {
                tracing::error!(%user_id, %err, "failed to send init event");
                self.remove_connection(&connection).await;
            }
        }

        events_rx
    }

    async fn push_notification(&self, user_id: Uuid, notification: output::NotificationInfo) {
        let Some(connection) = self.registry.get(user_id).await else {
            tracing::debug!(%user_id, "user has no active connection");
            return;
        };

        match connection.send(SseEvent::Notification(notification)) {
            Ok(()) => tracing::info!(%user_id, "pushed notification"),
            Err(err) => {
                tracing::warn!(%user_id, %err, "failed to push notification, removing connection");
                self.remove_connection(&connection).await;
            }
        }
    }

    async fn send_heartbeats(&self) {
        let connections = self.registry.snapshot().await;
        for connection in connections {
            match connection.send(SseEvent::Heartbeat) {
                Ok(()) => tracing::debug!(user_id = %connection.user_id, "heartbeat sent"),
                Err(_) => {
                    tracing::info!(
                        user_id = %connection.user_id,
                        "failed to send heartbeat, removing connection"
                    );
                    self.remove_connection(&connection).await;
                }
            }
        }
    }

    async fn close_all(&self) {
        let connections = self.registry.snapshot().await;
        tracing::info!(count = connections.len(), "closing all connections");

        for connection in connections {
            if connection.send(SseEvent::Shutdown).is_err() {
                tracing::warn!(
                    user_id = %connection.user_id,
                    "failed to send shutdown event"
                );
            }
            self.remove_connection(&connection).await;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::{output, NotificationType};
    use std::time::Duration;
    use time::OffsetDateTime;
    use tokio::time::timeout;

    #[tokio::test]
    async fn subscribe_init_event_sent_first() {
        let (service, _registry) = create_service();

        let mut events_rx = service.subscribe(Uuid::new_v4()).await;

        let event = timeout(Duration::from_millis(100), events_rx.recv())
            .await
            .unwrap() // timeout
            .unwrap(); // event
        assert!(matches!(event, SseEvent::Init));
    }

    #[tokio::test]
    async fn subscribe_connection_registered() {
        let (service, registry) = create_service();
        let user_id = Uuid::new_v4();

        let _events_rx = service.subscribe(user_id).await;

        assert!(registry.get(user_id).await.is_some());
    }

    #[tokio::test]
    async fn subscribe_replaces_previous_connection() {
        let (service, _registry) = create_service();
        let user_id = Uuid::new_v4();

        let mut first_events_rx = service.subscribe(user_id).await;
        let mut second_events_rx = service.subscribe(user_id).await;

        let event = first_events_rx.recv().await.unwrap();
        assert!(matches!(event, SseEvent::Init));
        let event = second_events_rx.recv().await.unwrap();
        assert!(matches!(event, SseEvent::Init));

        service
            .push_notification(user_id, create_notification_info())
            .await;

        // only the replacement receives the push
        let event = timeout(Duration::from_millis(100), second_events_rx.recv())
            .await
            .unwrap() // timeout
            .unwrap(); // event
        assert!(matches!(event, SseEvent::Notification(_)));

        // the displaced connection's channel is closed
        let event = timeout(Duration::from_millis(100), first_events_rx.recv())
            .await
            .unwrap();
        assert!(event.is_none());
    }

    #[tokio::test]
    async fn stale_watchdog_does_not_remove_replacement() {
        let mut config = create_test_config();
        config.connection_lifespan = Duration::from_millis(50);
        let registry = Arc::new(ConnectionsRegistry::new());
        let service = ConnectionsServiceImpl::new(config, Arc::clone(&registry));
        let user_id = Uuid::new_v4();

        let _first_events_rx = service.subscribe(user_id).await;
        let first_id = registry.get(user_id).await.unwrap().id;
        let _second_events_rx = service.subscribe(user_id).await;
        let second_id = registry.get(user_id).await.unwrap().id;
        assert_ne!(first_id, second_id);

        // wait for the first connection's watchdog to fire
        tokio::time::sleep(Duration::from_millis(100)).await;

        let stored = registry.get(user_id).await;
        assert_eq!(stored.unwrap().id, second_id);
    }

    #[tokio::test]
    async fn connection_removed_after_lifespan() {
        let mut config = create_test_config();
        config.connection_lifespan = Duration::from_millis(50);
        let registry = Arc::new(ConnectionsRegistry::new());
        let service = ConnectionsServiceImpl::new(config, Arc::clone(&registry));
        let user_id = Uuid::new_v4();

        let mut events_rx = service.subscribe(user_id).await;

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(registry.get(user_id).await.is_none());

        // stream ends once the registry dropped its sender
        let event = events_rx.recv().await.unwrap();
        assert!(matches!(event, SseEvent::Init));
        let event = timeout(Duration::from_millis(100), events_rx.recv())
            .await
            .unwrap();
        assert!(event.is_none());
    }

    #[tokio::test]
    async fn push_notification_no_connection_no_write() {
        let (service, registry) = create_service();
        let user_id = Uuid::new_v4();

        service
            .push_notification(user_id, create_notification_info())
            .await;

        assert!(registry.get(user_id).await.is_none());
    }

    #[tokio::test]
    async fn push_notification_dead_connection_removed() {
        let (service, registry) = create_service();
        let user_id = Uuid::new_v4();

        let events_rx = service.subscribe(user_id).await;
        drop(events_rx);

        service
            .push_notification(user_id, create_notification_info())
            .await;

        assert!(registry.get(user_id).await.is_none());
    }

    #[tokio::test]
    async fn push_notification_full_buffer_removes_connection() {
        let mut config = create_test_config();
        config.connection_buffer_size = 1;
        let registry = Arc::new(ConnectionsRegistry::new());
        let service = ConnectionsServiceImpl::new(config, Arc::clone(&registry));
        let user_id = Uuid::new_v4();

        // the init event fills the whole buffer
        let _events_rx = service.subscribe(user_id).await;

        service
            .push_notification(user_id, create_notification_info())
            .await;

        assert!(registry.get(user_id).await.is_none());
    }

    #[tokio::test]
    async fn send_heartbeats_sweep_survives_dead_connection() {
        let (service, registry) = create_service();
        let first_user_id = Uuid::new_v4();
        let second_user_id = Uuid::new_v4();
        let third_user_id = Uuid::new_v4();

        let mut first_events_rx = service.subscribe(first_user_id).await;
        let second_events_rx = service.subscribe(second_user_id).await;
        let mut third_events_rx = service.subscribe(third_user_id).await;
        drop(second_events_rx);

        service.send_heartbeats().await;

        assert!(registry.get(first_user_id).await.is_some());
        assert!(registry.get(second_user_id).await.is_none());
        assert!(registry.get(third_user_id).await.is_some());

        for events_rx in [&mut first_events_rx, &mut third_events_rx] {
            let event = events_rx.recv().await.unwrap();
            assert!(matches!(event, SseEvent::Init));
            let event = timeout(Duration::from_millis(100), events_rx.recv())
                .await
                .unwrap() // timeout
                .unwrap(); // event
            assert!(matches!(event, SseEvent::Heartbeat));
        }
    }

    #[tokio::test]
    async fn close_all_drains_registry() {
        let (service, registry) = create_service();
        let user_ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];

        let mut events_rxs = Vec::new();
        for user_id in user_ids {
            events_rxs.push(service.subscribe(user_id).await);
        }

        service.close_all().await;

        for user_id in user_ids {
            assert!(registry.get(user_id).await.is_none());
        }

        for events_rx in &mut events_rxs {
            let event = events_rx.recv().await.unwrap();
            assert!(matches!(event, SseEvent::Init));
            let event = events_rx.recv().await.unwrap();
            assert!(matches!(event, SseEvent::Shutdown));
            let event = timeout(Duration::from_millis(100), events_rx.recv())
                .await
                .unwrap();
            assert!(event.is_none());
        }
    }

    #[tokio::test]
    async fn close_all_survives_dead_connection() {
        let (service, registry) = create_service();
        let first_user_id = Uuid::new_v4();
        let second_user_id = Uuid::new_v4();

        let _first_events_rx = service.subscribe(first_user_id).await;
        let second_events_rx = service.subscribe(second_user_id).await;
        drop(second_events_rx);

        service.close_all().await;

        assert!(registry.get(first_user_id).await.is_none());
        assert!(registry.get(second_user_id).await.is_none());
    }

    ///
    /// Creates config that won't interfere with tests
    ///
    fn create_test_config() -> ConnectionsServiceConfig {
        ConnectionsServiceConfig {
            connection_lifespan: Duration::from_secs(1200),
            connection_buffer_size: 8,
        }
    }

    fn create_service() -> (ConnectionsServiceImpl, Arc<ConnectionsRegistry>) {
        let registry = Arc::new(ConnectionsRegistry::new());
        let service = ConnectionsServiceImpl::new(create_test_config(), Arc::clone(&registry));

        (service, registry)
    }

    fn create_notification_info() -> output::NotificationInfo {
        output::NotificationInfo {
            id: "66ba6ae013c02d5f2bbcdefd".to_string(),
            title: "New Like".to_string(),
            description: "somebody liked your setup".to_string(),
            notification_type: NotificationType::Like,
            action: "/setups/1".to_string(),
            user: output::UserInfo {
                id: Uuid::new_v4(),
                full_name: "Some Body".to_string(),
                email: "somebody@example.com".to_string(),
                username: "somebody".to_string(),
                profession: "streamer".to_string(),
                enabled: true,
            },
            read: false,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
