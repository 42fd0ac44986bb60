use super::dto::Connection;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

///
/// Thread safe map of user id to that user's single active connection.
/// The only shared mutable state of the delivery core; all mutation goes
/// through [put](Self::put) and [remove](Self::remove). The lock is never
/// held while writing to a connection's channel.
///
pub struct ConnectionsRegistry {
    connections: RwLock<HashMap<Uuid, Connection>>,
}

impl ConnectionsRegistry {
    pub fn new() -> Self {
        let connections = HashMap::new();
        let connections = RwLock::new(connections);

        Self { connections }
    }

    ///
    /// Associates user with the connection, displacing any previous entry.
    /// The displaced connection is not closed here; its own teardown path
    /// calls [remove](Self::remove), which ignores entries it no longer owns.
    ///
    pub async fn put(&self, connection: Connection) {
        let mut connections = self.connections.write().await;
        connections.insert(connection.user_id, connection);
    }

    pub async fn get(&self, user_id: Uuid) -> Option<Connection> {
        let connections = self.connections.read().await;
        connections.get(&user_id).cloned()
    }

    ///
    /// Removes the user's entry only when it still is the connection with
    /// `connection_id`. Keeps a stale teardown of a displaced connection
    /// from evicting its replacement.
    ///
    /// ### Returns
    /// whether the entry was removed
    ///
    pub async fn remove(&self, user_id: Uuid, connection_id: Uuid) -> bool {
        let mut connections = self.connections.write().await;
        match connections.get(&user_id) {
            Some(connection) if connection.id == connection_id => {
                connections.remove(&user_id);
                true
            }
            _ => false,
        }
    }

    ///
    /// Snapshot of all connections for sweeps. Entries put or removed
    /// after the snapshot was taken may or may not be visited by the
    /// caller; none is visited twice.
    ///
    pub async fn snapshot(&self) -> Vec<Connection> {
        let connections = self.connections.read().await;
        connections.values().cloned().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const TEST_BUFFER_SIZE: usize = 8;

    #[tokio::test]
    async fn put_then_get_returns_connection() {
        let registry = ConnectionsRegistry::new();
        let user_id = Uuid::new_v4();
        let (connection, _events_rx) = Connection::new(user_id, TEST_BUFFER_SIZE);
        let connection_id = connection.id;

        registry.put(connection).await;

        let stored = registry.get(user_id).await.unwrap();
        assert_eq!(stored.id, connection_id);
    }

    #[tokio::test]
    async fn get_unknown_user_returns_none() {
        let registry = ConnectionsRegistry::new();

        let stored = registry.get(Uuid::new_v4()).await;

        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn put_replaces_existing_connection() {
        let registry = ConnectionsRegistry::new();
        let user_id = Uuid::new_v4();
        let (first, _first_events_rx) = Connection::new(user_id, TEST_BUFFER_SIZE);
        let (second, _second_events_rx) = Connection::new(user_id, TEST_BUFFER_SIZE);
        let second_id = second.id;

        registry.put(first).await;
        registry.put(second).await;

        let stored = registry.get(user_id).await.unwrap();
        assert_eq!(stored.id, second_id);
    }

    #[tokio::test]
    async fn remove_matching_connection() {
        let registry = ConnectionsRegistry::new();
        let user_id = Uuid::new_v4();
        let (connection, _events_rx) = Connection::new(user_id, TEST_BUFFER_SIZE);
        let connection_id = connection.id;
        registry.put(connection).await;

        let removed = registry.remove(user_id, connection_id).await;

        assert!(removed);
        assert!(registry.get(user_id).await.is_none());
    }

    #[tokio::test]
    async fn remove_stale_connection_is_noop() {
        let registry = ConnectionsRegistry::new();
        let user_id = Uuid::new_v4();
        let (displaced, _displaced_events_rx) = Connection::new(user_id, TEST_BUFFER_SIZE);
        let (current, _current_events_rx) = Connection::new(user_id, TEST_BUFFER_SIZE);
        let displaced_id = displaced.id;
        let current_id = current.id;
        registry.put(displaced).await;
        registry.put(current).await;

        let removed = registry.remove(user_id, displaced_id).await;

        assert!(!removed);
        let stored = registry.get(user_id).await.unwrap();
        assert_eq!(stored.id, current_id);
    }

    #[tokio::test]
    async fn remove_unknown_user_is_noop() {
        let registry = ConnectionsRegistry::new();

        let removed = registry.remove(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(!removed);
    }

    #[tokio::test]
    async fn snapshot_returns_all_connections() {
        let registry = ConnectionsRegistry::new();
        let mut events_rxs = Vec::new();
        for _ in 0..3 {
            let (connection, events_rx) = Connection::new(Uuid::new_v4(), TEST_BUFFER_SIZE);
            events_rxs.push(events_rx);
            registry.put(connection).await;
        }

        let snapshot = registry.snapshot().await;

        assert_eq!(snapshot.len(), 3);
    }
}
