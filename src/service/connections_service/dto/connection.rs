use super::SseEvent;
use tokio::sync::mpsc::{self, error::TrySendError};
use uuid::Uuid;

///
/// In memory handle of one subscriber's open event stream. `id` is the
/// identity used by conditional removal from the registry; it never
/// changes for the lifetime of the connection.
///
#[derive(Clone)]
pub struct Connection {
    pub id: Uuid,
    pub user_id: Uuid,

    events_tx: mpsc::Sender<SseEvent>,
}

impl Connection {
    pub fn new(user_id: Uuid, buffer_size: usize) -> (Self, mpsc::Receiver<SseEvent>) {
        let (events_tx, events_rx) = mpsc::channel(buffer_size);
        let connection = Self {
            id: Uuid::new_v4(),
            user_id,
            events_tx,
        };

        (connection, events_rx)
    }

    ///
    /// Queues event without waiting. A full or closed channel means the
    /// subscriber stopped draining its stream and the connection is dead.
    ///
    pub fn send(&self, event: SseEvent) -> Result<(), TrySendError<SseEvent>> {
        self.events_tx.try_send(event)
    }
}
