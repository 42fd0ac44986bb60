use crate::dto::output;
use axum::response::sse::Event;

///
/// Event kinds emitted into a subscriber's stream. Names and payloads
/// form the wire contract with already deployed EventSource clients.
///
#[derive(Debug, Clone)]
pub enum SseEvent {
    Init,
    Heartbeat,
    Notification(output::NotificationInfo),
    Shutdown,
}

impl SseEvent {
    pub fn into_event(self) -> Result<Event, axum::Error> {
        let event = match self {
            SseEvent::Init => Event::default().event("INIT").data("Connected!"),
            SseEvent::Heartbeat => Event::default().event("heartbeat").data("ping"),
            SseEvent::Notification(notification) => Event::default()
                .event("notification")
                .json_data(notification)?,
            SseEvent::Shutdown => Event::default()
                .event("shutdown")
                .data("Server shutting down"),
        };

        Ok(event)
    }
}
