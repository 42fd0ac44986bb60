use serde::{Deserialize, Serialize};

///
/// Semantic category of a notification. It drives rendering on the client
/// side; the delivery core treats it as opaque payload.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Like,
    Comment,
    Follow,
}
