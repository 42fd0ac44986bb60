mod dto;
mod heartbeat_service;

pub use dto::HeartbeatServiceConfig;
pub use heartbeat_service::*;
