mod heartbeat_service_config;

pub use heartbeat_service_config::*;
