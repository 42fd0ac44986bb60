pub mod connections_service;
pub mod heartbeat_service;
pub mod notifications_service;
