mod connection;
mod connections_service_config;
mod sse_event;

pub use connection::*;
pub use connections_service_config::*;
pub use sse_event::*;
