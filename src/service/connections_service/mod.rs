mod connections_registry;
mod connections_service;
mod connections_service_impl;
mod dto;

pub use connections_registry::*;
pub use connections_service::*;
pub use connections_service_impl::*;
pub use dto::{Connection, ConnectionsServiceConfig, SseEvent};
