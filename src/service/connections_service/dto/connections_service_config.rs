use std::time::Duration;

pub struct ConnectionsServiceConfig {
    /// Time after which a connection is forcibly completed
    pub connection_lifespan: Duration,

    pub connection_buffer_size: usize,
}
