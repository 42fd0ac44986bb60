use std::time::Duration;

pub struct HeartbeatServiceConfig {
    pub heartbeat_interval: Duration,
}
