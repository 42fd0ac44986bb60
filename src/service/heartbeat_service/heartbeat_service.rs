use super::HeartbeatServiceConfig;
use crate::service::connections_service::ConnectionsService;
use std::sync::Arc;
use tokio::{
    sync::Notify,
    time::{interval, Interval, MissedTickBehavior},
};

///
/// Periodic task proving liveness of every registered connection.
/// Connections behind idle proxies or NATs can die without any close
/// being observed; a failed heartbeat write is how such connections
/// are found and evicted.
///
pub struct HeartbeatService {
    connections_service: Arc<dyn ConnectionsService>,

    interval: Interval,
}

impl HeartbeatService {
    pub fn new(
        config: HeartbeatServiceConfig,
        connections_service: Arc<dyn ConnectionsService>,
    ) -> Self {
        let mut interval = interval(config.heartbeat_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            connections_service,
            interval,
        }
    }

    #[tracing::instrument(name = "Heartbeat", skip_all)]
    pub async fn run(mut self, close_notify: Arc<Notify>) {
        tokio::select! {
            biased;

            // Wait for signal to close
            _ = close_notify.notified() => {},

            // Sweep all connections periodically
            _ = async { loop {
                self.interval.tick().await;

                tracing::debug!("heartbeat sweep started");
                self.connections_service.send_heartbeats().await;
                tracing::debug!("heartbeat sweep finished");
            }} => {}
        }
    }
}
