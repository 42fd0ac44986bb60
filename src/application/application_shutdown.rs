use super::ApplicationStateToClose;
use crate::service::connections_service::ConnectionsService;
use std::sync::Arc;

///
/// Resolves when the process receives a termination signal and the
/// connection registry was drained. Draining ends every open event
/// stream; without it the server would wait for them forever.
///
pub async fn shutdown_signal(connections_service: Arc<dyn ConnectionsService>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("starting shutdown");

    connections_service.close_all().await;
}

pub async fn close(state: ApplicationStateToClose) {
    tracing::info!("stopping heartbeat task");
    state.heartbeat_close_notify.notify_one();
    if let Err(err) = state.heartbeat_handle.await {
        tracing::error!(%err, "heartbeat task failed");
    }

    tracing::info!("closing connection with database");
    state.db_client.shutdown().await;
}
