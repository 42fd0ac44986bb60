use super::ApplicationEnv;
use crate::{
    repository::{NotificationsRepositoryImpl, UsersRepositoryImpl},
    service::{
        connections_service::{
            ConnectionsRegistry, ConnectionsService, ConnectionsServiceConfig,
            ConnectionsServiceImpl,
        },
        heartbeat_service::{HeartbeatService, HeartbeatServiceConfig},
        notifications_service::{NotificationsService, NotificationsServiceImpl},
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;
use tokio::{sync::Notify, task::JoinHandle};

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub connections_service: Arc<dyn ConnectionsService>,
    pub notifications_service: Arc<dyn NotificationsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
    pub connections_service: Arc<dyn ConnectionsService>,
    pub heartbeat_close_notify: Arc<Notify>,
    pub heartbeat_handle: JoinHandle<()>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(db.clone()).await?;
    let notifications_repository = Arc::new(notifications_repository);
    let users_repository = UsersRepositoryImpl::new(db);
    let users_repository = Arc::new(users_repository);

    tracing::info!("creating services");
    let registry = ConnectionsRegistry::new();
    let registry = Arc::new(registry);

    let config = ConnectionsServiceConfig {
        connection_lifespan: env.connection_lifespan,
        connection_buffer_size: env.connection_buffer_size,
    };
    let connections_service: Arc<dyn ConnectionsService> =
        Arc::new(ConnectionsServiceImpl::new(config, registry));

    let notifications_service = NotificationsServiceImpl::new(
        notifications_repository,
        users_repository,
        Arc::clone(&connections_service),
    );
    let notifications_service = Arc::new(notifications_service);

    tracing::info!("starting heartbeat task");
    let config = HeartbeatServiceConfig {
        heartbeat_interval: env.heartbeat_interval,
    };
    let heartbeat_service = HeartbeatService::new(config, Arc::clone(&connections_service));
    let heartbeat_close_notify = Arc::new(Notify::new());
    let heartbeat_handle = tokio::spawn(heartbeat_service.run(Arc::clone(&heartbeat_close_notify)));

    Ok((
        ApplicationState {
            connections_service: Arc::clone(&connections_service),
            notifications_service,
        },
        ApplicationStateToClose {
            db_client,
            connections_service,
            heartbeat_close_notify,
            heartbeat_handle,
        },
    ))
}
