mod application;
mod dto;
mod error;
mod repository;
mod routing;
mod service;

use application::ApplicationEnv;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let (state, state_to_close) = application::create_state(&env).await?;
    let app = application::create_application(state);

    let listener = tokio::net::TcpListener::bind(env.bind_address).await?;
    tracing::info!(address = %env.bind_address, "server started");

    let shutdown = application::shutdown_signal(Arc::clone(&state_to_close.connections_service));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    application::close(state_to_close).await;

    Ok(())
}
