use anyhow::anyhow;
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub heartbeat_interval: Duration,
    pub connection_lifespan: Duration,
    pub connection_buffer_size: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("SHOWROOM_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("SHOWROOM_NOTIFIER_LOG_FILENAME")?;
        let bind_address = Self::env_var("SHOWROOM_NOTIFIER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("SHOWROOM_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("SHOWROOM_NOTIFIER_DB_NAME")?;
        let heartbeat_interval = Self::env_var("SHOWROOM_NOTIFIER_HEARTBEAT_INTERVAL")?.parse()?;
        let heartbeat_interval = Duration::from_secs(heartbeat_interval);
        let connection_lifespan =
            Self::env_var("SHOWROOM_NOTIFIER_CONNECTION_LIFESPAN")?.parse()?;
        let connection_lifespan = Duration::from_secs(connection_lifespan);
        let connection_buffer_size =
            Self::env_var("SHOWROOM_NOTIFIER_CONNECTION_BUFFER_SIZE")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            heartbeat_interval,
            connection_lifespan,
            connection_buffer_size,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
