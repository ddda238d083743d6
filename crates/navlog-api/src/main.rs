//! API server binary for the Navlog fleet tracker.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from the environment
//! 3. Connect to `PostgreSQL` and run pending migrations
//! 4. Serve the HTTP API until the process is terminated

use std::sync::Arc;

use navlog_api::{start_server, AppConfig, AppState};
use navlog_db::PostgresPool;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("navlog-api starting");

    // 2. Load configuration.
    let config = AppConfig::from_env()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    // 3. Connect to PostgreSQL and migrate.
    let pool = PostgresPool::connect_url(&config.database_url).await?;
    pool.run_migrations().await?;

    // 4. Serve.
    let state = Arc::new(AppState::new(pool));
    start_server(&config.server, state).await?;

    Ok(())
}
