//! Registration service
//!
//! Serves the registration API: validates username, email and birth date
//! submissions and reports every failed rule back to the client.

use std::sync::Arc;

use registration_service::{api, config, logging, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Arc::new(config::Config::from_env()?);

    config.validate()?;

    logging::init_tracing(&config.server)?;

    config.log_config();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting registration service");

    api::server::create_server(config).await?;

    tracing::info!("Registration service shutdown complete");
    Ok(())
}
