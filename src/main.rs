//! # Messaging Server
//!
//! Entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - In-memory storage engine
//! - HTTP server

use anyhow::Result;
use tracing::info;

use messaging_server::config::Settings;
use messaging_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    messaging_server::telemetry::init_tracing();

    info!("Starting Messaging Server...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
