//! # Travel Buddy Server
//!
//! Backend for a travel-services marketplace.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - MongoDB client
//! - HTTP server

use anyhow::Result;
use tracing::info;

use travel_buddy::config::Settings;
use travel_buddy::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    travel_buddy::telemetry::init_tracing();

    info!("Starting Travel Buddy server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        driver = ?settings.database.driver,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Travel Buddy server is running on {}", application.local_addr()?);
    application.run_until_stopped().await?;

    Ok(())
}
