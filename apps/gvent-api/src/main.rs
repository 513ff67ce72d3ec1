use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{MongoDocumentStore, connect_from_config};
use domain_events::Event;
use eyre::WrapErr;
use std::time::Duration;
use tracing::{error, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment, config.log_level);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    // No retry: an unreachable database at startup is fatal
    let mongo_client = connect_from_config(&config.mongodb)
        .await
        .wrap_err("Could not connect to the database")?;

    let store = MongoDocumentStore::new(mongo_client.database(config.mongodb.database()));

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // An existing collection is fine; any other failure is reported and serving continues
    if let Err(e) = store.initialize::<Event>().await {
        error!(error = %e, "Could not initialize the events collection");
    }

    let state = AppState {
        config,
        mongo_client,
        store,
    };

    let app = api::app(&state);

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    let client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .wrap_err("Server error")?;

    info!("gvent API shutdown complete");
    Ok(())
}
