//! Savvy Advisor HTTP server.

use std::sync::Arc;

use savvy_advisor::adapters::http::{api_router, with_server_layers, ApiServices};
use savvy_advisor::adapters::{
    CannedResponder, InMemoryKeyValueStore, InMemoryOtpRepository, JsonFileKeyValueStore,
};
use savvy_advisor::config::{AppConfig, StorageBackend};
use savvy_advisor::ports::KeyValueStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let store: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        StorageBackend::File => Arc::new(JsonFileKeyValueStore::new(&config.storage.path)),
    };
    if config.otp.expose_code && config.is_production() {
        tracing::warn!("OTP codes are exposed in API responses");
    }

    let services = ApiServices::new(
        &config,
        store,
        Arc::new(InMemoryOtpRepository::new()),
        Arc::new(CannedResponder::new()),
    );
    let app = with_server_layers(api_router(services), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        storage = ?config.storage.backend,
        strict_answers = config.assessment.strict_answers,
        "savvy-advisor listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().pretty()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
