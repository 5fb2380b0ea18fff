mod api_doc;
mod app;
mod config;
mod cors;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use config::{Config, StoreBackend};
use state::AppState;
use store::{KvStore, MemoryStore, SpannerStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("feedback-kv starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store: Arc<dyn KvStore> = match config.store_backend {
        StoreBackend::Spanner => Arc::new(SpannerStore::from_config(&config).await?),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };

    let state = AppState { store };

    let address = format!("{}:{}", config.service_host, config.service_port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;
    tracing::info!("Server running on {}", address);

    axum::serve(listener, app::router(state))
        .await
        .context("Server error")?;

    Ok(())
}
