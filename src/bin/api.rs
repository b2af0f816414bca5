//! fitlog API Server
//!
//! Run with: cargo run --bin fitlog-api
//!
//! # Configuration
//!
//! Read from `config.toml` (see `fitlog config`), overridden by:
//! - `FITLOG_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `FITLOG_API_PORT`: Port to listen on (default: 8089)
//! - `FITLOG_DATA_DIR`: Data directory
//! - `FITLOG_CORS_ORIGINS`: Comma separated allowed origins (default: any)
//! - `FITLOG_LOG_LEVEL` / `FITLOG_LOG_FORMAT`: Logging (default: info / pretty)
//! - `RUST_LOG`: Full filter directive, wins over the level above

use fitlog::api::{serve, AppState};
use fitlog::config::Config;
use fitlog::storage::{RecordStore, StorageConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default()?;
    fitlog::logging::init(&config.logging);

    tracing::info!("Starting fitlog API server v{}", env!("CARGO_PKG_VERSION"));
    match Config::default_path() {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("No config file found, using defaults and environment"),
    }
    tracing::info!("Data directory: {:?}", config.storage.data_dir);

    let store = Arc::new(RecordStore::open(&StorageConfig::new(&config.storage.data_dir))?);
    tracing::info!("Record store holds {} entries", store.count()?);

    tracing::info!("Student collection at {}", config.api.local_url());

    let state = AppState::new(store, config.api);
    serve(state).await?;

    tracing::info!("fitlog API server stopped");

    Ok(())
}
