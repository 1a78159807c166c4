//! Application lifecycle and execution modes

pub mod modes;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::UrlService;
use crate::storage::StorageFactory;

pub use modes::{run_cli, run_server};

/// Build the storage backend and the service on top of it
pub async fn build_service(config: &AppConfig) -> Result<UrlService> {
    let store = StorageFactory::create(&config.database).await?;
    tracing::info!("Using storage backend: {}", store.backend_name());
    Ok(UrlService::new(store, &config.shortener))
}
