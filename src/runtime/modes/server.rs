//! Server mode
//!
//! Builds the storage-backed service and serves the JSON API.

use std::sync::Arc;

use actix_web::{App, HttpServer};
use anyhow::Result;
use tracing::{error, warn};

use crate::api::services::ApiState;
use crate::api::{api_routes, configure_app_data};
use crate::config::AppConfig;
use crate::runtime::build_service;

/// Run the HTTP server until it is shut down
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &AppConfig) -> Result<()> {
    let service = build_service(config).await.map_err(|e| {
        error!("Server startup failed: {}", e);
        e
    })?;

    let state = Arc::new(ApiState {
        service,
        shortener: config.shortener.clone(),
    });

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .configure(configure_app_data(state.clone()))
            .configure(api_routes)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    warn!("Server stopped");
    Ok(())
}
