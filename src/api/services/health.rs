use std::time::Duration;

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{error, trace};

use super::ApiState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct HealthService;

impl HealthService {
    /// GET /health: storage reachability plus record count
    pub async fn health_check(state: web::Data<ApiState>) -> impl Responder {
        trace!("Received health check request");
        let store = state.service.store();
        let backend = store.backend_name().to_string();

        match tokio::time::timeout(Duration::from_secs(5), store.count()).await {
            Ok(Ok(count)) => HttpResponse::Ok().json(HealthResponse {
                status: "ok".to_string(),
                backend,
                links: Some(count),
                error: None,
            }),
            Ok(Err(e)) => {
                error!("Storage health check failed: {}", e);
                HttpResponse::ServiceUnavailable().json(HealthResponse {
                    status: "unhealthy".to_string(),
                    backend,
                    links: None,
                    error: Some(e.error_type().to_string()),
                })
            }
            Err(_) => {
                error!("Storage health check timeout");
                HttpResponse::ServiceUnavailable().json(HealthResponse {
                    status: "unhealthy".to_string(),
                    backend,
                    links: None,
                    error: Some("timeout".to_string()),
                })
            }
        }
    }
}
