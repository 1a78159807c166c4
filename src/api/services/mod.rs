pub mod health;
pub mod redirect;
pub mod shorten;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ShortenerConfig;
use crate::errors::ShortenerError;
use crate::services::UrlService;
use crate::storage::UrlRecord;

pub use health::HealthService;
pub use redirect::RedirectService;
pub use shorten::ShortenService;

/// Shared handler state
pub struct ApiState {
    pub service: UrlService,
    pub shortener: ShortenerConfig,
}

/// Register [`ApiState`] on an actix app or test service
pub fn configure_app_data(state: Arc<ApiState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::from(state));
    }
}

/// All routes; the catch-all redirect is registered last
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(HealthService::health_check))
        .route("/urls", web::post().to(ShortenService::create))
        .route(
            "/shortened/{short_url}",
            web::get().to(ShortenService::shortened),
        )
        .route("/{short_url}", web::get().to(RedirectService::handle_redirect))
        .route("/{short_url}", web::head().to(RedirectService::handle_redirect));
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UrlResponse {
    pub original_url: String,
    pub sanitized_url: String,
    pub short_url: String,
    pub short_link: String,
    pub created_at: DateTime<Utc>,
}

impl UrlResponse {
    pub fn from_record(record: UrlRecord, shortener: &ShortenerConfig) -> Self {
        Self {
            short_link: shortener.short_link(&record.short_url),
            original_url: record.original_url,
            sanitized_url: record.sanitized_url,
            short_url: record.short_url,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
}

pub fn error_response(err: &ShortenerError) -> HttpResponse {
    let (status, field) = match err {
        ShortenerError::Validation(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Some("original_url".to_string()))
        }
        ShortenerError::NotFound(_) => (StatusCode::NOT_FOUND, None),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, None),
    };

    // Internal details stay in the logs
    let error = if status.is_server_error() {
        err.error_type().to_string()
    } else {
        err.message()
    };

    HttpResponse::build(status).json(ErrorResponse {
        error,
        field,
        code: err.code().to_string(),
    })
}
