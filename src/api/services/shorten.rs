use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::{error, trace};

use super::{ApiState, UrlResponse, error_response};
use crate::errors::ShortenerError;

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// Missing field is reported as blank
    #[serde(default, alias = "original_url")]
    pub url: Option<String>,
}

pub struct ShortenService;

impl ShortenService {
    /// POST /urls
    pub async fn create(
        state: web::Data<ApiState>,
        body: web::Json<ShortenRequest>,
    ) -> impl Responder {
        let raw = body.into_inner().url.unwrap_or_default();
        trace!("Shorten request for '{}'", raw);

        match state.service.shorten(&raw).await {
            Ok(result) => {
                let response = UrlResponse::from_record(result.record, &state.shortener);
                if result.created {
                    HttpResponse::Created().json(response)
                } else {
                    HttpResponse::Ok().json(response)
                }
            }
            Err(e) => {
                if !matches!(e, ShortenerError::Validation(_)) {
                    error!("Shorten failed: {}", e);
                }
                error_response(&e)
            }
        }
    }

    /// GET /shortened/{short_url}
    pub async fn shortened(state: web::Data<ApiState>, path: web::Path<String>) -> impl Responder {
        match state.service.resolve(&path.into_inner()).await {
            Ok(record) => {
                HttpResponse::Ok().json(UrlResponse::from_record(record, &state.shortener))
            }
            Err(e) => error_response(&e),
        }
    }
}
