use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, error, trace};

use super::ApiState;
use crate::errors::ShortenerError;
use crate::utils::is_valid_short_code;

pub struct RedirectService;

impl RedirectService {
    /// GET /{short_url}: 307 to the canonical destination
    pub async fn handle_redirect(
        state: web::Data<ApiState>,
        path: web::Path<String>,
    ) -> impl Responder {
        let code = path.into_inner();

        if !is_valid_short_code(&code) {
            // 非法短码，直接 404（不查存储）
            trace!("Invalid short code rejected: {}", code);
            return Self::not_found_response();
        }

        match state.service.resolve(&code).await {
            Ok(record) => {
                debug!("Redirecting {} -> {}", code, record.sanitized_url);
                HttpResponse::TemporaryRedirect()
                    .insert_header(("Location", record.sanitized_url))
                    .insert_header(("Cache-Control", "no-cache"))
                    .finish()
            }
            Err(ShortenerError::NotFound(_)) => {
                debug!("Redirect link not found: {}", code);
                Self::not_found_response()
            }
            Err(e) => {
                error!("Storage error during redirect lookup: {}", e);
                HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                    .insert_header(("Content-Type", "text/plain; charset=utf-8"))
                    .body("Internal Server Error")
            }
        }
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .insert_header(("Cache-Control", "public, max-age=60"))
            .body("Not Found")
    }
}
