//! HTTP adapter tests
//!
//! Create, show and redirect through the actix routes over in-memory storage.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::App;
use serde_json::json;

use shortener::api::services::{ApiState, ErrorResponse, UrlResponse};
use shortener::api::services::health::HealthResponse;
use shortener::api::{api_routes, configure_app_data};
use shortener::config::ShortenerConfig;
use shortener::services::UrlService;
use shortener::storage::MemoryStorage;

fn test_state() -> Arc<ApiState> {
    let shortener = ShortenerConfig {
        base_url: Some("https://sho.rt".to_string()),
        ..ShortenerConfig::default()
    };
    Arc::new(ApiState {
        service: UrlService::new(Arc::new(MemoryStorage::new()), &shortener),
        shortener,
    })
}

#[actix_rt::test]
async fn test_create_then_dedup() {
    let app = test::init_service(
        App::new()
            .configure(configure_app_data(test_state()))
            .configure(api_routes),
    )
    .await;

    let req = TestRequest::post()
        .uri("/urls")
        .set_json(json!({ "url": "  www.google.com/ " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: UrlResponse = test::read_body_json(resp).await;
    assert_eq!(created.original_url, "www.google.com/");
    assert_eq!(created.sanitized_url, "http://google.com");
    assert_eq!(created.short_link, format!("https://sho.rt/{}", created.short_url));

    let req = TestRequest::post()
        .uri("/urls")
        .set_json(json!({ "original_url": "HTTPS://Google.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let again: UrlResponse = test::read_body_json(resp).await;
    assert_eq!(again.short_url, created.short_url);
}

#[actix_rt::test]
async fn test_validation_errors() {
    let app = test::init_service(
        App::new()
            .configure(configure_app_data(test_state()))
            .configure(api_routes),
    )
    .await;

    let req = TestRequest::post().uri("/urls").set_json(json!({})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "can't be blank");
    assert_eq!(body.field.as_deref(), Some("original_url"));

    let req = TestRequest::post()
        .uri("/urls")
        .set_json(json!({ "url": "abc" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "is invalid");
}

#[actix_rt::test]
async fn test_non_web_scheme_is_rejected() {
    let state = test_state();
    let app = test::init_service(
        App::new()
            .configure(configure_app_data(state.clone()))
            .configure(api_routes),
    )
    .await;

    for url in ["ftp://example.com/file", "javascript://example.com/%0aalert(1)"] {
        let req = TestRequest::post()
            .uri("/urls")
            .set_json(json!({ "url": url }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", url);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "is invalid");
    }

    assert_eq!(state.service.store().count().await.unwrap(), 0);
}

#[actix_rt::test]
async fn test_redirect_and_shortened_page() {
    let app = test::init_service(
        App::new()
            .configure(configure_app_data(test_state()))
            .configure(api_routes),
    )
    .await;

    let req = TestRequest::post()
        .uri("/urls")
        .set_json(json!({ "url": "https://en.wikipedia.org/wiki/HTML_element#Anchor" }))
        .to_request();
    let created: UrlResponse = test::call_and_read_body_json(&app, req).await;

    let req = TestRequest::get()
        .uri(&format!("/{}", created.short_url))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get("Location").unwrap(),
        "http://en.wikipedia.org/wiki/html_element#anchor"
    );

    let req = TestRequest::get()
        .uri(&format!("/shortened/{}", created.short_url))
        .to_request();
    let shown: UrlResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(shown.short_url, created.short_url);
}

#[actix_rt::test]
async fn test_unknown_and_malformed_codes() {
    let app = test::init_service(
        App::new()
            .configure(configure_app_data(test_state()))
            .configure(api_routes),
    )
    .await;

    let req = TestRequest::get().uri("/zzzzzz").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = TestRequest::get().uri("/favicon.ico").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = TestRequest::get().uri("/shortened/zzzzzz").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_health_reports_count() {
    let state = test_state();
    state.service.shorten("google.com").await.unwrap();

    let app = test::init_service(
        App::new()
            .configure(configure_app_data(state))
            .configure(api_routes),
    )
    .await;

    let req = TestRequest::get().uri("/health").to_request();
    let health: HealthResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.backend, "memory");
    assert_eq!(health.links, Some(1));
}
