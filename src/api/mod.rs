//! JSON HTTP adapter over [`UrlService`](crate::services::UrlService)

pub mod services;

pub use services::{api_routes, configure_app_data};
