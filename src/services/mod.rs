pub mod url_service;

pub use url_service::{
    CodeGenerator, RandomCodeGenerator, ShortenResult, UrlService,
};
