//! Shortener - canonicalizing URL shortener
//!
//! Raw URLs are validated and folded into a canonical form. Submissions with
//! the same canonical form share one record; new destinations get a random,
//! collision-checked short code.
//!
//! # Architecture
//! - `utils`: URL validation, canonicalization and code generation
//! - `services`: dedup and code assignment over a storage collaborator
//! - `storage`: `UrlStore` trait with SeaORM and in-memory backends
//! - `api`: actix-web JSON adapter
//! - `config`, `system`, `runtime`, `cli`: configuration, logging and run modes

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
