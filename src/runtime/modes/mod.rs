//! Mode routing
//!
//! - Server mode (HTTP server), the default
//! - CLI mode (one-shot commands against the configured store)

pub mod cli;
pub mod server;

pub use cli::run_cli;
pub use server::run_server;
