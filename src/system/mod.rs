//! Process-level plumbing shared by all run modes

pub mod logging;

pub use logging::init_logging;
