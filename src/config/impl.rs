use std::sync::{Arc, OnceLock};

use super::AppConfig;

static CONFIG: OnceLock<Arc<AppConfig>> = OnceLock::new();

/// Initialize the global configuration
///
/// `path` overrides the default `config.toml`. Later calls are no-ops and
/// return the configuration loaded first.
///
/// # Examples
/// ```no_run
/// use shortener::config::init_config;
/// let config = init_config(None);
/// assert_eq!(config.shortener.code_length, 6);
/// ```
pub fn init_config(path: Option<&str>) -> Arc<AppConfig> {
    CONFIG
        .get_or_init(|| Arc::new(AppConfig::load(path)))
        .clone()
}
