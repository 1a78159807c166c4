use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// Trimmed user input
    pub original_url: String,
    /// Canonical form; unique across records
    pub sanitized_url: String,
    /// Generated short code; unique across records
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    pub fn new(
        original_url: impl Into<String>,
        sanitized_url: impl Into<String>,
        short_url: impl Into<String>,
    ) -> Self {
        Self {
            original_url: original_url.into(),
            sanitized_url: sanitized_url.into(),
            short_url: short_url.into(),
            created_at: Utc::now(),
        }
    }
}
