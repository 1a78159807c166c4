//! URL shortening service
//!
//! Turns raw user input into a stored [`UrlRecord`]:
//! validate, canonicalize, reuse an existing record for the same canonical
//! form, otherwise issue a fresh short code that no other record holds.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::ShortenerConfig;
use crate::errors::{Result, ShortenerError};
use crate::storage::{UrlRecord, UrlStore};
use crate::utils::generate_random_code;
use crate::utils::sanitizer::{SanitizedUrl, sanitize};
use crate::utils::url_validator::validate_url;

/// Source of candidate short codes
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uniform draw from `[A-Za-z0-9]`
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(ShortenerConfig::default().code_length)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_random_code(self.length)
    }
}

/// Result of [`UrlService::shorten`]
#[derive(Debug, Clone)]
pub struct ShortenResult {
    pub record: UrlRecord,
    /// `false` when an existing record for the same canonical URL was returned
    pub created: bool,
}

pub struct UrlService {
    store: Arc<dyn UrlStore>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: u32,
}

impl UrlService {
    pub fn new(store: Arc<dyn UrlStore>, config: &ShortenerConfig) -> Self {
        Self::with_generator(
            store,
            Arc::new(RandomCodeGenerator::new(config.code_length)),
            config.max_attempts,
        )
    }

    pub fn with_generator(
        store: Arc<dyn UrlStore>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: u32,
    ) -> Self {
        Self {
            store,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn store(&self) -> &Arc<dyn UrlStore> {
        &self.store
    }

    /// Validate and canonicalize `raw`, then return the record for it
    pub async fn shorten(&self, raw: &str) -> Result<ShortenResult> {
        validate_url(raw)?;
        let sanitized = sanitize(raw);
        self.resolve_or_create(sanitized).await
    }

    /// Dedup against storage; on a miss, store under a collision-free code
    pub async fn resolve_or_create(&self, sanitized: SanitizedUrl) -> Result<ShortenResult> {
        if let Some(existing) = self.store.find_by_canonical(&sanitized.canonical).await? {
            info!("Reusing {} for {}", existing.short_url, sanitized.canonical);
            return Ok(ShortenResult {
                record: existing,
                created: false,
            });
        }

        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate();

            if self.store.find_by_short_code(&candidate).await?.is_some() {
                debug!(
                    "Short code collision on '{}' (attempt {}/{})",
                    candidate, attempt, self.max_attempts
                );
                continue;
            }

            let record = UrlRecord::new(
                sanitized.original.clone(),
                sanitized.canonical.clone(),
                candidate,
            );

            match self.store.insert(record).await {
                Ok(stored) => {
                    info!("Created {} -> {}", stored.short_url, stored.sanitized_url);
                    return Ok(ShortenResult {
                        record: stored,
                        created: true,
                    });
                }
                Err(e) if e.is_uniqueness_violation() => {
                    // Either a concurrent request stored this destination first,
                    // or another request took the code between check and insert
                    if let Some(winner) =
                        self.store.find_by_canonical(&sanitized.canonical).await?
                    {
                        warn!(
                            "Concurrent insert for {}; returning {}",
                            sanitized.canonical, winner.short_url
                        );
                        return Ok(ShortenResult {
                            record: winner,
                            created: false,
                        });
                    }
                    debug!("Short code taken during insert (attempt {})", attempt);
                }
                Err(e) => return Err(e),
            }
        }

        error!(
            "Short code space exhausted for {} after {} attempts",
            sanitized.canonical, self.max_attempts
        );
        Err(ShortenerError::generation_exhausted(self.max_attempts))
    }

    /// Look up a record by its short code
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord> {
        self.store
            .find_by_short_code(code)
            .await?
            .ok_or_else(|| {
                ShortenerError::not_found(format!("short url '{}' does not exist", code))
            })
    }
}
