use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod memory;
pub mod models;

pub use backend::SeaOrmStorage;
pub use memory::MemoryStorage;
pub use models::UrlRecord;

/// Storage collaborator for URL records
///
/// Implementations must enforce uniqueness of both `sanitized_url` and
/// `short_url` themselves and report a conflicting insert as
/// [`ShortenerError::UniquenessViolation`](crate::errors::ShortenerError::UniquenessViolation).
#[async_trait]
pub trait UrlStore: Send + Sync {
    async fn find_by_canonical(&self, canonical: &str) -> Result<Option<UrlRecord>>;

    async fn find_by_short_code(&self, code: &str) -> Result<Option<UrlRecord>>;

    /// Persist a new record; never overwrites
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord>;

    async fn count(&self) -> Result<u64>;

    fn backend_name(&self) -> &str;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<dyn UrlStore>> {
        let database_url = &config.database_url;

        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(database_url)?;

        if backend_type == "memory" {
            return Ok(Arc::new(MemoryStorage::new()));
        }

        let storage = SeaOrmStorage::new(config, &backend_type).await?;
        Ok(Arc::new(storage))
    }
}
