//! Write operations for SeaOrmStorage

use sea_orm::EntityTrait;
use tracing::info;

use super::converters::record_to_active_model;
use super::{SeaOrmStorage, retry};
use crate::errors::{Result, ShortenerError};
use crate::storage::UrlRecord;

use migration::entities::url;

impl SeaOrmStorage {
    /// Plain INSERT; unique-index conflicts surface as `UniquenessViolation`
    pub async fn insert_record(&self, record: UrlRecord) -> Result<UrlRecord> {
        let db = &self.db;
        let active_model = record_to_active_model(&record);

        retry::with_retry(
            &format!("insert({})", record.short_url),
            self.retry_config,
            || async {
                url::Entity::insert(active_model.clone())
                    .exec_without_returning(db)
                    .await
            },
        )
        .await
        .map_err(|e| match ShortenerError::from(e) {
            ShortenerError::DatabaseOperation(msg) => ShortenerError::database_operation(format!(
                "insert of '{}' failed: {}",
                record.short_url, msg
            )),
            other => other,
        })?;

        info!("Short url stored: {} -> {}", record.short_url, record.sanitized_url);
        Ok(record)
    }
}
