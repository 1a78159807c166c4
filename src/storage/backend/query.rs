//! Read-only operations for SeaOrmStorage

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use tracing::error;

use super::converters::{canonical_hash, model_to_record};
use super::{SeaOrmStorage, retry};
use crate::errors::{Result, ShortenerError};
use crate::storage::UrlRecord;

use migration::entities::url;

impl SeaOrmStorage {
    pub async fn get_by_code(&self, code: &str) -> Result<Option<UrlRecord>> {
        let db = &self.db;
        let code_owned = code.to_string();

        retry::with_retry(&format!("get_by_code({})", code), self.retry_config, || async {
            url::Entity::find_by_id(code_owned.clone()).one(db).await
        })
        .await
        .map(|found| found.map(model_to_record))
        .map_err(|e| {
            error!("Short code lookup failed after retries: {}", e);
            ShortenerError::database_operation(format!("lookup by short code failed: {}", e))
        })
    }

    pub async fn get_by_canonical(&self, canonical: &str) -> Result<Option<UrlRecord>> {
        let db = &self.db;
        let canonical_owned = canonical.to_string();
        let hash = canonical_hash(canonical);

        retry::with_retry("get_by_canonical", self.retry_config, || async {
            url::Entity::find()
                .filter(url::Column::SanitizedHash.eq(hash.clone()))
                .filter(url::Column::SanitizedUrl.eq(canonical_owned.clone()))
                .one(db)
                .await
        })
        .await
        .map(|found| found.map(model_to_record))
        .map_err(|e| {
            error!("Canonical lookup failed after retries: {}", e);
            ShortenerError::database_operation(format!("lookup by canonical url failed: {}", e))
        })
    }

    pub async fn count_records(&self) -> Result<u64> {
        let db = &self.db;

        retry::with_retry("count", self.retry_config, || async {
            url::Entity::find().count(db).await
        })
        .await
        .map_err(|e| ShortenerError::database_operation(format!("count failed: {}", e)))
    }
}
