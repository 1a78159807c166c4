//! In-process storage backend
//!
//! Both uniqueness checks and the write happen under one lock, so a
//! conflicting insert is always detected.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use super::{UrlRecord, UrlStore};
use crate::errors::{Result, ShortenerError};

#[derive(Default)]
struct Tables {
    /// short_url -> record
    by_code: HashMap<String, UrlRecord>,
    /// sanitized_url -> short_url
    by_canonical: HashMap<String, String>,
}

#[derive(Default)]
pub struct MemoryStorage {
    tables: Mutex<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlStore for MemoryStorage {
    async fn find_by_canonical(&self, canonical: &str) -> Result<Option<UrlRecord>> {
        let tables = self.tables.lock();
        Ok(tables
            .by_canonical
            .get(canonical)
            .and_then(|code| tables.by_code.get(code))
            .cloned())
    }

    async fn find_by_short_code(&self, code: &str) -> Result<Option<UrlRecord>> {
        Ok(self.tables.lock().by_code.get(code).cloned())
    }

    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord> {
        let mut tables = self.tables.lock();

        if tables.by_canonical.contains_key(&record.sanitized_url) {
            return Err(ShortenerError::uniqueness_violation(format!(
                "urls.sanitized_url: {}",
                record.sanitized_url
            )));
        }
        if tables.by_code.contains_key(&record.short_url) {
            return Err(ShortenerError::uniqueness_violation(format!(
                "urls.short_url: {}",
                record.short_url
            )));
        }

        tables
            .by_canonical
            .insert(record.sanitized_url.clone(), record.short_url.clone());
        tables
            .by_code
            .insert(record.short_url.clone(), record.clone());
        debug!("Stored {} -> {}", record.short_url, record.sanitized_url);

        Ok(record)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.tables.lock().by_code.len() as u64)
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let store = MemoryStorage::new();
        let record = UrlRecord::new("google.com", "http://google.com", "AbC123");
        store.insert(record.clone()).await.unwrap();

        assert_eq!(
            store.find_by_canonical("http://google.com").await.unwrap(),
            Some(record.clone())
        );
        assert_eq!(store.find_by_short_code("AbC123").await.unwrap(), Some(record));
        assert!(store.find_by_short_code("abc123").await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_canonical_rejected() {
        let store = MemoryStorage::new();
        store
            .insert(UrlRecord::new("google.com", "http://google.com", "aaaaaa"))
            .await
            .unwrap();
        let err = store
            .insert(UrlRecord::new("www.google.com", "http://google.com", "bbbbbb"))
            .await
            .unwrap_err();
        assert!(err.is_uniqueness_violation());
        assert!(store.find_by_short_code("bbbbbb").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_code_rejected() {
        let store = MemoryStorage::new();
        store
            .insert(UrlRecord::new("google.com", "http://google.com", "aaaaaa"))
            .await
            .unwrap();
        let err = store
            .insert(UrlRecord::new("rust-lang.org", "http://rust-lang.org", "aaaaaa"))
            .await
            .unwrap_err();
        assert!(err.is_uniqueness_violation());
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
