use xxhash_rust::xxh3::xxh3_128;

use crate::storage::UrlRecord;
use migration::entities::url;

/// 规范 URL 的定长指纹，唯一索引建在这一列上
pub fn canonical_hash(canonical: &str) -> String {
    format!("{:032x}", xxh3_128(canonical.as_bytes()))
}

/// 将 Sea-ORM Model 转换为 UrlRecord
pub fn model_to_record(model: url::Model) -> UrlRecord {
    UrlRecord {
        original_url: model.original_url,
        sanitized_url: model.sanitized_url,
        short_url: model.short_url,
        created_at: model.created_at,
    }
}

/// 将 UrlRecord 转换为 ActiveModel（仅用于插入）
pub fn record_to_active_model(record: &UrlRecord) -> url::ActiveModel {
    use sea_orm::ActiveValue::Set;

    url::ActiveModel {
        short_url: Set(record.short_url.clone()),
        original_url: Set(record.original_url.clone()),
        sanitized_url: Set(record.sanitized_url.clone()),
        sanitized_hash: Set(canonical_hash(&record.sanitized_url)),
        created_at: Set(record.created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::ActiveValue;

    #[test]
    fn test_model_to_record() {
        let now = Utc::now();
        let record = model_to_record(url::Model {
            short_url: "AbC123".to_string(),
            original_url: " Google.com".trim().to_string(),
            sanitized_url: "http://google.com".to_string(),
            sanitized_hash: canonical_hash("http://google.com"),
            created_at: now,
        });

        assert_eq!(record.short_url, "AbC123");
        assert_eq!(record.original_url, "Google.com");
        assert_eq!(record.sanitized_url, "http://google.com");
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_record_to_active_model_sets_every_column() {
        let record = UrlRecord::new("github.com", "http://github.com", "xYz789");
        let model = record_to_active_model(&record);

        assert_eq!(model.short_url, ActiveValue::Set("xYz789".to_string()));
        assert_eq!(model.original_url, ActiveValue::Set("github.com".to_string()));
        assert_eq!(
            model.sanitized_url,
            ActiveValue::Set("http://github.com".to_string())
        );
        assert_eq!(
            model.sanitized_hash,
            ActiveValue::Set(canonical_hash("http://github.com"))
        );
        assert_eq!(model.created_at, ActiveValue::Set(record.created_at));
    }

    #[test]
    fn test_canonical_hash_is_fixed_width() {
        let short = canonical_hash("http://a.io");
        let long = canonical_hash(&format!("http://example.com/?q={}", "x".repeat(5000)));
        assert_eq!(short.len(), 32);
        assert_eq!(long.len(), 32);
        assert!(long.bytes().all(|b| b.is_ascii_hexdigit()));
        assert_eq!(short, canonical_hash("http://a.io"));
        assert_ne!(canonical_hash("http://google.com/a"), canonical_hash("http://google.com/b"));
    }
}
