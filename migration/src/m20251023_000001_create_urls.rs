use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(urls_table(manager.get_database_backend()))
            .await?;

        // Dedup relies on this index to reject a second row for the same destination.
        // 规范 URL 长度不受限，唯一性落在定长哈希列上
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_urls_sanitized_hash")
                    .table(Url::Table)
                    .col(Url::SanitizedHash)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_urls_created_at")
                    .table(Url::Table)
                    .col(Url::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_urls_created_at").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_urls_sanitized_hash").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Url::Table).to_owned())
            .await
    }
}

fn urls_table(backend: DatabaseBackend) -> TableCreateStatement {
    let mut short_url = ColumnDef::new(Url::ShortUrl);
    short_url.string_len(32).not_null().primary_key();

    // MySQL 默认排序规则大小写不敏感，AbC123 与 abc123 必须是两个短码
    if matches!(backend, DatabaseBackend::MySql) {
        short_url.extra("COLLATE utf8mb4_bin");
    }

    Table::create()
        .table(Url::Table)
        .if_not_exists()
        .col(&mut short_url)
        .col(ColumnDef::new(Url::OriginalUrl).text().not_null())
        .col(ColumnDef::new(Url::SanitizedUrl).text().not_null())
        .col(ColumnDef::new(Url::SanitizedHash).string_len(32).not_null())
        .col(
            ColumnDef::new(Url::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Url {
    #[sea_orm(iden = "urls")]
    Table,
    ShortUrl,
    OriginalUrl,
    SanitizedUrl,
    SanitizedHash,
    CreatedAt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_short_url_is_binary_collated() {
        let sql = urls_table(DatabaseBackend::MySql).to_string(MysqlQueryBuilder);
        assert!(sql.contains("`short_url` varchar(32)"), "{}", sql);
        assert!(sql.contains("COLLATE utf8mb4_bin"), "{}", sql);
    }

    #[test]
    fn test_other_backends_keep_default_collation() {
        let sql = urls_table(DatabaseBackend::Postgres).to_string(PostgresQueryBuilder);
        assert!(!sql.contains("COLLATE"), "{}", sql);
        let sql = urls_table(DatabaseBackend::Sqlite).to_string(SqliteQueryBuilder);
        assert!(!sql.contains("COLLATE"), "{}", sql);
    }

    #[test]
    fn test_sanitized_url_is_unbounded_text() {
        let sql = urls_table(DatabaseBackend::Postgres).to_string(PostgresQueryBuilder);
        assert!(sql.contains(r#""sanitized_url" text"#), "{}", sql);
        assert!(sql.contains(r#""sanitized_hash" varchar(32)"#), "{}", sql);
    }
}
