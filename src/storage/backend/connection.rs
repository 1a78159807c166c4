//! Pool setup for the SQL backends

use std::str::FromStr;
use std::time::Duration;

use sea_orm::sqlx::SqlitePool;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::errors::{Result, ShortenerError};
use migration::{Migrator, MigratorTrait};

const SQLITE_BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const POOL_CONNECT_TIMEOUT: Duration = Duration::from_secs(8);
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(300);
const POOL_MAX_LIFETIME: Duration = Duration::from_secs(3600);

// WAL lets lookups proceed while an insert holds the write lock
fn sqlite_options(database_url: &str) -> Result<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| ShortenerError::database_config(format!("Invalid SQLite URL: {}", e)))?;

    Ok(options
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(SQLITE_BUSY_TIMEOUT))
}

pub async fn connect_sqlite(database_url: &str) -> Result<DatabaseConnection> {
    let pool = SqlitePool::connect_with(sqlite_options(database_url)?)
        .await
        .map_err(|e| {
            ShortenerError::database_connection(format!("Cannot open SQLite database: {}", e))
        })?;

    debug!("SQLite pool ready for {}", database_url);
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// MySQL / PostgreSQL pool sized from `database.pool_size`
pub async fn connect_pooled(
    config: &DatabaseConfig,
    backend_name: &str,
) -> Result<DatabaseConnection> {
    let pool_size = config.pool_size.max(1);

    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(pool_size)
        .min_connections(pool_size.min(5))
        .connect_timeout(POOL_CONNECT_TIMEOUT)
        .acquire_timeout(POOL_CONNECT_TIMEOUT)
        .idle_timeout(POOL_IDLE_TIMEOUT)
        .max_lifetime(POOL_MAX_LIFETIME)
        .sqlx_logging(false);

    Database::connect(options).await.map_err(|e| {
        ShortenerError::database_connection(format!(
            "Cannot reach {} at the configured database_url: {}",
            backend_name.to_uppercase(),
            e
        ))
    })
}

/// Bring the `urls` schema up to date
pub async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .map_err(|e| ShortenerError::database_operation(format!("Migration failed: {}", e)))?;

    info!("Schema for urls is up to date");
    Ok(())
}
