// ABOUTME: SQLite connection pool creation and schema migrations
// ABOUTME: Connections enforce foreign keys so association rows cascade

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};

/// Pool tuning knobs
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            busy_timeout_seconds: 30,
        }
    }
}

/// Open (creating if needed) the database at `database_path` and run migrations
pub async fn connect(database_path: &Path, settings: &PoolSettings) -> StorageResult<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
        }
    }

    debug!("Connecting to database: {}", database_path.display());

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(settings.busy_timeout_seconds));

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.busy_timeout_seconds))
        .connect_with(options)
        .await
        .map_err(StorageError::Sqlx)?;

    info!("Database connection established");

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Apply the embedded schema migrations
pub async fn run_migrations(pool: &SqlitePool) -> StorageResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(StorageError::Migration)?;

    debug!("Database migrations completed");
    Ok(())
}
