//! Test utilities shared by the packages that sit on top of storage

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::pool::run_migrations;

/// In-memory database with the full schema applied.
///
/// A single connection is used so every query sees the same memory database.
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid in-memory url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create in-memory database");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
