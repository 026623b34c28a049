// ABOUTME: Data layer and persistence for Folio
// ABOUTME: SQLite pool setup, embedded migrations and the shared storage error type

pub mod error;
pub mod pool;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{StorageError, StorageResult};
pub use pool::{connect, run_migrations, PoolSettings};
