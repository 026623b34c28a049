// ABOUTME: Storage error type shared by every package that touches the database
// ABOUTME: Wraps sqlx, migration and IO failures plus domain-level not-found/validation

use folio_core::ValidationError;
use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Credential error: {0}")]
    Credential(String),
    #[error("Validation failed: {}", format_validation(.0))]
    Validation(Vec<ValidationError>),
    #[error("Project not found")]
    NotFound,
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type StorageResult<T> = Result<T, StorageError>;
