//! # Folio Projects
//!
//! Project persistence for Folio: transactional create, replace and delete of
//! projects with their colors, types, categories and images, plus the on-disk
//! store for uploaded image files.

pub mod db;
pub mod images;
pub mod storage;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use db::DbState;
pub use images::ImageStore;
pub use storage::ProjectStorage;

// Re-export main types from core
pub use folio_core::{Project, ProjectCreateInput};
pub use folio_storage::{StorageError, StorageResult};
pub use folio_tags::{ReclaimReport, Reclaimed};
