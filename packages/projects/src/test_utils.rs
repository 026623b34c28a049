//! Test utilities for packages that need a fully wired `DbState`

use tempfile::TempDir;

use crate::db::DbState;
use crate::images::ImageStore;

/// In-memory state with a throwaway image directory.
///
/// Keep the returned `TempDir` alive for as long as the state is used.
pub async fn test_state(token_validity_secs: i64) -> (DbState, TempDir) {
    let pool = folio_storage::test_utils::memory_pool().await;
    let dir = TempDir::new().expect("Failed to create image directory");
    let state = DbState::new(pool, ImageStore::new(dir.path()), token_validity_secs);
    (state, dir)
}
