// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides shared access to the SQLite pool, storage layers and image store

use std::path::PathBuf;
use std::sync::Arc;

use folio_security::{TokenStorage, UserStorage};
use folio_storage::{connect, PoolSettings, StorageError};
use folio_tags::TagStorage;
use sqlx::SqlitePool;
use tracing::info;

use crate::images::ImageStore;
use crate::storage::ProjectStorage;

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub project_storage: Arc<ProjectStorage>,
    pub tag_storage: Arc<TagStorage>,
    pub user_storage: Arc<UserStorage>,
    pub token_storage: Arc<TokenStorage>,
    pub image_store: Arc<ImageStore>,
}

impl DbState {
    /// Create new state from a SQLite pool
    pub fn new(pool: SqlitePool, image_store: ImageStore, token_validity_secs: i64) -> Self {
        Self {
            project_storage: Arc::new(ProjectStorage::new(pool.clone())),
            tag_storage: Arc::new(TagStorage::new(pool.clone())),
            user_storage: Arc::new(UserStorage::new(pool.clone())),
            token_storage: Arc::new(TokenStorage::new(pool, token_validity_secs)),
            image_store: Arc::new(image_store),
        }
    }

    /// Open the database at `database_path`, run migrations and prepare the image directory
    pub async fn init(
        database_path: PathBuf,
        images_dir: PathBuf,
        token_validity_secs: i64,
    ) -> Result<Self, StorageError> {
        let pool = connect(&database_path, &PoolSettings::default()).await?;

        let image_store = ImageStore::new(images_dir);
        image_store.ensure_dir().await?;

        info!(
            database = %database_path.display(),
            images = %image_store.root().display(),
            "Storage initialized"
        );

        Ok(Self::new(pool, image_store, token_validity_secs))
    }
}
