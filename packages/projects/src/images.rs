// ABOUTME: Image file store backing the images endpoint
// ABOUTME: Writes uploads under nonce-prefixed sanitized names and reads them back by plain filename

use std::path::{Path, PathBuf};

use folio_core::{is_plain_filename, prefixed_filename};
use folio_storage::StorageError;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the image directory if it does not exist yet
    pub async fn ensure_dir(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(StorageError::Io)
    }

    /// Write an upload and return the name it is stored under.
    ///
    /// Never overwrites: a name collision surfaces as an IO error.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let stored_name = prefixed_filename(original_name);
        let path = self.root.join(&stored_name);

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(StorageError::Io)?;
        file.write_all(bytes).await.map_err(StorageError::Io)?;
        file.flush().await.map_err(StorageError::Io)?;

        debug!("Stored upload {} as {}", original_name, stored_name);
        Ok(stored_name)
    }

    /// Path of a stored image, or `None` when the name could escape the directory
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        if is_plain_filename(name) {
            Some(self.root.join(name))
        } else {
            None
        }
    }

    /// Bytes of a stored image; `None` when the name is unsafe or nothing is stored under it
    pub async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let Some(path) = self.path_for(name) else {
            warn!("Rejected image name {:?}", name);
            return Ok(None);
        };

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    /// Remove stored uploads, used when the project they belonged to was never saved
    pub async fn discard(&self, names: &[String]) {
        for name in names {
            let Some(path) = self.path_for(name) else {
                continue;
            };
            if let Err(e) = tokio::fs::remove_file(&path).await {
                warn!("Failed to remove unused upload {}: {}", name, e);
            }
        }
    }
}
