use async_trait::async_trait;
use std::path::PathBuf;

use super::file_storage::{FileStorage, StorageError, UploadDirectory};

/// Writes uploads below a root directory that is also served at `/uploads`.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(
        &self,
        directory: UploadDirectory,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        let dir = self.root.join(directory.as_str());

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        tokio::fs::write(dir.join(file_name), bytes)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        tracing::debug!(directory = directory.as_str(), file_name, "Stored upload");

        Ok(format!("/uploads/{}/{}", directory.as_str(), file_name))
    }
}
