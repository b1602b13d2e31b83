use anyhow::Result;
use std::path::{Path, PathBuf};

/// Blob store persisting raw upload bytes on the local filesystem,
/// addressed by file id.
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    /// Writes `data` under `id` and returns the number of bytes persisted.
    pub async fn store(&self, id: &str, data: &[u8]) -> Result<i64> {
        let path = self.path_for(id);
        tokio::fs::write(&path, data).await?;
        Ok(data.len() as i64)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
