use crate::config::AppConfig;
use crate::services::storage::DiskStorage;
use std::sync::Arc;
use tracing::info;

/// Creates the upload directory if needed and hands back the blob store.
pub async fn setup_storage(config: &AppConfig) -> anyhow::Result<Arc<DiskStorage>> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    info!("📁 Upload dir: {}", config.upload_dir.display());

    Ok(Arc::new(DiskStorage::new(&config.upload_dir)))
}
