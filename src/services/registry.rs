use crate::models::FileRecord;
use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(String),

    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Registry mapping a file id to its metadata and progress value.
///
/// One record has exactly one writer (the progress worker spawned at upload)
/// and any number of readers, so `set_progress` does not need to be atomic
/// with respect to concurrent writers. Last write wins.
#[async_trait]
pub trait FileRecordStore: Send + Sync {
    /// Inserts or overwrites the record keyed by its id.
    async fn put(&self, record: FileRecord) -> Result<(), StoreError>;

    /// Returns the current record, or `None` for an unknown id.
    async fn get(&self, id: &str) -> Result<Option<FileRecord>, StoreError>;

    /// Updates the progress field of an existing record.
    async fn set_progress(&self, id: &str, progress: u8) -> Result<(), StoreError>;
}

/// Process-local record store. An external key-value backend would implement
/// the same trait; handlers and workers only ever see the trait object.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: DashMap<String, FileRecord>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileRecordStore for InMemoryRecordStore {
    async fn put(&self, record: FileRecord) -> Result<(), StoreError> {
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<FileRecord>, StoreError> {
        Ok(self.records.get(id).map(|r| r.clone()))
    }

    async fn set_progress(&self, id: &str, progress: u8) -> Result<(), StoreError> {
        match self.records.get_mut(id) {
            Some(mut record) => {
                record.progress = progress;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = InMemoryRecordStore::new();
        let record = FileRecord::new("id-1".to_string(), "a.pdf".to_string(), Some(42));
        store.put(record).await.unwrap();

        let fetched = store.get("id-1").await.unwrap().unwrap();
        assert_eq!(fetched.filename, "a.pdf");
        assert_eq!(fetched.progress, 0);
        assert_eq!(fetched.size, Some(42));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = InMemoryRecordStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites_by_id() {
        let store = InMemoryRecordStore::new();
        store
            .put(FileRecord::new("id-1".into(), "old.pdf".into(), None))
            .await
            .unwrap();
        store
            .put(FileRecord::new("id-1".into(), "new.pdf".into(), None))
            .await
            .unwrap();

        let fetched = store.get("id-1").await.unwrap().unwrap();
        assert_eq!(fetched.filename, "new.pdf");
    }

    #[tokio::test]
    async fn test_set_progress() {
        let store = InMemoryRecordStore::new();
        store
            .put(FileRecord::new("id-1".into(), "a.pdf".into(), None))
            .await
            .unwrap();

        store.set_progress("id-1", 70).await.unwrap();
        assert_eq!(store.get("id-1").await.unwrap().unwrap().progress, 70);
    }

    #[tokio::test]
    async fn test_set_progress_missing_record() {
        let store = InMemoryRecordStore::new();
        let err = store.set_progress("ghost", 50).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
