use crate::services::registry::FileRecordStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Spawns the simulated-processing worker for one uploaded file.
///
/// The task is fire-and-forget: the upload handler never joins it and there
/// is no cancellation path. The handle is returned for tests that want to
/// await completion.
pub fn spawn_processing(
    store: Arc<dyn FileRecordStore>,
    file_id: String,
    total_steps: u32,
    step_delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        run_processing(store, file_id, total_steps, step_delay).await;
    })
}

/// Advances the record's progress from 0 to 100 in `total_steps` increments
/// of `100 / total_steps` (integer division), sleeping `step_delay` before
/// each write. The final step writes exactly 100 to absorb rounding. A store
/// write failure is logged and the worker abandoned; progress then stays
/// frozen below 100.
async fn run_processing(
    store: Arc<dyn FileRecordStore>,
    file_id: String,
    total_steps: u32,
    step_delay: Duration,
) {
    let total_steps = total_steps.max(1);
    let step_size = 100 / total_steps;

    for step in 1..=total_steps {
        sleep(step_delay).await;

        let progress = if step == total_steps {
            100
        } else {
            (step * step_size) as u8
        };

        if let Err(e) = store.set_progress(&file_id, progress).await {
            tracing::error!(
                "Abandoning processing of {}: progress write failed: {}",
                file_id,
                e
            );
            return;
        }
    }

    tracing::info!("✅ Processing complete for {}", file_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileRecord;
    use crate::services::registry::InMemoryRecordStore;

    async fn seeded_store(id: &str) -> Arc<dyn FileRecordStore> {
        let store = InMemoryRecordStore::new();
        let record = FileRecord::new(id.to_string(), "file.pdf".to_string(), None);
        store.put(record).await.unwrap();
        Arc::new(store)
    }

    #[tokio::test]
    async fn test_worker_reaches_exactly_100() {
        let store = seeded_store("f1").await;
        let handle = spawn_processing(
            store.clone(),
            "f1".to_string(),
            10,
            Duration::from_millis(1),
        );
        handle.await.unwrap();

        let record = store.get("f1").await.unwrap().unwrap();
        assert_eq!(record.progress, 100);
    }

    #[tokio::test]
    async fn test_final_step_absorbs_rounding() {
        // 100 / 3 = 33, so steps land on 33, 66, then a forced 100.
        let store = seeded_store("f2").await;
        let handle = spawn_processing(
            store.clone(),
            "f2".to_string(),
            3,
            Duration::from_millis(1),
        );
        handle.await.unwrap();

        assert_eq!(store.get("f2").await.unwrap().unwrap().progress, 100);
    }

    #[tokio::test]
    async fn test_missing_record_abandons_without_panic() {
        let store: Arc<dyn FileRecordStore> = Arc::new(InMemoryRecordStore::new());
        let handle = spawn_processing(
            store.clone(),
            "ghost".to_string(),
            5,
            Duration::from_millis(1),
        );
        // Worker exits on the first failed write instead of panicking.
        handle.await.unwrap();
        assert!(store.get("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_intermediate_progress_visible_mid_run() {
        let store = seeded_store("f3").await;
        let handle = spawn_processing(
            store.clone(),
            "f3".to_string(),
            4,
            Duration::from_millis(20),
        );

        // Before the first delay elapses the record still reads 0.
        let record = store.get("f3").await.unwrap().unwrap();
        assert_eq!(record.progress, 0);

        handle.await.unwrap();
        assert_eq!(store.get("f3").await.unwrap().unwrap().progress, 100);
    }
}
