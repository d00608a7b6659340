use async_trait::async_trait;
use progress_core::ProgressRecord;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::ports::ProgressStore;

// Application state shared by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub progress: InMemoryProgressStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            progress: InMemoryProgressStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// In-memory progress store adapter; one instance per process or test.
#[derive(Clone, Default)]
pub struct InMemoryProgressStore {
    pub records: Arc<Mutex<HashMap<String, ProgressRecord>>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: HashMap<String, ProgressRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn get_or_create(&self, user_id: &str) -> Result<ProgressRecord, String> {
        let mut records = self.records.lock().await;
        let record = records
            .entry(user_id.to_string())
            .or_insert_with(|| ProgressRecord::new(user_id));
        Ok(record.clone())
    }

    async fn record_completion(
        &self,
        user_id: &str,
        content_id: &str,
        points: i64,
    ) -> Result<ProgressRecord, String> {
        // Read-modify-write under one lock so concurrent updates never drop points.
        let mut records = self.records.lock().await;
        let record = records
            .entry(user_id.to_string())
            .or_insert_with(|| ProgressRecord::new(user_id));
        *record = record.record_completion(content_id, points);
        Ok(record.clone())
    }
}
