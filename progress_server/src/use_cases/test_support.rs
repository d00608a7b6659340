use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use progress_core::ProgressRecord;

use crate::domain::ports::ProgressStore;

pub(crate) type RecordTable = Arc<Mutex<HashMap<String, ProgressRecord>>>;

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get_or_create: bool,
    pub record_completion: bool,
}

// Fake store that keeps records in memory and counts writes.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    records: RecordTable,
    writes: Arc<Mutex<usize>>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            writes: Arc::new(Mutex::new(0)),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_record(&self, record: ProgressRecord) {
        let mut guard = self.records.lock().expect("records mutex poisoned");
        guard.insert(record.user_id.clone(), record);
    }

    pub(crate) fn get_test_record(&self, user_id: &str) -> Option<ProgressRecord> {
        let guard = self.records.lock().expect("records mutex poisoned");
        guard.get(user_id).cloned()
    }

    pub(crate) fn write_count(&self) -> usize {
        *self.writes.lock().expect("writes mutex poisoned")
    }
}

#[async_trait]
impl ProgressStore for RecordingStore {
    async fn get_or_create(&self, user_id: &str) -> Result<ProgressRecord, String> {
        if self.failures.get_or_create {
            return Err("get_or_create failed".to_string());
        }

        let mut guard = self.records.lock().expect("records mutex poisoned");
        let record = guard
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
        if self.failures.record_completion {
            return Err("record_completion failed".to_string());
        }

        let mut guard = self.records.lock().expect("records mutex poisoned");
        let current = guard
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| ProgressRecord::new(user_id));
        let updated = current.record_completion(content_id, points);
        guard.insert(user_id.to_string(), updated.clone());
        *self.writes.lock().expect("writes mutex poisoned") += 1;
        Ok(updated)
    }
}
