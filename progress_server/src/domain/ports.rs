use async_trait::async_trait;
use progress_core::ProgressRecord;

// Port for per-learner progress storage used by progress use cases.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn get_or_create(&self, user_id: &str) -> Result<ProgressRecord, String>;
    // Applies one completion atomically and returns the stored record.
    async fn record_completion(
        &self,
        user_id: &str,
        content_id: &str,
        points: i64,
    ) -> Result<ProgressRecord, String>;
}
