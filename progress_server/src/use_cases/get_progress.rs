use crate::domain::errors::ProgressError;
use crate::domain::ports::ProgressStore;
use progress_core::ProgressRecord;

// Get-progress use case with injected dependencies.
pub struct GetProgressUseCase<S> {
    pub store: S,
}

impl<S> GetProgressUseCase<S>
where
    S: ProgressStore,
{
    // Unknown learners get a fresh record rather than an error.
    pub async fn execute(&self, user_id: &str) -> Result<ProgressRecord, ProgressError> {
        self.store
            .get_or_create(user_id)
            .await
            .map_err(|_| ProgressError::StorageFailure)
    }
}
