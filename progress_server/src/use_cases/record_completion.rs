use crate::domain::errors::ProgressError;
use crate::domain::ports::ProgressStore;
use crate::interface_adapters::protocol::UpdateProgressRequest;
use progress_core::ProgressRecord;
use serde_json::Value;

// Record-completion use case with injected dependencies.
pub struct RecordCompletionUseCase<S> {
    pub store: S,
}

impl<S> RecordCompletionUseCase<S>
where
    S: ProgressStore,
{
    pub async fn execute(
        &self,
        user_id: &str,
        request: UpdateProgressRequest,
    ) -> Result<ProgressRecord, ProgressError> {
        let content_id = validate_content_id(request.content_id.as_ref())?;
        let points = validate_points(request.points.as_ref())?;

        self.store
            .record_completion(user_id, content_id, points)
            .await
            .map_err(|_| ProgressError::StorageFailure)
    }
}

fn validate_content_id(content_id: Option<&Value>) -> Result<&str, ProgressError> {
    match content_id.and_then(Value::as_str) {
        Some(content_id) if !content_id.is_empty() => Ok(content_id),
        _ => Err(ProgressError::MissingContentId),
    }
}

// Accept any JSON number with an integral value that fits in i64 (10 and 10.0 alike).
fn validate_points(points: Option<&Value>) -> Result<i64, ProgressError> {
    let number = match points {
        Some(Value::Number(number)) => number,
        _ => return Err(ProgressError::InvalidPoints),
    };

    if let Some(points) = number.as_i64() {
        return Ok(points);
    }

    match number.as_f64() {
        Some(points)
            if points.fract() == 0.0
                && points >= i64::MIN as f64
                && points < i64::MAX as f64 =>
        {
            Ok(points as i64)
        }
        _ => Err(ProgressError::InvalidPoints),
    }
}
