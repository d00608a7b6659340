use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Request payload for recording a lesson completion.
// Fields stay untyped so wrong types surface as validation errors, not parse errors.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProgressRequest {
    #[serde(rename = "contentId")]
    pub content_id: Option<Value>,
    pub points: Option<Value>,
}

// Response payload for the liveness probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
