use crate::domain::errors::ProgressError;
use crate::interface_adapters::protocol::{ErrorResponse, HealthResponse, UpdateProgressRequest};
use crate::interface_adapters::state::AppState;
use crate::use_cases::get_progress::GetProgressUseCase;
use crate::use_cases::record_completion::RecordCompletionUseCase;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
};
use progress_core::{ContentEntry, ProgressRecord, content};
use tracing::{info, warn};

// Handler for reading a learner's progress.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProgressRecord>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = GetProgressUseCase {
        store: state.progress.clone(),
    };

    let record = use_case.execute(&user_id).await.map_err(map_progress_error)?;

    Ok(Json(record))
}

// Handler for recording a lesson completion.
// The raw body is parsed here so malformed JSON maps to 400 rather than axum's defaults.
// Non-JSON content types are read as an empty body and fail validation.
pub async fn update_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ProgressRecord>, (StatusCode, Json<ErrorResponse>)> {
    let payload: UpdateProgressRequest = if is_json_content_type(&headers) {
        serde_json::from_slice(&body).map_err(|err| {
            warn!(%user_id, error = %err, "malformed progress update body");
            error_response(StatusCode::BAD_REQUEST, "malformed request body")
        })?
    } else {
        UpdateProgressRequest::default()
    };

    let use_case = RecordCompletionUseCase {
        store: state.progress.clone(),
    };

    let record = use_case
        .execute(&user_id, payload)
        .await
        .map_err(|err| {
            warn!(%user_id, error = ?err, "progress update rejected");
            map_progress_error(err)
        })?;

    info!(
        %user_id,
        total_points = record.progress.total_points,
        level = record.progress.level,
        completed = record.progress.completed_content.len(),
        "progress updated"
    );

    Ok(Json(record))
}

// Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now(),
    })
}

pub async fn list_content() -> Json<&'static [ContentEntry]> {
    Json(content::all())
}

pub async fn get_content(
    Path(content_id): Path<String>,
) -> Result<Json<&'static ContentEntry>, (StatusCode, Json<ErrorResponse>)> {
    content::find(&content_id)
        .map(Json)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "content not found"))
}

// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    error_response(StatusCode::NOT_FOUND, "not found")
}

// application/json, or any application/*+json subtype; parameters are ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()) else {
        return false;
    };
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.strip_prefix("application/") {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn map_progress_error(err: ProgressError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ProgressError::MissingContentId | ProgressError::InvalidPoints => error_response(
            StatusCode::BAD_REQUEST,
            "contentId and points are required",
        ),
        ProgressError::StorageFailure => error_response(StatusCode::BAD_GATEWAY, "storage error"),
    }
}
