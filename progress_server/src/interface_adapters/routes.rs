use crate::interface_adapters::handlers::{
    get_content, get_progress, health, list_content, not_found, update_progress,
};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    extract::Request,
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// Build the HTTP router; API routes are mounted under `prefix` ("" or "/" mounts at root).
pub fn app(state: AppState, prefix: &str) -> Router {
    let prefix = normalize_prefix(prefix);

    let api = Router::new()
        .route("/progress/{user_id}", get(get_progress).post(update_progress))
        .route("/content", get(list_content))
        .route("/content/{content_id}", get(get_content));

    let router = Router::new().route("/health", get(health));
    let router = if prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&prefix, api)
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback(not_found)
        .layer(cors)
        .layer(middleware::from_fn(preflight_no_content))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Leading slash, no trailing slash, "" for the root.
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

// Preflight answers carry no body; report them as 204.
async fn preflight_no_content(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;
    if is_options && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}
