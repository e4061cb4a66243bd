//! HTTP front end: PDF upload, text extraction and résumé parsing.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod models;
pub mod settings;
pub mod state;
pub mod upload;

pub use settings::ServerSettings;
pub use state::AppState;

/// Headroom over the upload limit for multipart framing, so oversized files
/// reach validation and get its message rather than a bare 413.
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes.saturating_add(BODY_LIMIT_SLACK));

    Router::new()
        .route("/api/upload-pdf", post(handlers::upload::upload_pdf))
        .route("/api/parse-resume", post(handlers::upload::parse_resume))
        .route("/api/extract", post(handlers::extract::extract))
        .route("/health", get(handlers::health))
        .layer(body_limit)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
