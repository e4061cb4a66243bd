use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cvbuilder_ingest::IngestError;

use crate::models::{ErrorResponse, HealthResponse};

pub mod extract;
pub mod upload;

/// Message returned for every failure past validation.
pub const GENERIC_FAILURE: &str = "Failed to process PDF";

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Validation errors go back verbatim as 400; anything else is one generic 500.
pub fn ingest_error_response(err: IngestError) -> Response {
    match err {
        IngestError::UnsupportedFileType | IngestError::FileTooLarge { .. } => {
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        other => {
            tracing::warn!(error = ?other, "upload processing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
        }
    }
}

pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
