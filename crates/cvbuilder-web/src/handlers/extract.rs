use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use super::error_response;
use crate::models::ExtractRequest;
use crate::state::AppState;

/// `POST /api/extract`: run the detectors on already-extracted text.
pub async fn extract(
    State(state): State<Arc<AppState>>,
    req: Result<Json<ExtractRequest>, JsonRejection>,
) -> Response {
    match req {
        Ok(Json(req)) => Json(state.extractor.extract(&req.text)).into_response(),
        Err(rejection) => error_response(rejection.status(), rejection.body_text()),
    }
}
