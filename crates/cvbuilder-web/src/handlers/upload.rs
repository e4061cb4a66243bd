use std::sync::Arc;

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cvbuilder_ingest::{IngestError, Ingested};

use super::{GENERIC_FAILURE, error_response, ingest_error_response};
use crate::models::TextResponse;
use crate::state::AppState;
use crate::upload::{NO_FILE, UploadedFile, parse_multipart};

/// `POST /api/upload-pdf`: validate the upload and return its text.
pub async fn upload_pdf(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let file = match read_upload(multipart).await {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match run_ingest(state, file, false).await {
        Ok(ingested) => Json(TextResponse {
            text: ingested.text,
        })
        .into_response(),
        Err(resp) => resp,
    }
}

/// `POST /api/parse-resume`: validate the upload, extract text and run the
/// detectors, returning the record.
pub async fn parse_resume(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let file = match read_upload(multipart).await {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match run_ingest(state, file, true).await {
        Ok(ingested) => Json(ingested.record).into_response(),
        Err(resp) => resp,
    }
}

/// Parse the form, answering "No file uploaded" when the request is not
/// multipart at all.
async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<UploadedFile, Response> {
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(error = %rejection, "request is not a multipart upload");
        error_response(StatusCode::BAD_REQUEST, NO_FILE)
    })?;
    parse_multipart(multipart)
        .await
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e))
}

/// Run validation and the blocking PDF backend off the async runtime.
async fn run_ingest(
    state: Arc<AppState>,
    file: UploadedFile,
    with_record: bool,
) -> Result<Ingested, Response> {
    tracing::debug!(filename = %file.filename, bytes = file.data.len(), "received upload");

    let result = tokio::task::spawn_blocking(move || -> Result<Ingested, IngestError> {
        if with_record {
            cvbuilder_ingest::ingest_upload(
                &file.data,
                state.backend.as_ref(),
                &state.extractor,
                state.max_upload_bytes,
            )
        } else {
            let text = cvbuilder_ingest::upload_to_text(
                &file.data,
                state.backend.as_ref(),
                state.max_upload_bytes,
            )?;
            Ok(Ingested {
                text,
                record: Default::default(),
            })
        }
    })
    .await;

    match result {
        Ok(Ok(ingested)) => Ok(ingested),
        Ok(Err(e)) => Err(ingest_error_response(e)),
        Err(e) => {
            tracing::warn!(error = %e, "extraction task failed");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_FAILURE,
            ))
        }
    }
}
