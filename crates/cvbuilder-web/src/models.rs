use serde::{Deserialize, Serialize};

/// Body of `POST /api/upload-pdf` responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}

/// Body of `POST /api/extract` requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
