use std::sync::Arc;

use cvbuilder_core::PdfBackend;
use cvbuilder_parsing::ResumeExtractor;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub backend: Arc<dyn PdfBackend>,
    pub extractor: ResumeExtractor,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn PdfBackend>,
        extractor: ResumeExtractor,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            backend,
            extractor,
            max_upload_bytes,
        }
    }
}
