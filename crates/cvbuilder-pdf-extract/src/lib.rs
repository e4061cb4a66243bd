use cvbuilder_core::{BackendError, PdfBackend};

/// [`PdfBackend`] built on the pure-Rust `pdf-extract` crate.
///
/// No native dependencies, at the cost of weaker layout handling than MuPDF.
/// Panics inside `pdf-extract` are caught and reported as extraction errors.
/// A document whose text layer is empty (scanned images) is reported as an
/// extraction failure rather than as empty text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String, BackendError> {
        // pdf-extract panics on some malformed inputs instead of returning Err
        let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|_| BackendError::ExtractionError("malformed PDF".to_string()))?
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(BackendError::ExtractionError(
                "document has no text layer".to_string(),
            ));
        }
        Ok(text)
    }
}
