use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors turn document bytes into plain text; the field detection
/// pipeline lives in `cvbuilder_parsing::ResumeExtractor`. Backends are
/// blocking and must not hold per-call state.
pub trait PdfBackend: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Extract the full text content of an in-memory PDF.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, BackendError>;

    /// Read a PDF from disk and extract its text.
    fn extract_text_from_path(&self, path: &Path) -> Result<String, BackendError> {
        let bytes = std::fs::read(path)?;
        self.extract_text(&bytes)
    }
}
