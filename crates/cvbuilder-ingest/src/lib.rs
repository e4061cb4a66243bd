use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use cvbuilder_core::{BackendError, PdfBackend, ResumeRecord};
use cvbuilder_parsing::ResumeExtractor;

pub mod upload;

pub use upload::{DEFAULT_MAX_UPLOAD_BYTES, FileType, detect_file_type, validate_pdf_upload};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Please upload a valid PDF file.")]
    UnsupportedFileType,
    #[error("File size must be less than {}.", upload::limit_label(*.limit))]
    FileTooLarge { size: usize, limit: usize },
    /// The backend could not turn the document into text. Callers surface
    /// this as one generic failure; the extractor never runs.
    #[error("Failed to process PDF")]
    ExtractionFailed(#[source] BackendError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown PDF backend: {0} (expected `mupdf` or `pdf-extract`)")]
    UnknownBackend(String),
    #[error("PDF backend `{0}` not compiled in (enable the `{0}` feature of cvbuilder-ingest)")]
    BackendUnavailable(BackendKind),
}

/// Selectable PDF text backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Mupdf,
    PdfExtract,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Mupdf => "mupdf",
            BackendKind::PdfExtract => "pdf-extract",
        }
    }

    /// Instantiate the backend, if its crate was compiled in.
    pub fn build(self) -> Result<Box<dyn PdfBackend>, IngestError> {
        match self {
            #[cfg(feature = "mupdf")]
            BackendKind::Mupdf => Ok(Box::new(cvbuilder_pdf_mupdf::MupdfBackend::new())),
            #[cfg(feature = "pdf-extract")]
            BackendKind::PdfExtract => {
                Ok(Box::new(cvbuilder_pdf_extract::PdfExtractBackend::new()))
            }
            #[allow(unreachable_patterns)]
            other => Err(IngestError::BackendUnavailable(other)),
        }
    }
}

impl Default for BackendKind {
    fn default() -> Self {
        if cfg!(feature = "mupdf") {
            BackendKind::Mupdf
        } else {
            BackendKind::PdfExtract
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mupdf" => Ok(BackendKind::Mupdf),
            "pdf-extract" | "pdf_extract" => Ok(BackendKind::PdfExtract),
            _ => Err(IngestError::UnknownBackend(s.to_string())),
        }
    }
}

/// Text of a document plus the record extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingested {
    pub text: String,
    pub record: ResumeRecord,
}

/// Run the PDF backend on in-memory bytes.
///
/// Backend failures are logged with their cause and collapsed into
/// [`IngestError::ExtractionFailed`].
pub fn pdf_to_text(data: &[u8], backend: &dyn PdfBackend) -> Result<String, IngestError> {
    match backend.extract_text(data) {
        Ok(text) => {
            tracing::debug!(backend = backend.name(), chars = text.len(), "extracted PDF text");
            Ok(text)
        }
        Err(e) => {
            tracing::warn!(backend = backend.name(), error = %e, "PDF text extraction failed");
            Err(IngestError::ExtractionFailed(e))
        }
    }
}

/// Validate an uploaded PDF and extract its text.
pub fn upload_to_text(
    data: &[u8],
    backend: &dyn PdfBackend,
    max_bytes: usize,
) -> Result<String, IngestError> {
    validate_pdf_upload(data, max_bytes)?;
    pdf_to_text(data, backend)
}

/// Validate an uploaded PDF, extract its text and run the extractor on it.
///
/// No partial record is produced when validation or text extraction fails.
pub fn ingest_upload(
    data: &[u8],
    backend: &dyn PdfBackend,
    extractor: &ResumeExtractor,
    max_bytes: usize,
) -> Result<Ingested, IngestError> {
    let text = upload_to_text(data, backend, max_bytes)?;
    let record = extractor.extract(&text);
    Ok(Ingested { text, record })
}

/// Read a document from disk and return its plain text.
///
/// Dispatches on file type:
/// - `.txt` / `.text` / `.md` → read as UTF-8 (lossy)
/// - PDF magic bytes → `backend`
pub fn document_text(path: &Path, backend: &dyn PdfBackend) -> Result<String, IngestError> {
    let data = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    match detect_file_type(&name, &data)? {
        FileType::PlainText => Ok(String::from_utf8_lossy(&data).into_owned()),
        FileType::Pdf => pdf_to_text(&data, backend),
    }
}

/// Extract a résumé record from a PDF or plain-text file.
pub fn extract_resume_from_path(
    path: &Path,
    backend: &dyn PdfBackend,
    extractor: &ResumeExtractor,
) -> Result<Ingested, IngestError> {
    let text = document_text(path, backend)?;
    let record = extractor.extract(&text);
    Ok(Ingested { text, record })
}
