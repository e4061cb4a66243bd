//! Ingestion pipeline tests against stand-in backends.
//!
//! The backends here never parse PDF structure: one returns canned text,
//! the other always fails, so the tests exercise validation, error mapping
//! and extractor hand-off only.

use cvbuilder_core::{BackendError, PdfBackend};
use cvbuilder_ingest::{
    DEFAULT_MAX_UPLOAD_BYTES, IngestError, document_text, extract_resume_from_path,
    ingest_upload, upload_to_text,
};
use cvbuilder_parsing::ResumeExtractor;

struct CannedBackend(&'static str);

impl PdfBackend for CannedBackend {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn extract_text(&self, _bytes: &[u8]) -> Result<String, BackendError> {
        Ok(self.0.to_string())
    }
}

struct BrokenBackend;

impl PdfBackend for BrokenBackend {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn extract_text(&self, _bytes: &[u8]) -> Result<String, BackendError> {
        Err(BackendError::OpenError("xref table damaged".into()))
    }
}

const PDF_BYTES: &[u8] = b"%PDF-1.7\n%fake body\n";

#[test]
fn upload_runs_extractor_on_backend_text() {
    let backend = CannedBackend("JANE ROE\njane@example.com\nSkills\nRust, Go");
    let ingested = ingest_upload(
        PDF_BYTES,
        &backend,
        &ResumeExtractor::new(),
        DEFAULT_MAX_UPLOAD_BYTES,
    )
    .unwrap();

    assert!(ingested.text.starts_with("JANE ROE"));
    assert_eq!(ingested.record.personal_data.full_name, "JANE ROE");
    assert_eq!(ingested.record.personal_data.email, "jane@example.com");
    assert_eq!(ingested.record.skills.technical, vec!["Rust", "Go"]);
}

#[test]
fn backend_failure_is_generic_extraction_failure() {
    let err = ingest_upload(
        PDF_BYTES,
        &BrokenBackend,
        &ResumeExtractor::new(),
        DEFAULT_MAX_UPLOAD_BYTES,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Failed to process PDF");
    match err {
        IngestError::ExtractionFailed(source) => {
            assert!(source.to_string().contains("xref table damaged"));
        }
        other => panic!("expected ExtractionFailed, got {other:?}"),
    }
}

#[test]
fn non_pdf_upload_never_reaches_backend() {
    let err = upload_to_text(b"GIF89a", &BrokenBackend, DEFAULT_MAX_UPLOAD_BYTES).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFileType));
}

#[test]
fn oversized_upload_is_rejected() {
    let err = upload_to_text(PDF_BYTES, &CannedBackend("x"), 8).unwrap_err();
    assert!(matches!(err, IngestError::FileTooLarge { .. }));
}

#[test]
fn text_file_bypasses_backend() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.txt");
    std::fs::write(&path, "EDUCATION\nMIT\nBSc Computer Science\n2020\n").unwrap();

    let ingested = extract_resume_from_path(&path, &BrokenBackend, &ResumeExtractor::new()).unwrap();
    assert_eq!(ingested.record.education[0].institution, "MIT");
    assert_eq!(ingested.record.education[0].end_date, "2020");
}

#[test]
fn pdf_file_goes_through_backend() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.pdf");
    std::fs::write(&path, PDF_BYTES).unwrap();

    let text = document_text(&path, &CannedBackend("from backend")).unwrap();
    assert_eq!(text, "from backend");

    let err = document_text(&path, &BrokenBackend).unwrap_err();
    assert!(matches!(err, IngestError::ExtractionFailed(_)));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = document_text(&dir.path().join("absent.pdf"), &BrokenBackend).unwrap_err();
    assert!(matches!(err, IngestError::Io(_)));
}
