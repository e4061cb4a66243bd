use std::path::Path;

use crate::IngestError;

/// Largest upload accepted by default (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

const MIB: usize = 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";
const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// The kind of document handed to ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    PlainText,
}

/// Human-readable upload limit: whole mebibytes as `NMB`, anything else in bytes.
pub fn limit_label(limit: usize) -> String {
    if limit >= MIB && limit % MIB == 0 {
        format!("{}MB", limit / MIB)
    } else {
        format!("{limit} bytes")
    }
}

/// Detect file type from extension and magic bytes.
///
/// Text extensions are trusted as-is. Anything else must carry the PDF
/// magic bytes, including files named `.pdf`.
pub fn detect_file_type(filename: &str, data: &[u8]) -> Result<FileType, IngestError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        return Ok(FileType::PlainText);
    }
    if data.starts_with(PDF_MAGIC) {
        return Ok(FileType::Pdf);
    }
    Err(IngestError::UnsupportedFileType)
}

/// Check an uploaded document the way the upload form does: PDF only, at
/// most `max_bytes` long. Type is checked before size.
pub fn validate_pdf_upload(data: &[u8], max_bytes: usize) -> Result<(), IngestError> {
    if !data.starts_with(PDF_MAGIC) {
        return Err(IngestError::UnsupportedFileType);
    }
    if data.len() > max_bytes {
        return Err(IngestError::FileTooLarge {
            size: data.len(),
            limit: max_bytes,
        });
    }
    Ok(())
}
