use thiserror::Error;

pub mod config;
pub mod contact;
pub mod extractor;
pub mod section;
pub mod text_processing;

pub use config::{ListOverride, ParsingConfig, ParsingConfigBuilder, Section};
pub use extractor::{DETECTORS, Detector, ResumeExtractor};
pub use text_processing::PreparedText;
// Re-export domain types from core (canonical definitions live there)
pub use cvbuilder_core::ResumeRecord;

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),
    #[error("invalid parsing config: {0}")]
    InvalidConfig(String),
}

/// Extract a best-effort résumé record from plain document text.
///
/// Pipeline:
/// 1. Expand ligatures, split into trimmed non-empty lines
/// 2. Name, address: first matching line
/// 3. Email, phone: first match in the raw text
/// 4. Summary, education, work experience, skills: fixed windows after a heading line
///
/// Never fails; undetected fields are left empty.
pub fn extract_resume(text: &str) -> ResumeRecord {
    ResumeExtractor::new().extract(text)
}
