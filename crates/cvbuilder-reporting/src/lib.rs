//! Rendering of extracted résumé records.
//!
//! JSON carries the record verbatim. Markdown and plain text follow the
//! printable preview: header, contact line, then summary, work experience,
//! education, skills and certificates, omitting empty sections.

pub mod export;
pub mod types;

pub use export::{ExportError, export_record, render};
pub use types::ExportFormat;
