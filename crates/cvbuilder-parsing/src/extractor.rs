use cvbuilder_core::ResumeRecord;

use crate::config::ParsingConfig;
use crate::text_processing::PreparedText;
use crate::{contact, section};

/// One field detector in the extraction pipeline.
///
/// A detector reads the prepared text and writes only its own field(s) of
/// the record; it never looks at what other detectors produced. It returns
/// `true` when it found something.
#[derive(Clone, Copy)]
pub struct Detector {
    pub name: &'static str,
    pub run: fn(&PreparedText, &ParsingConfig, &mut ResumeRecord) -> bool,
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector").field("name", &self.name).finish()
    }
}

/// The detectors, in the order they run.
pub static DETECTORS: [Detector; 8] = [
    Detector {
        name: "full_name",
        run: |text, config, record| {
            record.personal_data.full_name =
                contact::extract_full_name_with_config(&text.lines, config);
            !record.personal_data.full_name.is_empty()
        },
    },
    Detector {
        name: "email",
        run: |text, config, record| {
            record.personal_data.email = contact::extract_email_with_config(&text.raw, config);
            !record.personal_data.email.is_empty()
        },
    },
    Detector {
        name: "phone",
        run: |text, config, record| {
            record.personal_data.phone = contact::extract_phone_with_config(&text.raw, config);
            !record.personal_data.phone.is_empty()
        },
    },
    Detector {
        name: "address",
        run: |text, config, record| {
            record.personal_data.address =
                contact::extract_address_with_config(&text.lines, config);
            !record.personal_data.address.is_empty()
        },
    },
    Detector {
        name: "summary",
        run: |text, config, record| {
            record.personal_data.summary =
                section::extract_summary_with_config(&text.lines, config);
            !record.personal_data.summary.is_empty()
        },
    },
    Detector {
        name: "education",
        run: |text, config, record| {
            record.education = section::extract_education_with_config(&text.lines, config);
            !record.education.is_empty()
        },
    },
    Detector {
        name: "work_experience",
        run: |text, config, record| {
            record.work_experience =
                section::extract_work_experience_with_config(&text.lines, config);
            !record.work_experience.is_empty()
        },
    },
    Detector {
        name: "technical_skills",
        run: |text, config, record| {
            record.skills.technical =
                section::extract_technical_skills_with_config(&text.lines, config);
            !record.skills.technical.is_empty()
        },
    },
];

/// A configurable heuristic résumé extractor.
///
/// Holds a [`ParsingConfig`] and runs every [`Detector`] once over the
/// prepared text. Extraction cannot fail: whatever is not found stays at
/// its empty default.
#[derive(Debug, Clone)]
pub struct ResumeExtractor {
    config: ParsingConfig,
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParsingConfig::default(),
        }
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(config: ParsingConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the current config.
    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    /// The detector pipeline, in run order.
    pub fn detectors(&self) -> &'static [Detector] {
        &DETECTORS
    }

    /// Normalize raw text into what the detectors consume.
    pub fn prepare(&self, text: &str) -> PreparedText {
        PreparedText::new(text)
    }

    /// Run the full pipeline on raw document text.
    pub fn extract(&self, text: &str) -> ResumeRecord {
        let prepared = self.prepare(text);
        self.extract_prepared(&prepared)
    }

    /// Run the full pipeline on already-prepared text.
    pub fn extract_prepared(&self, prepared: &PreparedText) -> ResumeRecord {
        let mut record = ResumeRecord::default();
        let mut hits = Vec::new();

        for detector in self.detectors() {
            if (detector.run)(prepared, &self.config, &mut record) {
                hits.push(detector.name);
            }
        }

        tracing::debug!(
            lines = prepared.lines.len(),
            found = ?hits,
            "resume extraction complete"
        );
        record
    }
}
