use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod backend;
pub mod config_file;
pub mod merge;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};

/// Contact details and the free-text professional summary.
///
/// Every field may be empty; nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub summary: String,
}

/// One education history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    /// Opaque token, unique within its list.
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}

/// One work history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub currently_working: bool,
    /// Bullet points, kept in display order.
    pub responsibilities: Vec<String>,
}

/// A spoken language and how well it is spoken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSkill {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    /// Set-like; insertion order is kept.
    pub technical: Vec<String>,
    /// Set-like; insertion order is kept.
    pub soft: Vec<String>,
    pub languages: Vec<LanguageSkill>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty() && self.languages.is_empty()
    }
}

/// The aggregate résumé: everything the builder's forms hold.
///
/// Produced by the heuristic extractor and handed to the caller, who owns it
/// from then on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub personal_data: PersonalData,
    pub education: Vec<Education>,
    pub certificates: Vec<Certificate>,
    pub work_experience: Vec<WorkExperience>,
    pub skills: Skills,
}

impl ResumeRecord {
    /// Names of the top-level fields that carry a value.
    ///
    /// Used for extraction summaries; the order is the record's field order.
    pub fn populated_fields(&self) -> Vec<&'static str> {
        let p = &self.personal_data;
        let mut fields = Vec::new();
        for (name, value) in [
            ("fullName", &p.full_name),
            ("email", &p.email),
            ("phone", &p.phone),
            ("address", &p.address),
            ("city", &p.city),
            ("postalCode", &p.postal_code),
            ("summary", &p.summary),
        ] {
            if !value.is_empty() {
                fields.push(name);
            }
        }
        if !self.education.is_empty() {
            fields.push("education");
        }
        if !self.certificates.is_empty() {
            fields.push("certificates");
        }
        if !self.work_experience.is_empty() {
            fields.push("workExperience");
        }
        if !self.skills.is_empty() {
            fields.push("skills");
        }
        fields
    }
}

/// Language proficiency levels offered by the skills form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    Native,
    Fluent,
    Advanced,
    Intermediate,
    Basic,
}

impl Proficiency {
    pub const ALL: [Proficiency; 5] = [
        Proficiency::Native,
        Proficiency::Fluent,
        Proficiency::Advanced,
        Proficiency::Intermediate,
        Proficiency::Basic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Advanced => "Advanced",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Basic => "Basic",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown proficiency level: {0}")]
pub struct UnknownProficiency(pub String);

impl FromStr for Proficiency {
    type Err = UnknownProficiency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Proficiency::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownProficiency(s.to_string()))
    }
}
