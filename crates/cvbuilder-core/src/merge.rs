//! Merging an extracted record into form state the user has already edited.

use std::collections::HashSet;

use crate::{Certificate, Education, LanguageSkill, PersonalData, ResumeRecord, Skills, WorkExperience};

impl ResumeRecord {
    /// Fold an extracted record into this (form) record.
    ///
    /// Non-empty extracted scalars overwrite; empty ones leave the form value
    /// alone. List entries are appended, re-keying any entry whose id is
    /// already taken. Technical and soft skills skip case-insensitive
    /// duplicates.
    pub fn merge_extracted(&mut self, extracted: ResumeRecord) {
        merge_personal(&mut self.personal_data, extracted.personal_data);
        append_keyed(&mut self.education, extracted.education);
        append_keyed(&mut self.certificates, extracted.certificates);
        append_keyed(&mut self.work_experience, extracted.work_experience);
        merge_skills(&mut self.skills, extracted.skills);
    }
}

fn merge_personal(form: &mut PersonalData, extracted: PersonalData) {
    overwrite(&mut form.full_name, extracted.full_name);
    overwrite(&mut form.email, extracted.email);
    overwrite(&mut form.phone, extracted.phone);
    overwrite(&mut form.address, extracted.address);
    overwrite(&mut form.city, extracted.city);
    overwrite(&mut form.postal_code, extracted.postal_code);
    overwrite(&mut form.summary, extracted.summary);
    overwrite_opt(&mut form.linkedin, extracted.linkedin);
    overwrite_opt(&mut form.website, extracted.website);
}

fn overwrite(slot: &mut String, value: String) {
    if !value.is_empty() {
        *slot = value;
    }
}

fn overwrite_opt(slot: &mut Option<String>, value: Option<String>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        *slot = Some(v);
    }
}

/// List entries carrying an opaque id that must stay unique within the list.
trait Keyed {
    fn id_mut(&mut self) -> &mut String;
}

impl Keyed for Education {
    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl Keyed for Certificate {
    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl Keyed for WorkExperience {
    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

fn append_keyed<T: Keyed>(existing: &mut Vec<T>, incoming: Vec<T>) {
    let mut taken: HashSet<String> = existing.iter_mut().map(|e| e.id_mut().clone()).collect();

    for mut entry in incoming {
        let id = entry.id_mut();
        if taken.contains(id.as_str()) {
            let base = id.clone();
            let mut n = 1;
            while taken.contains(&format!("{base}-{n}")) {
                n += 1;
            }
            *id = format!("{base}-{n}");
        }
        taken.insert(id.clone());
        existing.push(entry);
    }
}

fn merge_skills(form: &mut Skills, extracted: Skills) {
    append_unique(&mut form.technical, extracted.technical);
    append_unique(&mut form.soft, extracted.soft);
    append_languages(&mut form.languages, extracted.languages);
}

fn append_unique(existing: &mut Vec<String>, incoming: Vec<String>) {
    let mut seen: HashSet<String> = existing.iter().map(|s| s.to_lowercase()).collect();
    for skill in incoming {
        if seen.insert(skill.to_lowercase()) {
            existing.push(skill);
        }
    }
}

fn append_languages(existing: &mut Vec<LanguageSkill>, incoming: Vec<LanguageSkill>) {
    for lang in incoming {
        let dup = existing
            .iter()
            .any(|l| l.language.eq_ignore_ascii_case(&lang.language));
        if !dup {
            existing.push(lang);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edu(id: &str, institution: &str) -> Education {
        Education {
            id: id.into(),
            institution: institution.into(),
            ..Default::default()
        }
    }

    #[test]
    fn non_empty_scalars_overwrite() {
        let mut form = ResumeRecord::default();
        form.personal_data.full_name = "Jane Roe".into();
        form.personal_data.city = "Jakarta".into();

        let mut extracted = ResumeRecord::default();
        extracted.personal_data.full_name = "JANE ROE".into();
        extracted.personal_data.email = "jane@example.com".into();

        form.merge_extracted(extracted);
        assert_eq!(form.personal_data.full_name, "JANE ROE");
        assert_eq!(form.personal_data.email, "jane@example.com");
        // empty extracted city leaves the typed value
        assert_eq!(form.personal_data.city, "Jakarta");
    }

    #[test]
    fn optional_links_only_overwrite_when_present() {
        let mut form = ResumeRecord::default();
        form.personal_data.linkedin = Some("linkedin.com/in/jane".into());

        let mut extracted = ResumeRecord::default();
        extracted.personal_data.linkedin = Some(String::new());
        extracted.personal_data.website = Some("jane.dev".into());

        form.merge_extracted(extracted);
        assert_eq!(form.personal_data.linkedin.as_deref(), Some("linkedin.com/in/jane"));
        assert_eq!(form.personal_data.website.as_deref(), Some("jane.dev"));
    }

    #[test]
    fn colliding_ids_are_rekeyed() {
        let mut form = ResumeRecord {
            education: vec![edu("1", "ITB"), edu("1-1", "UI")],
            ..Default::default()
        };
        let extracted = ResumeRecord {
            education: vec![edu("1", "MIT"), edu("4", "ETH")],
            ..Default::default()
        };

        form.merge_extracted(extracted);
        let ids: Vec<&str> = form.education.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "1-1", "1-2", "4"]);
        assert_eq!(form.education[2].institution, "MIT");
    }

    #[test]
    fn skills_are_deduplicated_case_insensitively() {
        let mut form = ResumeRecord::default();
        form.skills.technical = vec!["Rust".into(), "SQL".into()];
        form.skills.languages.push(LanguageSkill {
            language: "English".into(),
            proficiency: "Fluent".into(),
        });

        let mut extracted = ResumeRecord::default();
        extracted.skills.technical = vec!["rust".into(), "Go".into()];
        extracted.skills.languages.push(LanguageSkill {
            language: "english".into(),
            proficiency: "Native".into(),
        });

        form.merge_extracted(extracted);
        assert_eq!(form.skills.technical, vec!["Rust", "SQL", "Go"]);
        assert_eq!(form.skills.languages.len(), 1);
        assert_eq!(form.skills.languages[0].proficiency, "Fluent");
    }

    #[test]
    fn merging_empty_record_is_a_no_op() {
        let mut form = ResumeRecord {
            education: vec![edu("a", "MIT")],
            ..Default::default()
        };
        form.personal_data.summary = "Builder of things.".into();
        let before = form.clone();

        form.merge_extracted(ResumeRecord::default());
        assert_eq!(form, before);
    }
}
