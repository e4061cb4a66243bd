use std::path::Path;

use cvbuilder_core::{Certificate, Education, PersonalData, ResumeRecord, Skills, WorkExperience};
use thiserror::Error;

use crate::types::ExportFormat;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

const NAME_PLACEHOLDER: &str = "Your Name";
const PRESENT: &str = "Present";

/// Render a record in the given format.
pub fn render(record: &ResumeRecord, format: ExportFormat) -> Result<String, ExportError> {
    Ok(match format {
        ExportFormat::Json => export_json(record)?,
        ExportFormat::Markdown => export_markdown(record),
        ExportFormat::Text => export_text(record),
    })
}

/// Render a record and write it to `path`.
pub fn export_record(
    record: &ResumeRecord,
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let content = render(record, format)?;
    std::fs::write(path, content)?;
    Ok(())
}

fn export_json(record: &ResumeRecord) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(record)?;
    out.push('\n');
    Ok(out)
}

// ── Shared pieces ───────────────────────────────────────────────────────

fn display_name(p: &PersonalData) -> &str {
    if p.full_name.is_empty() {
        NAME_PLACEHOLDER
    } else {
        &p.full_name
    }
}

/// Email, phone and city, in that order, skipping empty ones.
fn contact_parts(p: &PersonalData) -> Vec<&str> {
    [&p.email, &p.phone, &p.city]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect()
}

fn link_parts(p: &PersonalData) -> Vec<(&'static str, &str)> {
    [("LinkedIn", &p.linkedin), ("Website", &p.website)]
        .into_iter()
        .filter_map(|(label, v)| v.as_deref().filter(|s| !s.is_empty()).map(|s| (label, s)))
        .collect()
}

/// `start - end`, with `Present` for ongoing roles. `None` when both are blank.
fn date_range(start: &str, end: &str, ongoing: bool) -> Option<String> {
    let end = if ongoing { PRESENT } else { end };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => None,
        (false, true) => Some(start.to_string()),
        (true, false) => Some(end.to_string()),
        (false, false) => Some(format!("{start} - {end}")),
    }
}

fn company_line(w: &WorkExperience) -> String {
    if w.location.is_empty() {
        w.company.clone()
    } else {
        format!("{} \u{2022} {}", w.company, w.location)
    }
}

fn certificate_line(c: &Certificate) -> String {
    if c.issuer.is_empty() {
        c.name.clone()
    } else {
        format!("{} \u{2022} {}", c.name, c.issuer)
    }
}

fn language_list(skills: &Skills) -> String {
    skills
        .languages
        .iter()
        .map(|l| {
            if l.proficiency.is_empty() {
                l.language.clone()
            } else {
                format!("{} ({})", l.language, l.proficiency)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Degree and field of study; `None` when both are blank.
fn education_title(e: &Education) -> Option<String> {
    match (e.degree.is_empty(), e.field_of_study.is_empty()) {
        (false, false) => Some(format!("{}, {}", e.degree, e.field_of_study)),
        (false, true) => Some(e.degree.clone()),
        (true, false) => Some(e.field_of_study.clone()),
        (true, true) => None,
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

fn md_escape(s: &str) -> String {
    s.replace('|', "\\|").replace('*', "\\*").replace('_', "\\_")
}

/// Append `text` followed by a newline.
fn push_line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

// ── Plain text ──────────────────────────────────────────────────────────

fn export_text(record: &ResumeRecord) -> String {
    let p = &record.personal_data;
    let mut out = String::new();

    push_line(&mut out, display_name(p));
    let contact = contact_parts(p);
    if !contact.is_empty() {
        push_line(&mut out, &contact.join(" | "));
    }
    let links = link_parts(p);
    if !links.is_empty() {
        let joined: Vec<String> = links.iter().map(|(l, v)| format!("{l}: {v}")).collect();
        push_line(&mut out, &joined.join(" | "));
    }

    if !p.summary.is_empty() {
        text_heading(&mut out, "PROFESSIONAL SUMMARY");
        push_line(&mut out, &p.summary);
    }

    if !record.work_experience.is_empty() {
        text_heading(&mut out, "WORK EXPERIENCE");
        for (i, w) in record.work_experience.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            push_line(&mut out, &w.position);
            push_line(&mut out, &company_line(w));
            if let Some(dates) = date_range(&w.start_date, &w.end_date, w.currently_working) {
                push_line(&mut out, &dates);
            }
            for r in &w.responsibilities {
                push_line(&mut out, &format!("  - {r}"));
            }
        }
    }

    if !record.education.is_empty() {
        text_heading(&mut out, "EDUCATION");
        for (i, e) in record.education.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if let Some(title) = education_title(e) {
                push_line(&mut out, &title);
            }
            push_line(&mut out, &e.institution);
            if let Some(gpa) = non_empty(e.gpa.as_deref()) {
                push_line(&mut out, &format!("GPA: {gpa}"));
            }
            if let Some(dates) = date_range(&e.start_date, &e.end_date, false) {
                push_line(&mut out, &dates);
            }
        }
    }

    let skills = &record.skills;
    if !skills.is_empty() {
        text_heading(&mut out, "SKILLS");
        if !skills.technical.is_empty() {
            push_line(&mut out, &format!("Technical: {}", skills.technical.join(", ")));
        }
        if !skills.soft.is_empty() {
            push_line(&mut out, &format!("Soft: {}", skills.soft.join(", ")));
        }
        if !skills.languages.is_empty() {
            push_line(&mut out, &format!("Languages: {}", language_list(skills)));
        }
    }

    if !record.certificates.is_empty() {
        text_heading(&mut out, "CERTIFICATES");
        for c in &record.certificates {
            push_line(&mut out, &certificate_line(c));
            if !c.issue_date.is_empty() {
                push_line(&mut out, &c.issue_date);
            }
        }
    }

    out
}

fn text_heading(out: &mut String, title: &str) {
    out.push('\n');
    push_line(out, title);
    push_line(out, &"-".repeat(title.chars().count()));
}

// ── Markdown ────────────────────────────────────────────────────────────

fn export_markdown(record: &ResumeRecord) -> String {
    let p = &record.personal_data;
    let mut out = format!("# {}\n\n", md_escape(display_name(p)));

    let contact = contact_parts(p);
    if !contact.is_empty() {
        let escaped: Vec<String> = contact.iter().map(|s| md_escape(s)).collect();
        out.push_str(&format!("{}\n\n", escaped.join(" | ")));
    }
    let links = link_parts(p);
    if !links.is_empty() {
        let joined: Vec<String> = links.iter().map(|(l, v)| format!("[{l}]({v})")).collect();
        out.push_str(&format!("{}\n\n", joined.join(" | ")));
    }

    if !p.summary.is_empty() {
        out.push_str(&format!(
            "## Professional Summary\n\n{}\n\n",
            md_escape(&p.summary)
        ));
    }

    if !record.work_experience.is_empty() {
        out.push_str("## Work Experience\n\n");
        for w in &record.work_experience {
            out.push_str(&format!("### {}\n\n", md_escape(&w.position)));
            push_line(&mut out, &format!("**{}**", md_escape(&company_line(w))));
            if let Some(dates) = date_range(&w.start_date, &w.end_date, w.currently_working) {
                push_line(&mut out, &format!("*{}*", md_escape(&dates)));
            }
            out.push('\n');
            for r in &w.responsibilities {
                push_line(&mut out, &format!("- {}", md_escape(r)));
            }
            if !w.responsibilities.is_empty() {
                out.push('\n');
            }
        }
    }

    if !record.education.is_empty() {
        out.push_str("## Education\n\n");
        for e in &record.education {
            match education_title(e) {
                Some(title) => {
                    out.push_str(&format!("### {}\n\n", md_escape(&title)));
                    push_line(&mut out, &format!("**{}**", md_escape(&e.institution)));
                }
                None => out.push_str(&format!("### {}\n\n", md_escape(&e.institution))),
            }
            if let Some(gpa) = non_empty(e.gpa.as_deref()) {
                push_line(&mut out, &format!("GPA: {}", md_escape(gpa)));
            }
            if let Some(dates) = date_range(&e.start_date, &e.end_date, false) {
                push_line(&mut out, &format!("*{}*", md_escape(&dates)));
            }
            out.push('\n');
        }
    }

    let skills = &record.skills;
    if !skills.is_empty() {
        out.push_str("## Skills\n\n");
        if !skills.technical.is_empty() {
            let joined = md_escape(&skills.technical.join(", "));
            push_line(&mut out, &format!("- **Technical:** {joined}"));
        }
        if !skills.soft.is_empty() {
            let joined = md_escape(&skills.soft.join(", "));
            push_line(&mut out, &format!("- **Soft:** {joined}"));
        }
        if !skills.languages.is_empty() {
            let joined = md_escape(&language_list(skills));
            push_line(&mut out, &format!("- **Languages:** {joined}"));
        }
        out.push('\n');
    }

    if !record.certificates.is_empty() {
        out.push_str("## Certificates\n\n");
        for c in &record.certificates {
            let mut line = format!("- **{}**", md_escape(&certificate_line(c)));
            if !c.issue_date.is_empty() {
                line.push_str(&format!(" ({})", md_escape(&c.issue_date)));
            }
            if let Some(url) = non_empty(c.credential_url.as_deref()) {
                line.push_str(&format!(" [credential]({url})"));
            }
            push_line(&mut out, &line);
        }
        out.push('\n');
    }

    out
}
