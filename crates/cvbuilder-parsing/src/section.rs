use cvbuilder_core::{Education, WorkExperience};

use crate::config::{ParsingConfig, Section};

/// Index of the first line whose lowercase form contains any of the
/// section's heading keywords.
pub fn find_heading(lines: &[String], section: Section) -> Option<usize> {
    find_heading_with_config(lines, section, &ParsingConfig::default())
}

pub(crate) fn find_heading_with_config(
    lines: &[String],
    section: Section,
    config: &ParsingConfig,
) -> Option<usize> {
    let keywords = config.headings(section);
    lines.iter().position(|line| {
        let lower = line.to_lowercase();
        keywords.iter().any(|k| lower.contains(k.as_str()))
    })
}

/// Up to `span` lines immediately after the heading, clipped to the document.
fn window(lines: &[String], heading: usize, span: usize) -> &[String] {
    let start = (heading + 1).min(lines.len());
    let end = start.saturating_add(span).min(lines.len());
    &lines[start..end]
}

/// The lines after a `Summary`/`Objective` heading, joined with single spaces.
pub fn extract_summary(lines: &[String]) -> String {
    extract_summary_with_config(lines, &ParsingConfig::default())
}

pub(crate) fn extract_summary_with_config(lines: &[String], config: &ParsingConfig) -> String {
    match find_heading_with_config(lines, Section::Summary, config) {
        Some(h) => window(lines, h, config.summary_lines).join(" "),
        None => String::new(),
    }
}

/// Education entries read as fixed (institution, degree, end date) groups
/// after the `Education` heading.
///
/// The grouping is positional: ragged layouts shift every later field, and
/// the window can run into the next section.
pub fn extract_education(lines: &[String]) -> Vec<Education> {
    extract_education_with_config(lines, &ParsingConfig::default())
}

pub(crate) fn extract_education_with_config(
    lines: &[String],
    config: &ParsingConfig,
) -> Vec<Education> {
    let Some(h) = find_heading_with_config(lines, Section::Education, config) else {
        return Vec::new();
    };

    window(lines, h, config.education_window)
        .chunks(config.education_group)
        .enumerate()
        .filter(|(_, group)| !field(group, 0).is_empty())
        .map(|(i, group)| Education {
            id: entry_id(i, config.education_group),
            institution: field(group, 0),
            degree: field(group, 1),
            end_date: field(group, 2),
            ..Default::default()
        })
        .collect()
}

/// Work entries read as fixed (company, position, start date, end date)
/// groups after the `Experience`/`Work` heading.
///
/// Responsibilities are never filled and `currently_working` is always false.
pub fn extract_work_experience(lines: &[String]) -> Vec<WorkExperience> {
    extract_work_experience_with_config(lines, &ParsingConfig::default())
}

pub(crate) fn extract_work_experience_with_config(
    lines: &[String],
    config: &ParsingConfig,
) -> Vec<WorkExperience> {
    let Some(h) = find_heading_with_config(lines, Section::Experience, config) else {
        return Vec::new();
    };

    window(lines, h, config.experience_window)
        .chunks(config.experience_group)
        .enumerate()
        .filter(|(_, group)| !field(group, 0).is_empty())
        .map(|(i, group)| WorkExperience {
            id: entry_id(i, config.experience_group),
            company: field(group, 0),
            position: field(group, 1),
            start_date: field(group, 2),
            end_date: field(group, 3),
            currently_working: false,
            responsibilities: Vec::new(),
            ..Default::default()
        })
        .collect()
}

/// Comma-separated tokens from the lines after the `Skills` heading.
///
/// Each line also ends a token. Tokens are trimmed; empty and repeated
/// tokens are dropped.
pub fn extract_technical_skills(lines: &[String]) -> Vec<String> {
    extract_technical_skills_with_config(lines, &ParsingConfig::default())
}

pub(crate) fn extract_technical_skills_with_config(
    lines: &[String],
    config: &ParsingConfig,
) -> Vec<String> {
    let Some(h) = find_heading_with_config(lines, Section::Skills, config) else {
        return Vec::new();
    };

    let joined = window(lines, h, config.skills_window).join(",");
    let mut skills: Vec<String> = Vec::new();
    for token in joined.split(',').map(str::trim) {
        if !token.is_empty() && !skills.iter().any(|s| s == token) {
            skills.push(token.to_string());
        }
    }
    skills
}

fn field(group: &[String], i: usize) -> String {
    group.get(i).cloned().unwrap_or_default()
}

/// Position of the entry's first line counted from the heading (1-based).
fn entry_id(group_index: usize, group_size: usize) -> String {
    (group_index * group_size + 1).to_string()
}
