use std::io::Write;

use cvbuilder_core::ResumeRecord;
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print what the detectors found in a document.
pub fn print_extraction_summary(
    w: &mut dyn Write,
    file_name: &str,
    record: &ResumeRecord,
    color: ColorMode,
) -> std::io::Result<()> {
    let fields = record.populated_fields();

    if color.enabled() {
        writeln!(w, "{} {}", "Extracted".bold().cyan(), file_name.bold())?;
    } else {
        writeln!(w, "Extracted {}", file_name)?;
    }

    if fields.is_empty() {
        let msg = "No résumé fields recognised";
        if color.enabled() {
            writeln!(w, "{}", msg.yellow())?;
        } else {
            writeln!(w, "{}", msg)?;
        }
        return Ok(());
    }

    writeln!(w, "Found {} fields: {}", fields.len(), fields.join(", "))?;

    let counts = format!(
        "({} education, {} work experience, {} technical skills)",
        record.education.len(),
        record.work_experience.len(),
        record.skills.technical.len()
    );
    if color.enabled() {
        writeln!(w, "{}", counts.dimmed())?;
    } else {
        writeln!(w, "{}", counts)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(record: &ResumeRecord) -> String {
        let mut buf = Vec::new();
        print_extraction_summary(&mut buf, "cv.pdf", record, ColorMode(false)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_lists_populated_fields() {
        let mut record = ResumeRecord::default();
        record.personal_data.email = "jane@example.com".into();
        record.skills.technical = vec!["Rust".into(), "Go".into()];

        let out = render(&record);
        assert_eq!(
            out,
            "Extracted cv.pdf\n\
             Found 2 fields: email, skills\n\
             (0 education, 0 work experience, 2 technical skills)\n"
        );
    }

    #[test]
    fn summary_for_empty_record() {
        let out = render(&ResumeRecord::default());
        assert!(out.ends_with("No résumé fields recognised\n"));
    }
}
