//! End-to-end behavior of [`ResumeExtractor`] on whole documents.

use cvbuilder_parsing::{ResumeExtractor, ResumeRecord, extract_resume};

#[test]
fn contact_lines_yield_email_and_phone() {
    let record = extract_resume("John Doe\njohn@example.com\n(555) 123-4567");
    assert_eq!(record.personal_data.email, "john@example.com");
    assert_eq!(record.personal_data.phone, "(555) 123-4567");
    // mixed case is not treated as a name
    assert_eq!(record.personal_data.full_name, "");
}

#[test]
fn education_heading_followed_by_one_entry() {
    let record = extract_resume("EDUCATION\nMIT\nBSc Computer Science\n2020");
    let first = &record.education[0];
    assert_eq!(first.institution, "MIT");
    assert_eq!(first.degree, "BSc Computer Science");
    assert_eq!(first.end_date, "2020");
    assert_eq!(first.field_of_study, "");
}

#[test]
fn skills_heading_followed_by_comma_list() {
    let record = extract_resume("Skills\nPython, Go, SQL");
    assert_eq!(record.skills.technical, vec!["Python", "Go", "SQL"]);
}

#[test]
fn empty_input_gives_empty_record() {
    let record = extract_resume("");
    let p = &record.personal_data;
    for value in [
        &p.full_name,
        &p.email,
        &p.phone,
        &p.address,
        &p.city,
        &p.postal_code,
        &p.summary,
    ] {
        assert!(value.is_empty());
    }
    assert!(record.education.is_empty());
    assert!(record.certificates.is_empty());
    assert!(record.work_experience.is_empty());
    assert!(record.skills.technical.is_empty());
    assert!(record.skills.soft.is_empty());
    assert!(record.skills.languages.is_empty());
    assert_eq!(record, ResumeRecord::default());
}

#[test]
fn summary_requires_a_heading() {
    let text = "JANE ROE\nI build reliable distributed systems.\nEDUCATION\nMIT";
    assert_eq!(extract_resume(text).personal_data.summary, "");
}

#[test]
fn extraction_is_deterministic() {
    let ext = ResumeExtractor::new();
    let text = "JANE ROE\nObjective\nShip it.\nSkills\nRust, Rust, Go\nWork\nAcme\nDev\n2020\n2021";
    assert_eq!(ext.extract(text), ext.extract(text));
}

#[test]
fn odd_inputs_never_panic() {
    let long_line = "9".repeat(10_000);
    let many_lines = "Skills\n,\n".repeat(2_000);
    let inputs = [
        "\n\n\n",
        "\r\r\r",
        "   ",
        "EDUCATION",
        "Skills",
        ",,,,",
        "@@@@....@@",
        "ﬁﬂﬀ",
        "Résumé · Ünïcödé 履歴書",
        "\u{0}\u{1}\u{7f}",
        long_line.as_str(),
        many_lines.as_str(),
    ];
    let ext = ResumeExtractor::new();
    for input in inputs {
        let record = ext.extract(input);
        assert!(record.certificates.is_empty());
        assert!(record.skills.soft.is_empty());
    }
}

#[test]
fn all_caps_header_wins_name_slot() {
    let record = extract_resume("Curriculum Vitae\nEDUCATION\nMIT\nBSc\n2020\nJANE ROE");
    assert_eq!(record.personal_data.full_name, "EDUCATION");
}

#[test]
fn record_serializes_with_form_field_names() {
    let record = extract_resume("JANE ROE\nWork Experience\nAcme\nDev\n2019\n2020");
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["personalData"]["fullName"], "JANE ROE");
    assert_eq!(json["workExperience"][0]["company"], "Acme");
    assert_eq!(json["workExperience"][0]["currentlyWorking"], false);
    assert_eq!(json["workExperience"][0]["responsibilities"], serde_json::json!([]));
}
