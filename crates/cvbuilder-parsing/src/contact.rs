use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParsingConfig;

/// A line made only of uppercase letters and whitespace.
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z\s]+$").unwrap());

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Optional country code, then 3-3-4 digit groups with optional
/// parentheses and `-`/`.`/space separators.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

/// Digits anywhere before a `Street`/`Road`/`Avenue` keyword.
static STREET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+.*\b(?:Street|Road|Avenue)\b").unwrap());

const ADDRESS_MARKER: &str = "Address";
const ADDRESS_PREFIX: &str = "Address:";

/// First line written entirely in uppercase letters and spaces.
///
/// Section headers such as `EDUCATION` match too when they come first.
pub fn extract_full_name(lines: &[String]) -> String {
    extract_full_name_with_config(lines, &ParsingConfig::default())
}

pub(crate) fn extract_full_name_with_config(lines: &[String], config: &ParsingConfig) -> String {
    let re = config.name_re.as_ref().unwrap_or(&NAME_RE);
    lines
        .iter()
        .find(|l| re.is_match(l))
        .cloned()
        .unwrap_or_default()
}

/// First `local@domain.tld` anywhere in the raw text.
pub fn extract_email(raw: &str) -> String {
    extract_email_with_config(raw, &ParsingConfig::default())
}

pub(crate) fn extract_email_with_config(raw: &str, config: &ParsingConfig) -> String {
    let re = config.email_re.as_ref().unwrap_or(&EMAIL_RE);
    first_match(re, raw)
}

/// First phone-like digit grouping anywhere in the raw text.
///
/// Generic on purpose: date ranges and IDs with the right digit counts match
/// as well.
pub fn extract_phone(raw: &str) -> String {
    extract_phone_with_config(raw, &ParsingConfig::default())
}

pub(crate) fn extract_phone_with_config(raw: &str, config: &ParsingConfig) -> String {
    let re = config.phone_re.as_ref().unwrap_or(&PHONE_RE);
    first_match(re, raw)
}

/// First line mentioning `Address`, or a numbered street line
/// (`12 Baker Street`, `5 Abbey Road`, `350 Fifth Avenue`).
///
/// The literal `Address:` is removed from the result.
pub fn extract_address(lines: &[String]) -> String {
    extract_address_with_config(lines, &ParsingConfig::default())
}

pub(crate) fn extract_address_with_config(lines: &[String], config: &ParsingConfig) -> String {
    let re = config.address_re.as_ref().unwrap_or(&STREET_RE);
    lines
        .iter()
        .find(|l| l.contains(ADDRESS_MARKER) || re.is_match(l))
        .map(|l| l.replacen(ADDRESS_PREFIX, "", 1).trim().to_string())
        .unwrap_or_default()
}

fn first_match(re: &Regex, haystack: &str) -> String {
    re.find(haystack)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParsingConfigBuilder;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_name_first_uppercase_line() {
        let l = lines(&["Curriculum Vitae", "JANE ROE", "SOFTWARE ENGINEER"]);
        assert_eq!(extract_full_name(&l), "JANE ROE");
    }

    #[test]
    fn test_full_name_rejects_mixed_case_and_punctuation() {
        let l = lines(&["Jane Roe", "J. ROE", "ROE-SMITH", "ROE 2"]);
        assert_eq!(extract_full_name(&l), "");
    }

    #[test]
    fn test_full_name_matches_section_header() {
        // all-caps headers are indistinguishable from names
        let l = lines(&["Jane Roe", "EDUCATION", "MIT"]);
        assert_eq!(extract_full_name(&l), "EDUCATION");
    }

    #[test]
    fn test_email_first_match() {
        let raw = "Contact: jane.roe+cv@mail.example.co.uk or jroe@example.com";
        assert_eq!(extract_email(raw), "jane.roe+cv@mail.example.co.uk");
        assert_eq!(extract_email("no email here @ all"), "");
    }

    #[test]
    fn test_phone_formats() {
        assert_eq!(extract_phone("Phone (555) 123-4567"), "(555) 123-4567");
        assert_eq!(extract_phone("+1 555.123.4567"), "+1 555.123.4567");
        assert_eq!(extract_phone("call 5551234567 now"), "5551234567");
        assert_eq!(extract_phone("no digits"), "");
    }

    #[test]
    fn test_phone_false_positive_on_digit_runs() {
        // any 10-digit grouping qualifies
        assert_eq!(extract_phone("ID 2019202012"), "2019202012");
    }

    #[test]
    fn test_address_marker_prefix_stripped() {
        let l = lines(&["JANE ROE", "Address: Jl. Sudirman 5, Jakarta"]);
        assert_eq!(extract_address(&l), "Jl. Sudirman 5, Jakarta");
    }

    #[test]
    fn test_address_street_suffix() {
        let l = lines(&["JANE ROE", "221 Baker Street, London"]);
        assert_eq!(extract_address(&l), "221 Baker Street, London");
        let l = lines(&["JANE ROE", "Unit 5, Abbey Road, London"]);
        assert_eq!(extract_address(&l), "Unit 5, Abbey Road, London");
        let l = lines(&["12B Baker Street"]);
        assert_eq!(extract_address(&l), "12B Baker Street");
        let l = lines(&["Baker Street"]);
        assert_eq!(extract_address(&l), "");
    }

    #[test]
    fn test_address_marker_anywhere_in_line() {
        let l = lines(&["Home Address: 5 Abbey Road"]);
        assert_eq!(extract_address(&l), "Home  5 Abbey Road");
    }

    #[test]
    fn test_custom_phone_regex() {
        let config = ParsingConfigBuilder::new()
            .phone_regex(r"\+62[\d -]+\d")
            .build()
            .unwrap();
        assert_eq!(
            extract_phone_with_config("HP: +62 812-3456-7890", &config),
            "+62 812-3456-7890"
        );
    }
}
