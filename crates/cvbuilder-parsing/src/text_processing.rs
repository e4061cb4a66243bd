/// Expand common typographic ligatures found in PDF text layers.
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{FB05}', '\u{FB06}'], "st")
}

/// Split on line breaks, trim each line and drop the ones left empty.
/// Order is preserved.
pub fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|l| l.split('\r'))
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Document text as the detectors see it.
///
/// `raw` is the ligature-expanded input, scanned as a whole by the email
/// and phone detectors; `lines` is the normalized line list every other
/// detector walks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    pub raw: String,
    pub lines: Vec<String>,
}

impl PreparedText {
    pub fn new(text: &str) -> Self {
        let raw = expand_ligatures(text);
        let lines = non_empty_lines(&raw);
        Self { raw, lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
