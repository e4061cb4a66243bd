use regex::Regex;

use cvbuilder_core::config_file::ParsingSection;

use crate::ParsingError;

/// Controls how a list of values is overridden from its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

/// Résumé sections located by a heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Education,
    Experience,
    Skills,
}

impl Section {
    /// Built-in lowercase keywords; a line is the heading when its lowercase
    /// form contains any of them.
    pub fn default_keywords(&self) -> &'static [&'static str] {
        match self {
            Section::Summary => &["summary", "objective"],
            Section::Education => &["education"],
            Section::Experience => &["experience", "work"],
            Section::Skills => &["skills"],
        }
    }
}

pub const DEFAULT_SUMMARY_LINES: usize = 3;
pub const DEFAULT_EDUCATION_GROUP: usize = 3;
pub const DEFAULT_EDUCATION_WINDOW: usize = 9;
pub const DEFAULT_EXPERIENCE_GROUP: usize = 4;
pub const DEFAULT_EXPERIENCE_WINDOW: usize = 15;
pub const DEFAULT_SKILLS_WINDOW: usize = 9;

/// Configuration for the heuristic extractor.
///
/// All regex fields are `Option<Regex>`; `None` means "use the built-in default".
/// Use [`ParsingConfigBuilder`] to construct with string patterns.
#[derive(Debug, Clone)]
pub struct ParsingConfig {
    // ── contact.rs ──
    pub(crate) name_re: Option<Regex>,
    pub(crate) email_re: Option<Regex>,
    pub(crate) phone_re: Option<Regex>,
    pub(crate) address_re: Option<Regex>,

    // ── section.rs ──
    pub(crate) summary_headings: ListOverride<String>,
    pub(crate) education_headings: ListOverride<String>,
    pub(crate) experience_headings: ListOverride<String>,
    pub(crate) skills_headings: ListOverride<String>,
    /// Lines after the summary heading joined into the summary.
    pub(crate) summary_lines: usize,
    /// Lines per education entry (institution, degree, end date).
    pub(crate) education_group: usize,
    /// Maximum lines read after the education heading.
    pub(crate) education_window: usize,
    /// Lines per work entry (company, position, start date, end date).
    pub(crate) experience_group: usize,
    /// Maximum lines read after the experience heading.
    pub(crate) experience_window: usize,
    /// Maximum lines read after the skills heading.
    pub(crate) skills_window: usize,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            name_re: None,
            email_re: None,
            phone_re: None,
            address_re: None,
            summary_headings: ListOverride::Default,
            education_headings: ListOverride::Default,
            experience_headings: ListOverride::Default,
            skills_headings: ListOverride::Default,
            summary_lines: DEFAULT_SUMMARY_LINES,
            education_group: DEFAULT_EDUCATION_GROUP,
            education_window: DEFAULT_EDUCATION_WINDOW,
            experience_group: DEFAULT_EXPERIENCE_GROUP,
            experience_window: DEFAULT_EXPERIENCE_WINDOW,
            skills_window: DEFAULT_SKILLS_WINDOW,
        }
    }
}

impl ParsingConfig {
    /// Lowercase heading keywords for `section`, overrides applied.
    pub fn headings(&self, section: Section) -> Vec<String> {
        let overrides = match section {
            Section::Summary => &self.summary_headings,
            Section::Education => &self.education_headings,
            Section::Experience => &self.experience_headings,
            Section::Skills => &self.skills_headings,
        };
        let defaults: Vec<String> = section
            .default_keywords()
            .iter()
            .map(|s| s.to_string())
            .collect();
        overrides.resolve(&defaults)
    }

    pub fn summary_lines(&self) -> usize {
        self.summary_lines
    }

    pub fn education_window(&self) -> usize {
        self.education_window
    }

    pub fn experience_window(&self) -> usize {
        self.experience_window
    }

    pub fn skills_window(&self) -> usize {
        self.skills_window
    }

    /// Build a config from the `[parsing]` section of a config file.
    pub fn from_section(section: &ParsingSection) -> Result<Self, ParsingError> {
        let mut builder = ParsingConfigBuilder::new();
        if let Some(h) = &section.summary_headings {
            builder = builder.set_headings(Section::Summary, h.clone());
        }
        if let Some(h) = &section.education_headings {
            builder = builder.set_headings(Section::Education, h.clone());
        }
        if let Some(h) = &section.experience_headings {
            builder = builder.set_headings(Section::Experience, h.clone());
        }
        if let Some(h) = &section.skills_headings {
            builder = builder.set_headings(Section::Skills, h.clone());
        }
        if let Some(n) = section.summary_lines {
            builder = builder.summary_lines(n);
        }
        if let Some(n) = section.education_window {
            builder = builder.education_window(n);
        }
        if let Some(n) = section.experience_window {
            builder = builder.experience_window(n);
        }
        if let Some(n) = section.skills_window {
            builder = builder.skills_window(n);
        }
        builder.build()
    }
}

/// Builder for [`ParsingConfig`].
///
/// Accepts string patterns that are compiled to `Regex` in [`build()`](Self::build).
/// Fails fast if any pattern is invalid or a group size is zero.
#[derive(Debug, Clone, Default)]
pub struct ParsingConfigBuilder {
    name_re: Option<String>,
    email_re: Option<String>,
    phone_re: Option<String>,
    address_re: Option<String>,
    summary_headings: ListOverride<String>,
    education_headings: ListOverride<String>,
    experience_headings: ListOverride<String>,
    skills_headings: ListOverride<String>,
    summary_lines: Option<usize>,
    education_group: Option<usize>,
    education_window: Option<usize>,
    experience_group: Option<usize>,
    experience_window: Option<usize>,
    skills_window: Option<usize>,
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Contact patterns ──

    pub fn name_regex(mut self, pattern: &str) -> Self {
        self.name_re = Some(pattern.to_string());
        self
    }

    pub fn email_regex(mut self, pattern: &str) -> Self {
        self.email_re = Some(pattern.to_string());
        self
    }

    pub fn phone_regex(mut self, pattern: &str) -> Self {
        self.phone_re = Some(pattern.to_string());
        self
    }

    pub fn address_regex(mut self, pattern: &str) -> Self {
        self.address_re = Some(pattern.to_string());
        self
    }

    // ── Heading keywords ──

    fn headings_mut(&mut self, section: Section) -> &mut ListOverride<String> {
        match section {
            Section::Summary => &mut self.summary_headings,
            Section::Education => &mut self.education_headings,
            Section::Experience => &mut self.experience_headings,
            Section::Skills => &mut self.skills_headings,
        }
    }

    /// Replace the built-in heading keywords for `section`.
    pub fn set_headings(mut self, section: Section, keywords: Vec<String>) -> Self {
        let keywords = keywords.into_iter().map(|k| k.to_lowercase()).collect();
        *self.headings_mut(section) = ListOverride::Replace(keywords);
        self
    }

    /// Add a heading keyword on top of the built-in ones for `section`.
    pub fn add_heading(mut self, section: Section, keyword: &str) -> Self {
        let keyword = keyword.to_lowercase();
        let slot = self.headings_mut(section);
        match &mut *slot {
            ListOverride::Extend(v) | ListOverride::Replace(v) => v.push(keyword),
            ListOverride::Default => *slot = ListOverride::Extend(vec![keyword]),
        }
        self
    }

    // ── Windows ──

    pub fn summary_lines(mut self, n: usize) -> Self {
        self.summary_lines = Some(n);
        self
    }

    pub fn education_group(mut self, n: usize) -> Self {
        self.education_group = Some(n);
        self
    }

    pub fn education_window(mut self, n: usize) -> Self {
        self.education_window = Some(n);
        self
    }

    pub fn experience_group(mut self, n: usize) -> Self {
        self.experience_group = Some(n);
        self
    }

    pub fn experience_window(mut self, n: usize) -> Self {
        self.experience_window = Some(n);
        self
    }

    pub fn skills_window(mut self, n: usize) -> Self {
        self.skills_window = Some(n);
        self
    }

    /// Compile all string patterns into regexes and produce a [`ParsingConfig`].
    pub fn build(self) -> Result<ParsingConfig, ParsingError> {
        let compile = |opt: Option<String>| -> Result<Option<Regex>, regex::Error> {
            opt.map(|p| Regex::new(&p)).transpose()
        };

        let education_group = self.education_group.unwrap_or(DEFAULT_EDUCATION_GROUP);
        let experience_group = self.experience_group.unwrap_or(DEFAULT_EXPERIENCE_GROUP);
        if education_group == 0 || experience_group == 0 {
            return Err(ParsingError::InvalidConfig(
                "entry group size must be at least 1".into(),
            ));
        }

        Ok(ParsingConfig {
            name_re: compile(self.name_re)?,
            email_re: compile(self.email_re)?,
            phone_re: compile(self.phone_re)?,
            address_re: compile(self.address_re)?,
            summary_headings: self.summary_headings,
            education_headings: self.education_headings,
            experience_headings: self.experience_headings,
            skills_headings: self.skills_headings,
            summary_lines: self.summary_lines.unwrap_or(DEFAULT_SUMMARY_LINES),
            education_group,
            education_window: self.education_window.unwrap_or(DEFAULT_EDUCATION_WINDOW),
            experience_group,
            experience_window: self
                .experience_window
                .unwrap_or(DEFAULT_EXPERIENCE_WINDOW),
            skills_window: self.skills_window.unwrap_or(DEFAULT_SKILLS_WINDOW),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParsingConfig::default();
        assert_eq!(config.summary_lines, 3);
        assert_eq!(config.education_group, 3);
        assert_eq!(config.education_window, 9);
        assert_eq!(config.experience_group, 4);
        assert_eq!(config.experience_window, 15);
        assert_eq!(config.skills_window, 9);
        assert_eq!(
            config.headings(Section::Experience),
            vec!["experience".to_string(), "work".to_string()]
        );
    }

    #[test]
    fn test_builder_headings_are_lowercased() {
        let config = ParsingConfigBuilder::new()
            .set_headings(Section::Education, vec!["PENDIDIKAN".into()])
            .add_heading(Section::Skills, "Keterampilan")
            .build()
            .unwrap();
        assert_eq!(config.headings(Section::Education), vec!["pendidikan"]);
        assert_eq!(
            config.headings(Section::Skills),
            vec!["skills".to_string(), "keterampilan".to_string()]
        );
    }

    #[test]
    fn test_builder_invalid_regex() {
        let result = ParsingConfigBuilder::new().phone_regex(r"(\d{3}").build();
        assert!(matches!(result, Err(ParsingError::Regex(_))));
    }

    #[test]
    fn test_builder_rejects_zero_group() {
        let result = ParsingConfigBuilder::new().experience_group(0).build();
        assert!(matches!(result, Err(ParsingError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_section() {
        let section = ParsingSection {
            summary_headings: Some(vec!["Profile".into()]),
            skills_window: Some(2),
            ..Default::default()
        };
        let config = ParsingConfig::from_section(&section).unwrap();
        assert_eq!(config.headings(Section::Summary), vec!["profile"]);
        assert_eq!(config.skills_window(), 2);
        assert_eq!(config.education_window(), DEFAULT_EDUCATION_WINDOW);
    }

    #[test]
    fn test_list_override_resolve() {
        let defaults = vec!["a".to_string(), "b".to_string()];

        let d: ListOverride<String> = ListOverride::Default;
        assert_eq!(d.resolve(&defaults), defaults);

        let r: ListOverride<String> = ListOverride::Replace(vec!["x".to_string()]);
        assert_eq!(r.resolve(&defaults), vec!["x".to_string()]);

        let e: ListOverride<String> = ListOverride::Extend(vec!["c".to_string()]);
        assert_eq!(
            e.resolve(&defaults),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }
}
