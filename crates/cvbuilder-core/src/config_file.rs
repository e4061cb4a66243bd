use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub parsing: Option<ParsingSection>,
    pub upload: Option<UploadConfig>,
    pub server: Option<ServerConfig>,
}

/// Overrides for the heuristic extractor. Heading lists replace the
/// built-in keywords; window values replace the built-in spans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsingSection {
    pub summary_headings: Option<Vec<String>>,
    pub education_headings: Option<Vec<String>>,
    pub experience_headings: Option<Vec<String>>,
    pub skills_headings: Option<Vec<String>>,
    pub summary_lines: Option<usize>,
    pub education_window: Option<usize>,
    pub experience_window: Option<usize>,
    pub skills_window: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_size_mb: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub addr: Option<String>,
}

/// Platform config directory path: `<config_dir>/cvbuilder/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cvbuilder").join("config.toml"))
}

/// Load config by cascading CWD `.cvbuilder.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".cvbuilder.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Take the overlay value if set, otherwise the base value.
fn pick<S, T>(base: Option<&S>, overlay: Option<&S>, get: impl Fn(&S) -> Option<T>) -> Option<T> {
    overlay.and_then(&get).or_else(|| base.and_then(&get))
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let (bp, op) = (base.parsing.as_ref(), overlay.parsing.as_ref());
    let (bu, ou) = (base.upload.as_ref(), overlay.upload.as_ref());
    let (bs, os) = (base.server.as_ref(), overlay.server.as_ref());

    ConfigFile {
        parsing: Some(ParsingSection {
            summary_headings: pick(bp, op, |p| p.summary_headings.clone()),
            education_headings: pick(bp, op, |p| p.education_headings.clone()),
            experience_headings: pick(bp, op, |p| p.experience_headings.clone()),
            skills_headings: pick(bp, op, |p| p.skills_headings.clone()),
            summary_lines: pick(bp, op, |p| p.summary_lines),
            education_window: pick(bp, op, |p| p.education_window),
            experience_window: pick(bp, op, |p| p.experience_window),
            skills_window: pick(bp, op, |p| p.skills_window),
        }),
        upload: Some(UploadConfig {
            max_size_mb: pick(bu, ou, |u| u.max_size_mb),
        }),
        server: Some(ServerConfig {
            addr: pick(bs, os, |s| s.addr.clone()),
        }),
    }
}
