//! Analysis defaults and the two configuration front-ends merged over them.
//!
//! Loading never fails: a missing or malformed file leaves the defaults in
//! place and logs why.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use engine_logging::{engine_info, engine_warn};
use serde::Deserialize;
use thiserror::Error;

use crate::wiki::wiki_base_url;

pub const DEFAULT_FILE: &str = "data/input.txt";
pub const DEFAULT_BASE_DIR: &str = "data";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXTENSION: &str = ".txt";
pub const DEFAULT_WIKI_LANG: &str = "fr";
pub const DEFAULT_PROCESS_TOP_N: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_file: PathBuf,
    pub base_dir: PathBuf,
    pub out_dir: PathBuf,
    pub default_ext: String,
    pub wiki_lang: String,
    /// Article root replacing `https://<wiki_lang>.wikipedia.org/wiki/`.
    pub wiki_base_url: Option<String>,
    pub process_top_n: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_FILE),
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            default_ext: DEFAULT_EXTENSION.to_string(),
            wiki_lang: DEFAULT_WIKI_LANG.to_string(),
            wiki_base_url: None,
            process_top_n: DEFAULT_PROCESS_TOP_N,
        }
    }
}

/// Values read from a configuration file; absent fields keep the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsOverrides {
    pub default_file: Option<String>,
    pub base_dir: Option<String>,
    pub out_dir: Option<String>,
    pub default_ext: Option<String>,
    pub wiki_lang: Option<String>,
    pub wiki_base_url: Option<String>,
    pub process_top_n: Option<usize>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

impl Settings {
    /// Defaults with every present, non-blank override applied.
    pub fn merged(overrides: SettingsOverrides) -> Self {
        let defaults = Self::default();
        let text = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            default_file: text(overrides.default_file)
                .map(PathBuf::from)
                .unwrap_or(defaults.default_file),
            base_dir: text(overrides.base_dir)
                .map(PathBuf::from)
                .unwrap_or(defaults.base_dir),
            out_dir: text(overrides.out_dir)
                .map(PathBuf::from)
                .unwrap_or(defaults.out_dir),
            default_ext: text(overrides.default_ext).unwrap_or(defaults.default_ext),
            wiki_lang: text(overrides.wiki_lang).unwrap_or(defaults.wiki_lang),
            wiki_base_url: text(overrides.wiki_base_url),
            process_top_n: overrides.process_top_n.unwrap_or(defaults.process_top_n),
        }
    }

    /// Where Wikipedia articles are fetched from.
    pub fn wiki_root(&self) -> String {
        match &self.wiki_base_url {
            Some(base) => base.clone(),
            None => wiki_base_url(&self.wiki_lang),
        }
    }
}

/// `key = value` lines; blank lines, `#` comments, lines without `=` and
/// unknown keys are ignored.
pub fn parse_key_value(text: &str) -> SettingsOverrides {
    let mut overrides = SettingsOverrides::default();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().to_string();
        match key.trim() {
            "default_file" => overrides.default_file = Some(value),
            "base_dir" => overrides.base_dir = Some(value),
            "out_dir" => overrides.out_dir = Some(value),
            "default_ext" => overrides.default_ext = Some(value),
            "wiki_lang" => overrides.wiki_lang = Some(value),
            "wiki_base_url" => overrides.wiki_base_url = Some(value),
            "process_top_n" => overrides.process_top_n = value.parse().ok(),
            _ => {}
        }
    }
    overrides
}

pub fn parse_json(text: &str) -> Result<SettingsOverrides, SettingsError> {
    Ok(serde_json::from_str(text)?)
}

/// Reads `path` with the front-end matching its extension (`.json` or
/// `key=value` for anything else).
pub fn try_load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let overrides = if is_json {
        parse_json(&text)?
    } else {
        parse_key_value(&text)
    };
    Ok(Settings::merged(overrides))
}

/// Like [`try_load_settings`] but falls back to the defaults on any error.
pub fn load_settings(path: &Path) -> Settings {
    match try_load_settings(path) {
        Ok(settings) => {
            engine_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(SettingsError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            engine_info!("No config at {:?}, using defaults", path);
            Settings::default()
        }
        Err(err) => {
            engine_warn!("Ignoring config {:?}: {}", path, err);
            Settings::default()
        }
    }
}
