use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::SplitResult;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "csv-html-split.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SplitSection {
    pub input: Option<PathBuf>,
    pub out_csv: Option<PathBuf>,
    pub html_dir: Option<PathBuf>,
    pub href_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PrependSection {
    pub root: Option<PathBuf>,
    pub prefix: Option<String>,
}

/// Defaults layered under CLI flags.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub split: SplitSection,
    #[serde(default)]
    pub prepend: PrependSection,
}

pub fn parse_settings(s: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str(s)?)
}

fn read_settings(path: &Path) -> anyhow::Result<Settings> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_settings(&s).with_context(|| format!("invalid config {}", path.display()))
}

/// Load settings from `explicit`, else from [`DEFAULT_CONFIG_FILE`] if it
/// exists, else built-in defaults.
///
/// An explicit path that cannot be read is an error; a missing default file is not.
pub fn load_settings(explicit: Option<&Path>) -> SplitResult<Settings> {
    let settings = match explicit {
        Some(path) => read_settings(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.is_file() {
                read_settings(path)?
            } else {
                Settings::default()
            }
        }
    };
    Ok(settings)
}
