pub mod config;
pub mod core;
pub mod engine;
pub mod storage;

pub mod prepend_cmd;
pub mod split_cmd;

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("{0}")]
    Message(String),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl SplitError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        SplitError::Io { path: path.to_path_buf(), source }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        SplitError::Csv { path: path.to_path_buf(), source }
    }
}

pub type SplitResult<T> = Result<T, SplitError>;

// Shared helpers
pub fn now_string() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}

pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> SplitResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|e| SplitError::io(dir, e))?;
        }
    }
    let json = serde_json::to_vec_pretty(value).map_err(|e| SplitError::Message(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| SplitError::io(path, e))
}
