//! Rewrites relative `src/` hrefs of a light CSV into absolute URLs.
//!
//! Non-streaming: the whole document is loaded, rewritten and written back.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::SplitResult;
use crate::core::{HREF_COLUMN, Row};
use crate::storage::{read_all, write_all};

/// Remote host the HTML files are published to.
pub const DEFAULT_REPO_PREFIX: &str = "https://raw.githubusercontent.com/huyvv-hocmai/tests/main/";

/// Only hrefs under this relative path are rewritten.
pub const RELATIVE_HREF_PREFIX: &str = "src/";

pub const DEFAULT_INPUT_NAME: &str = "data_clear.csv";
pub const DEFAULT_OUTPUT_NAME: &str = "done.csv";

#[derive(Debug, Clone)]
pub struct RewriteOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub prefix: String,
}

impl RewriteOptions {
    /// `<root>/data_clear.csv` to `<root>/done.csv`.
    pub fn in_root(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        let root = root.into();
        RewriteOptions {
            input: root.join(DEFAULT_INPUT_NAME),
            output: root.join(DEFAULT_OUTPUT_NAME),
            prefix: prefix.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RewriteSummary {
    pub rows: usize,
    pub rewritten: usize,
}

/// New value for `href`, or `None` when it is left untouched.
pub fn rewrite_href(href: &str, prefix: &str) -> Option<String> {
    href.starts_with(RELATIVE_HREF_PREFIX)
        .then(|| format!("{prefix}{}", href.replace('\\', "/")))
}

/// Rewrite every row in place. Returns how many hrefs changed.
pub fn rewrite(rows: &mut [Row], prefix: &str) -> usize {
    let mut rewritten = 0;
    for row in rows.iter_mut() {
        let Some(updated) = row.get(HREF_COLUMN).and_then(|h| rewrite_href(h, prefix)) else {
            continue;
        };
        row.set(HREF_COLUMN, updated);
        rewritten += 1;
    }
    rewritten
}

pub fn run(opts: &RewriteOptions) -> SplitResult<RewriteSummary> {
    info!(input = %opts.input.display(), "loading light CSV");
    let (headers, mut rows) = read_all(&opts.input)?;
    let rewritten = rewrite(&mut rows, &opts.prefix);
    write_all(&opts.output, headers, &rows)?;

    let summary = RewriteSummary {
        rows: rows.len(),
        rewritten,
    };
    info!(rows = summary.rows, rewritten = summary.rewritten, "href rewrite complete");
    Ok(summary)
}
