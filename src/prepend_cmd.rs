use std::path::PathBuf;

use crate::SplitResult;
use crate::config::Settings;
use crate::engine::rewriter::{self, DEFAULT_REPO_PREFIX, RewriteOptions, RewriteSummary};

/// Rewrite `<root>/data_clear.csv` into `<root>/done.csv`.
///
/// `root` falls back to the config file, then the working directory; the
/// prefix to the config file, then [`DEFAULT_REPO_PREFIX`].
pub fn run(
    root: Option<PathBuf>,
    prefix: Option<String>,
    settings: &Settings,
) -> SplitResult<RewriteSummary> {
    let cfg = &settings.prepend;
    let root = root
        .or_else(|| cfg.root.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let prefix = prefix
        .or_else(|| cfg.prefix.clone())
        .unwrap_or_else(|| DEFAULT_REPO_PREFIX.to_string());

    let opts = RewriteOptions::in_root(root, prefix);
    let summary = rewriter::run(&opts)?;
    println!("Wrote {}", opts.output.display());
    Ok(summary)
}
