use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::config::Settings;
use crate::engine::splitter::{self, SplitOptions, SplitStatus, SplitSummary};
use crate::{SplitResult, now_string, write_json};

#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub timestamp: String,
    pub input: PathBuf,
    pub out_csv: PathBuf,
    pub html_dir: PathBuf,
    pub href_prefix: Option<String>,
    #[serde(flatten)]
    pub summary: SplitSummary,
}

/// Resolve options: CLI value, then config file, then built-in default.
pub fn resolve_options(
    input: Option<PathBuf>,
    out_csv: Option<PathBuf>,
    html_dir: Option<PathBuf>,
    href_prefix: Option<String>,
    settings: &Settings,
) -> SplitOptions {
    let defaults = SplitOptions::default();
    let cfg = &settings.split;
    let opts = SplitOptions {
        input: input.or_else(|| cfg.input.clone()).unwrap_or(defaults.input),
        out_csv: out_csv.or_else(|| cfg.out_csv.clone()).unwrap_or(defaults.out_csv),
        html_dir: html_dir.or_else(|| cfg.html_dir.clone()).unwrap_or(defaults.html_dir),
        href_prefix: None,
    };
    opts.with_href_prefix(href_prefix.or_else(|| cfg.href_prefix.clone()).unwrap_or_default())
}

pub fn run(
    input: Option<PathBuf>,
    out_csv: Option<PathBuf>,
    html_dir: Option<PathBuf>,
    href_prefix: Option<String>,
    json_out: Option<PathBuf>,
    settings: &Settings,
) -> SplitResult<SplitStatus> {
    let opts = resolve_options(input, out_csv, html_dir, href_prefix, settings);
    let status = splitter::run(&opts)?;

    let SplitStatus::Completed(summary) = &status else {
        eprintln!("No records found in input CSV.");
        return Ok(status);
    };

    let html_dir = splitter::resolved_html_dir(&opts.html_dir);
    println!("Wrote light CSV: {}", opts.out_csv.display());
    println!("Saved HTML files to: {}", html_dir.display());

    if let Some(path) = json_out {
        let report = SplitReport {
            timestamp: now_string(),
            input: opts.input.clone(),
            out_csv: opts.out_csv.clone(),
            html_dir,
            href_prefix: opts.href_prefix.clone(),
            summary: summary.clone(),
        };
        write_json(&path, &report)?;
        info!(path = %path.display(), "wrote JSON report");
    }

    Ok(status)
}
