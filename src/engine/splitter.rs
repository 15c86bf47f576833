//! Row-to-file splitting pipeline.
//!
//! Streams rows from the input CSV, moves each non-blank HTML value into its
//! own file under the HTML directory and emits the row with an `href`
//! pointing at that file. Output is one row per input row, in input order.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::SplitResult;
use crate::core::{ColumnPlan, HREF_COLUMN, Row, join_dir, join_href, slug, slug_source};
use crate::storage::{HtmlStore, RowReader, RowWriter};

/// Inputs for a split run.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Source CSV with embedded HTML
    pub input: PathBuf,
    /// Light CSV to write
    pub out_csv: PathBuf,
    /// Directory receiving one `.html` file per row with content
    pub html_dir: PathBuf,
    /// Prefix for hrefs; when absent hrefs are `<html_dir>/<file>`
    pub href_prefix: Option<String>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            input: PathBuf::from("data.csv"),
            out_csv: PathBuf::from("data_clear.csv"),
            html_dir: PathBuf::from("src"),
            href_prefix: None,
        }
    }
}

impl SplitOptions {
    /// Set the href prefix. An empty prefix means no prefix.
    pub fn with_href_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.href_prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }
}

/// What happened to one row's HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Written { file_name: String, href: String },
    /// No HTML column, or a blank value.
    Skipped,
    WriteFailed { file_name: String, reason: String },
}

impl RowOutcome {
    /// Value stored in the row's `href` column.
    pub fn href(&self) -> &str {
        match self {
            RowOutcome::Written { href, .. } => href,
            RowOutcome::Skipped | RowOutcome::WriteFailed { .. } => "",
        }
    }
}

/// Counters for a completed run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SplitSummary {
    pub rows: usize,
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub html_column: Option<String>,
}

impl SplitSummary {
    fn record(&mut self, outcome: &RowOutcome) {
        self.rows += 1;
        match outcome {
            RowOutcome::Written { .. } => self.written += 1,
            RowOutcome::Skipped => self.skipped += 1,
            RowOutcome::WriteFailed { .. } => self.failed += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitStatus {
    Completed(SplitSummary),
    /// The input had a header (or nothing) but no records; nothing was written.
    EmptyInput,
}

/// `<slug>-<index>.html`, the slug taken from the first non-empty id column.
pub fn file_name_for(index: usize, row: &Row) -> String {
    let fallback = format!("row-{index}");
    let base = slug(Some(slug_source(row).unwrap_or(&fallback)), &fallback);
    let base = if base.is_empty() { "row" } else { base.as_str() };
    format!("{base}-{index}.html")
}

/// Process a single row: extract its HTML, write the file, set `href`.
///
/// Write failures are logged and downgrade the row to an empty href; they
/// never abort the run.
pub fn split_row(
    index: usize,
    mut row: Row,
    plan: &ColumnPlan,
    store: &HtmlStore,
    href_prefix: Option<&str>,
) -> (Row, RowOutcome) {
    let html = plan.html_column.as_deref().and_then(|c| row.remove(c));

    let outcome = match html {
        Some(html) if !html.trim().is_empty() => {
            let file_name = file_name_for(index, &row);
            match store.write(&file_name, &html) {
                Ok(_) => {
                    let href = match href_prefix {
                        Some(prefix) => join_href(prefix, &file_name),
                        None => join_dir(store.dir(), &file_name),
                    };
                    debug!(row = index, file = %file_name, bytes = html.len(), "wrote HTML file");
                    RowOutcome::Written { file_name, href }
                }
                Err(e) => {
                    warn!(row = index, file = %file_name, error = %e, "failed to write HTML file");
                    RowOutcome::WriteFailed {
                        file_name,
                        reason: e.to_string(),
                    }
                }
            }
        }
        _ => {
            debug!(row = index, "no HTML content");
            RowOutcome::Skipped
        }
    };

    row.set(HREF_COLUMN, outcome.href());
    (row, outcome)
}

/// Split every row of `rows`, handing each output row to `emit` in order.
///
/// The first read or emit error stops the stream and is returned.
pub fn split_stream<I, F>(
    rows: I,
    plan: &ColumnPlan,
    store: &HtmlStore,
    href_prefix: Option<&str>,
    mut emit: F,
) -> SplitResult<SplitSummary>
where
    I: IntoIterator<Item = SplitResult<Row>>,
    F: FnMut(&Row) -> SplitResult<()>,
{
    let mut summary = SplitSummary {
        html_column: plan.html_column.clone(),
        ..SplitSummary::default()
    };
    for (index, row) in rows.into_iter().enumerate() {
        let (out, outcome) = split_row(index, row?, plan, store, href_prefix);
        emit(&out)?;
        summary.record(&outcome);
    }
    Ok(summary)
}

/// Run the whole pipeline from `opts.input` to `opts.out_csv` and `opts.html_dir`.
///
/// The output CSV is created only once the first row has been read; an
/// input without records returns [`SplitStatus::EmptyInput`] and leaves no
/// output CSV behind.
pub fn run(opts: &SplitOptions) -> SplitResult<SplitStatus> {
    let store = HtmlStore::new(&opts.html_dir);
    store.ensure()?;

    info!(input = %opts.input.display(), "reading input CSV");
    let mut rows = RowReader::open(&opts.input)?;
    let first = match rows.next() {
        Some(row) => row?,
        None => return Ok(SplitStatus::EmptyInput),
    };

    let plan = ColumnPlan::from_first_row(&first);
    match plan.html_column.as_deref() {
        Some(column) => info!(column = %column, "detected HTML column"),
        None => warn!("no HTML column found; every href will be empty"),
    }

    let mut writer = RowWriter::create(&opts.out_csv, plan.output_headers.clone())?;
    let summary = split_stream(
        std::iter::once(Ok(first)).chain(rows),
        &plan,
        &store,
        opts.href_prefix.as_deref(),
        |row| writer.write_row(row),
    )?;
    writer.finish()?;

    info!(
        rows = summary.rows,
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "split complete"
    );
    Ok(SplitStatus::Completed(summary))
}

/// Absolute form of the HTML directory for reporting, with `.` and `..` folded.
pub fn resolved_html_dir(dir: &Path) -> PathBuf {
    let absolute = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}
