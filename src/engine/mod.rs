//! Engine module: the two dataset passes.
//!
//! - `splitter`: raw CSV to light CSV plus one HTML file per row (streaming).
//! - `rewriter`: light CSV hrefs to absolute URLs (whole-file, in memory).
//!
//! Run order is split first, rewrite later as a separate command.

pub mod rewriter;
pub mod splitter;

// Re-export key types for convenience
pub use rewriter::{DEFAULT_REPO_PREFIX, RewriteOptions, RewriteSummary, rewrite, rewrite_href};
pub use splitter::{
    RowOutcome, SplitOptions, SplitStatus, SplitSummary, file_name_for, split_row, split_stream,
};
