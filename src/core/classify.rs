//! HTML column detection and per-run column layout.

use super::row::Row;

/// Accepted spellings of the HTML column, in priority order.
pub const HTML_COLUMN_CANDIDATES: &[&str] = &["HTML", "html", "Html", "HTML nội dung"];

/// Columns tried, in order, for the file-name slug.
pub const SLUG_SOURCE_COLUMNS: &[&str] = &["tohop_id", "school_id", "Trường", "Tổ hợp"];

/// Column that holds the reference to the emitted HTML file.
pub const HREF_COLUMN: &str = "href";

/// First candidate present as a key of `row`.
///
/// Exact key match; the candidate list carries every accepted spelling.
pub fn classify<'a>(row: &Row, candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().copied().find(|c| row.contains(c))
}

/// First non-empty value among [`SLUG_SOURCE_COLUMNS`].
pub fn slug_source(row: &Row) -> Option<&str> {
    SLUG_SOURCE_COLUMNS
        .iter()
        .filter_map(|c| row.get(c))
        .find(|v| !v.is_empty())
}

/// Column layout resolved once from the first row and reused for every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan {
    pub html_column: Option<String>,
    pub output_headers: Vec<String>,
}

impl ColumnPlan {
    /// Output headers are the first row's columns minus the HTML column,
    /// with `href` appended when absent.
    pub fn from_first_row(row: &Row) -> Self {
        let html_column = classify(row, HTML_COLUMN_CANDIDATES).map(str::to_string);
        let mut output_headers: Vec<String> = row
            .columns()
            .filter(|c| Some(*c) != html_column.as_deref())
            .map(str::to_string)
            .collect();
        if !output_headers.iter().any(|h| h == HREF_COLUMN) {
            output_headers.push(HREF_COLUMN.to_string());
        }
        ColumnPlan { html_column, output_headers }
    }
}
