//! Core row model and the pure helpers the pipelines are built from.

pub mod classify;
pub mod href;
pub mod row;
pub mod slug;

// Re-export key types for convenience
pub use classify::{
    ColumnPlan, HREF_COLUMN, HTML_COLUMN_CANDIDATES, SLUG_SOURCE_COLUMNS, classify, slug_source,
};
pub use href::{join_dir, join_href};
pub use row::Row;
pub use slug::{FALLBACK_SLUG, MAX_SLUG_LEN, slug};
