//! Storage layer: CSV row streams and the HTML output directory.

pub mod csv;
pub mod html;

// Re-export key types
pub use self::csv::{RowReader, RowWriter, read_all, write_all};
pub use self::html::HtmlStore;
