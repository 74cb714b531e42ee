//! Markdown pipe tables
//!
//! - [`row`]: per-line classification, alignment rows, cell splitting
//! - [`inline`]: rewrite tables in place as tab-delimited lines
//! - [`extract`]: pull tables out of a document with their headings

pub mod extract;
pub mod inline;
pub mod row;


// Re-export public API
pub use extract::extract_markdown_tables;
pub use inline::{convert_tables_inline, InlineConversion, ScanState};
pub use row::{
    classify_line, is_code_fence, is_separator_row, looks_like_table_row, split_pipe_row, LineKind,
};
