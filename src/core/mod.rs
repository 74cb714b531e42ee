//! Core conversion modules
//!
//! - [`markdown`]: pipe-table rewriting and extraction
//! - [`html`]: `<table>` extraction
//! - [`docx`]: Word table extraction
//! - [`table`]: the shared table type and its TSV / Markdown renderings
//! - [`detect`]: source format detection

pub mod detect;
pub mod docx;
pub mod html;
pub mod markdown;
pub mod table;
