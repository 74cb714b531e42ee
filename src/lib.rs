//! # tabtsv
//!
//! Convert tables in Markdown, HTML and Word documents to tab-delimited text
//! for a desktop publishing "Convert Text to Table" import.
//!
//! ## Features
//!
//! - **Inline rewrite**: replace Markdown pipe tables inside a document with
//!   tab-delimited lines, leaving prose and fenced code untouched
//! - **Extraction**: pull every table out of Markdown, HTML or `.docx`
//! - **Formatting**: TSV with optional section headers, or Markdown pipe tables
//! - **Format detection**: by extension, then by content
//!
//! ## Usage Examples
//!
//! ### Inline Rewrite
//!
//! ```rust
//! use tabtsv::convert_tables_inline;
//!
//! let doc = "| Name | AC |\n| --- | --- |\n| Orc | 13 |\n";
//! let result = convert_tables_inline(doc);
//! assert_eq!(result.text, "Name\tAC\nOrc\t13\n");
//! assert_eq!(result.tables_converted, 1);
//! ```
//!
//! ### Extraction
//!
//! ```rust
//! use tabtsv::{convert_text, TsvOptions};
//!
//! let tsv = convert_text("<table><tr><td>AC</td><td>15</td></tr></table>", &TsvOptions::default(), None);
//! assert_eq!(tsv, "# Table 1\n\nAC\t15\n");
//! ```

/// Core conversion modules
pub mod core;

/// Utility modules
pub mod utils;

// Re-export core conversion functions
pub use core::detect::{detect_format, format_from_path, SourceFormat};
pub use core::docx::extract_docx_tables;
pub use core::html::extract_html_tables;
pub use core::markdown::{
    convert_tables_inline, extract_markdown_tables, split_pipe_row, InlineConversion,
};
pub use core::table::{format_as_markdown, format_as_tsv, ExtractedTable, TsvOptions};

// Re-export utilities
pub use utils::error::{ConversionError, ConversionResult};
pub use utils::files;

/// Extract tables from raw document bytes in the given format.
///
/// Markdown and HTML input must be UTF-8.
pub fn extract_tables(input: &[u8], format: SourceFormat) -> ConversionResult<Vec<ExtractedTable>> {
    match format {
        SourceFormat::Docx => extract_docx_tables(input),
        SourceFormat::Markdown | SourceFormat::Html => {
            let text = std::str::from_utf8(input)
                .map_err(|e| ConversionError::invalid(format!("input is not UTF-8: {e}")))?;
            Ok(extract_text_tables(text, format))
        }
    }
}

/// Extract tables from a text document (Markdown or HTML).
///
/// `SourceFormat::Docx` is a binary format and yields no tables here; use
/// [`extract_tables`] with the file bytes instead.
pub fn extract_text_tables(content: &str, format: SourceFormat) -> Vec<ExtractedTable> {
    match format {
        SourceFormat::Markdown => extract_markdown_tables(content),
        SourceFormat::Html => extract_html_tables(content),
        SourceFormat::Docx => {
            log::warn!("docx content cannot be read as text");
            Vec::new()
        }
    }
}

/// Detect (unless forced), extract and render tables from text as TSV.
pub fn convert_text(content: &str, options: &TsvOptions, format: Option<SourceFormat>) -> String {
    let format = format.unwrap_or_else(|| detect_format(content, None));
    format_as_tsv(&extract_text_tables(content, format), options)
}
