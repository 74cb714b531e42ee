//! Source format detection
//!
//! The file extension decides when it is known; otherwise the content is
//! sniffed for HTML table tags, falling back to Markdown.

use std::fmt;
use std::path::Path;

use phf::phf_map;

/// Kind of document a table is extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Markdown,
    Html,
    Docx,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Markdown => write!(f, "Markdown"),
            SourceFormat::Html => write!(f, "HTML"),
            SourceFormat::Docx => write!(f, "Word"),
        }
    }
}

/// Lowercase extension (without dot) to format
static EXTENSIONS: phf::Map<&'static str, SourceFormat> = phf_map! {
    "md" => SourceFormat::Markdown,
    "markdown" => SourceFormat::Markdown,
    "html" => SourceFormat::Html,
    "htm" => SourceFormat::Html,
    "docx" => SourceFormat::Docx,
};

/// Format implied by a path's extension, if any
pub fn format_from_path(path: &Path) -> Option<SourceFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    EXTENSIONS.get(ext.as_str()).copied()
}

/// Detect the format of `content`, preferring the extension of `path`.
pub fn detect_format(content: &str, path: Option<&Path>) -> SourceFormat {
    if let Some(format) = path.and_then(format_from_path) {
        return format;
    }

    let lower = content.to_ascii_lowercase();
    if lower.contains("<table") || lower.contains("<tr") {
        SourceFormat::Html
    } else {
        SourceFormat::Markdown
    }
}
