//! Whole-table extraction from Markdown
//!
//! Unlike the inline rewriter this collects tables out of the document,
//! each titled by the nearest heading above it.

use lazy_static::lazy_static;
use regex::Regex;

use super::row::{is_code_fence, split_pipe_row};
use crate::core::table::ExtractedTable;

/// How far back (in lines) to look for a table's heading
const TITLE_LOOKBACK: usize = 9;

lazy_static! {
    /// Bar-enclosed alignment row, lenient about dash counts
    static ref ALIGNMENT_ROW: Regex = Regex::new(r"^\|[\s:\-|]+\|$").unwrap();
}

/// Extract every bar-led table from a Markdown document.
///
/// A table is a run of lines whose trimmed text starts with `|`. Fenced code
/// is skipped. Alignment rows are dropped from the returned rows.
pub fn extract_markdown_tables(content: &str) -> Vec<ExtractedTable> {
    let lines: Vec<&str> = content.lines().collect();
    let mut tables = Vec::new();
    let mut in_code = false;
    let mut start: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        let fence = is_code_fence(line);
        if fence {
            in_code = !in_code;
        }
        let is_row = !fence && !in_code && line.trim().starts_with('|');

        if is_row {
            start.get_or_insert(i);
        } else if let Some(first) = start.take() {
            tables.push(build_table(&lines, first, i));
        }
    }

    if let Some(first) = start {
        tables.push(build_table(&lines, first, lines.len()));
    }

    log::debug!("found {} markdown table(s)", tables.len());
    tables
}

fn build_table(lines: &[&str], start: usize, end: usize) -> ExtractedTable {
    let rows = lines[start..end]
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !ALIGNMENT_ROW.is_match(l))
        .map(split_pipe_row)
        .collect();

    ExtractedTable::new(find_title(lines, start).unwrap_or_default(), rows)
}

/// Nearest `#` heading or `**bold**` line within the lookback window.
fn find_title(lines: &[&str], start: usize) -> Option<String> {
    lines[start.saturating_sub(TITLE_LOOKBACK)..start]
        .iter()
        .rev()
        .map(|l| l.trim())
        .find(|l| l.starts_with('#') || l.starts_with("**"))
        .map(|l| {
            l.trim_start_matches('#')
                .trim()
                .trim_matches('*')
                .trim()
                .to_string()
        })
}
