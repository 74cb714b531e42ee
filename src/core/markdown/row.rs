//! Line classification for pipe tables
//!
//! Everything here looks at one line at a time. Block structure lives in
//! [`super::inline`] and [`super::extract`].

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `| :--- | ---: |` style alignment row (one or more dash cells)
    static ref SEPARATOR_ROW: Regex =
        Regex::new(r"^\s*\|?\s*:?-{3,}:?\s*(?:\|\s*:?-{3,}:?\s*)*\|?\s*$").unwrap();

    /// Three or more backticks after optional indentation
    static ref CODE_FENCE: Regex = Regex::new(r"^\s*`{3,}").unwrap();
}

/// What a single line means to the table scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// Opens or closes a fenced code block
    CodeFence,
    /// Could be a header or data row of a pipe table
    TableRow,
    /// Prose, headings, list items, quotes
    Other,
}

/// Classify a line. The fence check wins over the table-row check.
pub fn classify_line(line: &str) -> LineKind {
    if is_code_fence(line) {
        LineKind::CodeFence
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else if looks_like_table_row(line) {
        LineKind::TableRow
    } else {
        LineKind::Other
    }
}

/// Whether the line is a fence marker (```` ``` ````, optionally indented)
pub fn is_code_fence(line: &str) -> bool {
    CODE_FENCE.is_match(line)
}

/// Whether the line can be a table row: non-blank, contains `|`, and is not
/// a blockquote, heading or list item.
pub fn looks_like_table_row(line: &str) -> bool {
    let s = line.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with(['>', '#', '-', '*']) {
        return false;
    }
    s.contains('|')
}

/// Whether the line is an alignment row such as `|:---|---:|`.
///
/// A single dash cell only counts when it carries at least one bar, so a
/// bare `---` thematic break never opens a table.
pub fn is_separator_row(line: &str) -> bool {
    SEPARATOR_ROW.is_match(line) && line.contains('|')
}

/// Split a pipe row into trimmed cells.
///
/// One leading and one trailing unescaped bar are dropped, the rest is split
/// on unescaped bars and `\|` is turned back into a literal `|`. Any other
/// backslash sequence is kept as written.
pub fn split_pipe_row(line: &str) -> Vec<String> {
    let mut s = line.trim();
    if let Some(rest) = s.strip_prefix('|') {
        s = rest;
    }
    if s.ends_with('|') && !ends_escaped(&s[..s.len() - 1]) {
        s = &s[..s.len() - 1];
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('|') => current.push('|'),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            '|' => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);

    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

/// True when `s` ends in an odd run of backslashes, i.e. escapes what follows.
fn ends_escaped(s: &str) -> bool {
    s.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}
