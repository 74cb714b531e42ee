//! Inline pipe-table rewriter
//!
//! Replaces every Markdown pipe table in a document with tab-delimited lines,
//! in place, leaving prose and fenced code untouched. The result is ready for
//! a DTP "Convert Text to Table" pass with Tab / Paragraph separators.
//!
//! # Architecture
//!
//! ```text
//! lines -> ScanState machine (Normal | InCodeFence) -> collect block -> TSV lines
//! ```
//!
//! A block opens on a table-row candidate immediately followed by an
//! alignment row, then greedily absorbs every following candidate row.

use super::row::{classify_line, is_separator_row, split_pipe_row, LineKind};

/// Scanner state between lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    InCodeFence,
}

impl ScanState {
    fn toggled(self) -> Self {
        match self {
            ScanState::Normal => ScanState::InCodeFence,
            ScanState::InCodeFence => ScanState::Normal,
        }
    }
}

/// Result of an inline rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineConversion {
    /// The rewritten document
    pub text: String,
    /// Number of table blocks replaced
    pub tables_converted: usize,
}

/// Rewrite all pipe tables in `text` as tab-delimited lines.
///
/// Never fails: anything that is not a well-formed table block passes
/// through unchanged. Every line keeps its own terminator (`\n` or `\r\n`),
/// so the output has a trailing newline exactly when the input did.
pub fn convert_tables_inline(text: &str) -> InlineConversion {
    let lines = split_lines(text);
    let mut out = String::with_capacity(text.len());
    let mut state = ScanState::default();
    let mut tables_converted = 0;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let kind = classify_line(line.content);

        if kind == LineKind::CodeFence {
            state = state.toggled();
            line.write_to(&mut out);
            i += 1;
            continue;
        }

        if state == ScanState::InCodeFence {
            line.write_to(&mut out);
            i += 1;
            continue;
        }

        let opens_table = kind == LineKind::TableRow
            && lines
                .get(i + 1)
                .is_some_and(|next| is_separator_row(next.content));
        if !opens_table {
            line.write_to(&mut out);
            i += 1;
            continue;
        }

        let end = block_end(&lines, i);
        log::debug!(
            "table {} at line {}: {} row(s)",
            tables_converted + 1,
            i + 1,
            end - i - 1
        );

        // Header, then data rows; the alignment row at i + 1 carries no data.
        for row in std::iter::once(&lines[i]).chain(&lines[i + 2..end]) {
            out.push_str(&to_tsv_line(row.content));
            out.push_str(row.ending);
        }
        tables_converted += 1;
        i = end;

        if lines.get(i).is_some_and(|next| !next.content.trim().is_empty()) {
            out.push_str(lines[end - 1].ending);
        }
    }

    if state == ScanState::InCodeFence {
        log::warn!("unterminated code fence; rest of document left untouched");
    }

    InlineConversion {
        text: out,
        tables_converted,
    }
}

/// One input line and the terminator that followed it
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    content: &'a str,
    /// `"\n"`, `"\r\n"`, or empty for an unterminated last line
    ending: &'a str,
}

impl Line<'_> {
    fn write_to(&self, out: &mut String) {
        out.push_str(self.content);
        out.push_str(self.ending);
    }
}

fn split_lines(text: &str) -> Vec<Line<'_>> {
    text.split_inclusive('\n')
        .map(|raw| {
            let content = raw
                .strip_suffix('\n')
                .map_or(raw, |l| l.strip_suffix('\r').unwrap_or(l));
            Line {
                content,
                ending: &raw[content.len()..],
            }
        })
        .collect()
}

/// Index one past the last row of the block whose header is at `start`.
fn block_end(lines: &[Line<'_>], start: usize) -> usize {
    let mut j = start + 2;
    while j < lines.len() && classify_line(lines[j].content) == LineKind::TableRow {
        j += 1;
    }
    j
}

fn to_tsv_line(row: &str) -> String {
    split_pipe_row(row).join("\t")
}
