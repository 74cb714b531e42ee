//! Extracted tables and their text renderings
//!
//! Every extractor (Markdown, HTML, Word) produces [`ExtractedTable`]s; the
//! formatters here turn them into TSV or back into Markdown pipe tables.

/// Largest column span honoured for a merged cell (the HTML `colspan` limit)
pub const MAX_COLUMN_SPAN: usize = 1000;

/// Clamp a merged cell's column span to `1..=MAX_COLUMN_SPAN`.
pub(crate) fn clamp_span(span: usize) -> usize {
    if span > MAX_COLUMN_SPAN {
        log::warn!("clamping column span {span} to {MAX_COLUMN_SPAN}");
    }
    span.clamp(1, MAX_COLUMN_SPAN)
}

/// A table pulled out of a source document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedTable {
    /// Section title (nearest heading, or `Table N`); may be empty
    pub title: String,
    /// Rows of cell text, possibly ragged
    pub rows: Vec<Vec<String>>,
}

impl ExtractedTable {
    pub fn new(title: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the widest row
    pub fn num_cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Rows padded with empty cells up to [`Self::num_cols`]
    pub fn padded_rows(&self) -> Vec<Vec<String>> {
        let width = self.num_cols();
        self.rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.resize(width, String::new());
                row
            })
            .collect()
    }
}

/// Options for [`format_as_tsv`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TsvOptions {
    /// Emit a `# Title` line and a blank line before each table
    pub include_headers: bool,
    /// Pad every row to the table's widest row
    pub normalize_columns: bool,
}

impl Default for TsvOptions {
    fn default() -> Self {
        Self {
            include_headers: true,
            normalize_columns: true,
        }
    }
}

impl TsvOptions {
    /// No section headers, rows padded
    pub fn plain() -> Self {
        Self {
            include_headers: false,
            ..Default::default()
        }
    }
}

/// Render tables as tab-separated values.
///
/// Each table is followed by a blank line; tables without rows are skipped.
pub fn format_as_tsv(tables: &[ExtractedTable], options: &TsvOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    for table in tables.iter().filter(|t| !t.is_empty()) {
        if options.include_headers && !table.title.is_empty() {
            lines.push(format!("# {}", table.title));
            lines.push(String::new());
        }

        let rows = if options.normalize_columns {
            table.padded_rows()
        } else {
            table.rows.clone()
        };
        lines.extend(rows.iter().map(|row| row.join("\t")));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render tables as Markdown pipe tables under `## Title` headings.
///
/// The first row becomes the header; rows are padded to a common width.
pub fn format_as_markdown(tables: &[ExtractedTable]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for table in tables.iter().filter(|t| !t.is_empty()) {
        lines.push(format!("## {}", table.title));
        lines.push(String::new());

        let rows = table.padded_rows();
        if let Some((header, body)) = rows.split_first() {
            lines.push(pipe_row(header));
            lines.push(pipe_row(&vec!["---".to_string(); header.len()]));
            lines.extend(body.iter().map(|row| pipe_row(row)));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn pipe_row(cells: &[String]) -> String {
    let escaped: Vec<String> = cells.iter().map(|c| c.replace('|', "\\|")).collect();
    format!("| {} |", escaped.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn sample() -> Vec<ExtractedTable> {
        vec![ExtractedTable::new(
            "Defense",
            vec![row(&["AC", "HP", "Saves"]), row(&["15", "22"])],
        )]
    }

    #[test]
    fn test_tsv_with_headers_and_padding() {
        let tsv = format_as_tsv(&sample(), &TsvOptions::default());
        assert_eq!(tsv, "# Defense\n\nAC\tHP\tSaves\n15\t22\t\n");
    }

    #[test]
    fn test_tsv_plain_ragged() {
        let opts = TsvOptions {
            include_headers: false,
            normalize_columns: false,
        };
        let tsv = format_as_tsv(&sample(), &opts);
        assert_eq!(tsv, "AC\tHP\tSaves\n15\t22\n");
    }

    #[test]
    fn test_tsv_skips_empty_tables() {
        let tables = vec![ExtractedTable::new("Empty", vec![]), sample().remove(0)];
        let tsv = format_as_tsv(&tables, &TsvOptions::plain());
        assert!(!tsv.contains("Empty"));
        assert!(tsv.starts_with("AC\tHP\tSaves"));
    }

    #[test]
    fn test_tsv_untitled_table_has_no_header_line() {
        let tables = vec![ExtractedTable::new("", vec![row(&["a", "b"])])];
        assert_eq!(format_as_tsv(&tables, &TsvOptions::default()), "a\tb\n");
    }

    #[test]
    fn test_markdown_rendering() {
        let md = format_as_markdown(&sample());
        assert_eq!(
            md,
            "## Defense\n\n| AC | HP | Saves |\n| --- | --- | --- |\n| 15 | 22 |  |\n"
        );
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let tables = vec![ExtractedTable::new("T", vec![row(&["a|b"])])];
        assert!(format_as_markdown(&tables).contains(r"| a\|b |"));
    }
}
