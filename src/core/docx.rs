//! Word (`.docx`) table extraction
//!
//! Unzips the archive, streams `word/document.xml` with `quick-xml` and
//! collects every top-level `w:tbl` as rows of plain cell text.

use std::io::{Cursor, Read};

use lazy_static::lazy_static;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use regex::Regex;
use zip::ZipArchive;

use crate::core::table::{clamp_span, ExtractedTable};
use crate::utils::error::{ConversionError, ConversionResult};

const DOCUMENT_PART: &str = "word/document.xml";

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Extract all top-level tables from a `.docx` file's bytes.
///
/// Paragraphs inside a cell are joined by a space. A cell spanning N grid
/// columns is followed by N - 1 empty cells so merged headers keep their
/// place. A vertically merged continuation cell repeats the text of the cell
/// above it. Text of tables nested inside cells is ignored.
pub fn extract_docx_tables(data: &[u8]) -> ConversionResult<Vec<ExtractedTable>> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;

    let mut xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(ConversionError::missing_part(DOCUMENT_PART))
        }
        Err(e) => return Err(e.into()),
    }

    let grids = parse_tables(&xml)?;
    let tables: Vec<ExtractedTable> = grids
        .into_iter()
        .filter(|rows| !rows.is_empty())
        .enumerate()
        .map(|(i, rows)| ExtractedTable::new(format!("Table {}", i + 1), rows))
        .collect();

    log::debug!("found {} docx table(s)", tables.len());
    Ok(tables)
}

/// Builder state for the table currently being read
#[derive(Debug, Default)]
struct TableBuilder {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    paragraphs: Vec<String>,
    paragraph: String,
    grid_span: usize,
    v_merge_continue: bool,
    in_cell: bool,
    in_text: bool,
}

impl TableBuilder {
    fn start_cell(&mut self) {
        self.in_cell = true;
        self.grid_span = 1;
        self.v_merge_continue = false;
        self.paragraphs.clear();
        self.paragraph.clear();
    }

    fn end_paragraph(&mut self) {
        if self.in_cell {
            self.paragraphs.push(std::mem::take(&mut self.paragraph));
        }
    }

    fn end_cell(&mut self) {
        if !self.paragraph.is_empty() {
            self.end_paragraph();
        }
        let text = if self.v_merge_continue {
            self.rows
                .last()
                .and_then(|above| above.get(self.row.len()))
                .cloned()
                .unwrap_or_default()
        } else {
            let joined = self.paragraphs.join(" ");
            WHITESPACE.replace_all(joined.trim(), " ").into_owned()
        };
        self.row.push(text);
        for _ in 1..self.grid_span {
            self.row.push(String::new());
        }
        self.in_cell = false;
    }

    fn end_row(&mut self) {
        self.rows.push(std::mem::take(&mut self.row));
    }
}

/// Walk the document XML and return the rows of each top-level table.
fn parse_tables(xml: &str) -> ConversionResult<Vec<Vec<Vec<String>>>> {
    let mut reader = Reader::from_str(xml);
    let mut tables = Vec::new();
    let mut builder = TableBuilder::default();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"tbl" => {
                    depth += 1;
                    if depth == 1 {
                        builder = TableBuilder::default();
                    }
                }
                _ if depth != 1 => {}
                b"tr" => builder.row.clear(),
                b"tc" => builder.start_cell(),
                b"t" => builder.in_text = true,
                b"gridSpan" => builder.grid_span = grid_span(e)?,
                b"vMerge" => builder.v_merge_continue = v_merge_continues(e)?,
                _ => {}
            },
            Event::Empty(ref e) if depth == 1 && builder.in_cell => match e.local_name().as_ref() {
                b"tab" | b"br" | b"cr" => builder.paragraph.push(' '),
                b"gridSpan" => builder.grid_span = grid_span(e)?,
                b"vMerge" => builder.v_merge_continue = v_merge_continues(e)?,
                b"p" => builder.paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(ref t) if depth == 1 && builder.in_cell && builder.in_text => {
                builder.paragraph.push_str(&t.unescape()?);
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"tbl" => {
                    if depth == 1 {
                        tables.push(std::mem::take(&mut builder.rows));
                    }
                    depth = depth.saturating_sub(1);
                }
                _ if depth != 1 => {}
                b"t" => builder.in_text = false,
                b"p" => builder.end_paragraph(),
                b"tc" => builder.end_cell(),
                b"tr" => builder.end_row(),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(tables)
}

fn grid_span(e: &BytesStart<'_>) -> ConversionResult<usize> {
    let span = match e.try_get_attribute("w:val")? {
        Some(attr) => attr.unescape_value()?.trim().parse::<usize>().unwrap_or(1),
        None => 1,
    };
    Ok(clamp_span(span))
}

/// `w:vMerge` without a value, or with `continue`, marks a continuation cell.
fn v_merge_continues(e: &BytesStart<'_>) -> ConversionResult<bool> {
    Ok(match e.try_get_attribute("w:val")? {
        Some(attr) => attr.unescape_value()?.trim() == "continue",
        None => true,
    })
}
