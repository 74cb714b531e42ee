//! HTML table extraction
//!
//! Pulls every `<table>` out of an HTML fragment or page, typically a
//! statblock copied from a web source. Entities are decoded by the parser.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::core::table::{clamp_span, ExtractedTable};

lazy_static! {
    static ref TABLE: Selector = Selector::parse("table").unwrap();
    static ref ROW: Selector = Selector::parse("tr").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Extract all tables from HTML, in document order.
///
/// Nested tables are reported separately and do not leak into the cell that
/// contains them. Empty rows and empty tables are dropped; the remaining
/// tables are titled `Table 1`, `Table 2`, ...
pub fn extract_html_tables(content: &str) -> Vec<ExtractedTable> {
    let document = Html::parse_document(content);

    let tables: Vec<ExtractedTable> = document
        .select(&TABLE)
        .map(table_rows)
        .filter(|rows| !rows.is_empty())
        .enumerate()
        .map(|(i, rows)| ExtractedTable::new(format!("Table {}", i + 1), rows))
        .collect();

    log::debug!("found {} html table(s)", tables.len());
    tables
}

fn table_rows(table: ElementRef<'_>) -> Vec<Vec<String>> {
    table
        .select(&ROW)
        .filter(|tr| owning_table(*tr).is_some_and(|owner| owner.id() == table.id()))
        .map(row_cells)
        .filter(|cells| !cells.is_empty())
        .collect()
}

/// Closest enclosing `<table>` of an element.
fn owning_table(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "table")
}

fn row_cells(tr: ElementRef<'_>) -> Vec<String> {
    let mut cells = Vec::new();

    for cell in tr.children().filter_map(ElementRef::wrap) {
        if !matches!(cell.value().name(), "td" | "th") {
            continue;
        }

        let mut text = String::new();
        collect_text(cell, &mut text);
        cells.push(WHITESPACE.replace_all(text.trim(), " ").into_owned());

        for _ in 1..colspan(cell) {
            cells.push(String::new());
        }
    }

    cells
}

fn colspan(cell: ElementRef<'_>) -> usize {
    match cell.value().attr("colspan") {
        None => 1,
        Some(raw) => clamp_span(raw.trim().parse::<usize>().unwrap_or_else(|_| {
            log::warn!("ignoring invalid colspan {raw:?}");
            1
        })),
    }
}

/// Concatenate text below `element`; `<br>` reads as a space and nested
/// tables are skipped.
fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child) {
                    match el.value().name() {
                        "br" => out.push(' '),
                        "table" => {}
                        _ => collect_text(el, out),
                    }
                }
            }
            _ => {}
        }
    }
}
