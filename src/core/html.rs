// src/core/html.rs
//! Fragment harvesting.
//!
//! Turns a parsed document into the ordered text fragments the extractor
//! scans. Text is rendered roughly the way a browser shows it: block elements
//! start new lines, table cells are separated by spaces, and `script`/`style`
//! content is skipped.
//!
//! What the vendor asks for is described by a list of [`Source`]s; they are
//! harvested in order and their fragments concatenated.

use scraper::{ElementRef, Html, Node, Selector};

use super::sanitize::{normalize_ws, to_lower};

/// One place in the document to harvest fragments from.
#[derive(Clone, Copy, Debug)]
pub enum Source {
    /// `<tr>` rows of `<table>` elements; each row with at least `min_cells`
    /// `<td>` cells becomes one fragment.
    TableRows {
        min_cells: usize,
        /// Skip the first row of every table (header row).
        skip_first_row: bool,
        /// Use the first cell's text only instead of all cells joined.
        first_cell_only: bool,
        /// Only look at the first N tables.
        max_tables: Option<usize>,
    },
    /// Whole text of every element matching the selector.
    Elements(&'static str),
    /// Every non-empty line of every element matching the selector.
    Lines(&'static str),
    /// Every non-empty line of `<body>`.
    BodyLines,
    /// Headings matching the selector whose text contains one of `gate`,
    /// then the lines of the next sibling element if its tag is in `follow`.
    Headings {
        selector: &'static str,
        gate: &'static [&'static str],
        follow: &'static [&'static str],
    },
}

/// A table row split into cells, for column-based pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowCells {
    pub cells: Vec<String>,
    /// `href` of the first link per cell, if any.
    pub links: Vec<Option<String>>,
}

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// Harvest all sources in order.
pub fn harvest(doc: &Html, sources: &[Source]) -> Vec<String> {
    let mut out = Vec::new();
    for src in sources {
        let before = out.len();
        harvest_one(doc, src, &mut out);
        logd!("Harvest {:?}: {} fragments", src, out.len() - before);
    }
    out
}

fn harvest_one(doc: &Html, src: &Source, out: &mut Vec<String>) {
    match *src {
        Source::TableRows { min_cells, skip_first_row, first_cell_only, max_tables } => {
            for row in table_rows(doc, min_cells, skip_first_row, max_tables) {
                let frag = if first_cell_only {
                    row.cells.into_iter().next().unwrap_or_default()
                } else {
                    row.cells
                        .into_iter()
                        .filter(|c| !c.is_empty())
                        .collect::<Vec<_>>()
                        .join(" ")
                };
                push_fragment(out, frag);
            }
        }
        Source::Elements(css) => {
            let Some(sel) = selector(css) else { return };
            for el in doc.select(&sel) {
                push_fragment(out, rendered_text(el));
            }
        }
        Source::Lines(css) => {
            let Some(sel) = selector(css) else { return };
            for el in doc.select(&sel) {
                push_lines(out, &rendered_text(el));
            }
        }
        Source::BodyLines => {
            let Some(sel) = selector("body") else { return };
            for el in doc.select(&sel) {
                push_lines(out, &rendered_text(el));
            }
        }
        Source::Headings { selector: css, gate, follow } => {
            let Some(sel) = selector(css) else { return };
            for heading in doc.select(&sel) {
                let text = rendered_text(heading);
                let lc = to_lower(&text);
                if !gate.iter().any(|g| lc.contains(g)) { continue; }
                push_fragment(out, text);

                let next = heading.next_siblings().find_map(ElementRef::wrap);
                if let Some(next) = next {
                    if follow.contains(&next.value().name()) {
                        push_lines(out, &rendered_text(next));
                    }
                }
            }
        }
    }
}

/// Rows of `<td>` cells across the document's tables.
pub fn table_rows(
    doc: &Html,
    min_cells: usize,
    skip_first_row: bool,
    max_tables: Option<usize>,
) -> Vec<RowCells> {
    let (Some(table_sel), Some(tr_sel), Some(td_sel), Some(a_sel)) =
        (selector("table"), selector("tr"), selector("td"), selector("a[href]"))
    else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    let limit = max_tables.unwrap_or(usize::MAX);
    for table in doc.select(&table_sel).take(limit) {
        for (row_idx, tr) in table.select(&tr_sel).enumerate() {
            if skip_first_row && row_idx == 0 { continue; }

            let tds: Vec<ElementRef> = tr.select(&td_sel).collect();
            if tds.is_empty() || tds.len() < min_cells { continue; }

            let cells = tds.iter().map(|td| normalize_ws(&rendered_text(*td))).collect();
            let links = tds
                .iter()
                .map(|td| {
                    td.select(&a_sel)
                        .next()
                        .and_then(|a| a.value().attr("href"))
                        .map(str::to_string)
                })
                .collect();
            rows.push(RowCells { cells, links });
        }
    }
    rows
}

/// Text of an element as a reader sees it. Lines are not normalized.
pub fn rendered_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    push_text(el, &mut out);
    out.trim().to_string()
}

const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "dd", "div", "dl", "dt",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "tfoot", "thead",
    "tr", "ul",
];
const CELL_TAGS: &[&str] = &["td", "th"];

fn push_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                let name = e.name();
                if SKIP_TAGS.contains(&name) { continue; }
                if name == "br" { out.push('\n'); continue; }

                let block = BLOCK_TAGS.contains(&name);
                let cell = CELL_TAGS.contains(&name);
                if block { out.push('\n'); }
                if let Some(child_el) = ElementRef::wrap(child) {
                    push_text(child_el, out);
                }
                if block { out.push('\n'); }
                if cell { out.push(' '); }
            }
            _ => {}
        }
    }
}

fn push_fragment(out: &mut Vec<String>, frag: String) {
    let frag = frag.trim();
    if !frag.is_empty() {
        out.push(frag.to_string());
    }
}

fn push_lines(out: &mut Vec<String>, text: &str) {
    for line in text.lines() {
        let line = normalize_ws(line);
        if !line.is_empty() {
            out.push(line);
        }
    }
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            loge!("Bad selector {css:?}: {e}");
            None
        }
    }
}
