// src/csv.rs
use std::io::{self, Write};

use rust_xlsxwriter::{Workbook, XlsxError};
use serde_json::{Map, Value};

use crate::extract::VersionRecord;

pub const SCRAPED_AT_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Column layout of an export. Names and order are what downstream
/// consumers read; do not change them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `version_name, version, url, scraped_date`
    FourColumn,
    /// `Version, Date, URL`
    ThreeColumn,
}

impl Layout {
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Layout::FourColumn => &["version_name", "version", "url", "scraped_date"],
            Layout::ThreeColumn => &["Version", "Date", "URL"],
        }
    }

    pub fn row(self, rec: &VersionRecord) -> Vec<String> {
        match self {
            Layout::FourColumn => vec![
                s!(rec.name()),
                s!(rec.version()),
                s!(rec.source_url()),
                rec.scraped_at().format(SCRAPED_AT_FMT).to_string(),
            ],
            Layout::ThreeColumn => vec![
                s!(rec.version()),
                s!(rec.date().unwrap_or_default()),
                s!(rec.source_url()),
            ],
        }
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line plus one line per record.
pub fn to_export_string(layout: Layout, records: &[VersionRecord], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, layout.headers(), sep);
    for rec in records {
        let _ = write_row(&mut buf, &layout.row(rec), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Single-sheet workbook: header row, then one row per record, all cells text.
pub fn to_xlsx(layout: Layout, records: &[VersionRecord]) -> Result<Workbook, XlsxError> {
    let mut book = Workbook::new();
    let sheet = book.add_worksheet();
    for (col, h) in (0u16..).zip(layout.headers()) {
        sheet.write_string(0, col, *h)?;
    }
    for (row, rec) in (1u32..).zip(records) {
        for (col, cell) in (0u16..).zip(layout.row(rec)) {
            sheet.write_string(row, col, cell)?;
        }
    }
    Ok(book)
}

/// Pretty JSON array of objects keyed by the layout's column names.
pub fn to_json(layout: Layout, records: &[VersionRecord]) -> serde_json::Result<String> {
    let headers = layout.headers();
    let rows: Vec<Value> = records
        .iter()
        .map(|rec| {
            let obj: Map<String, Value> = headers
                .iter()
                .zip(layout.row(rec))
                .map(|(h, cell)| (s!(*h), Value::String(cell)))
                .collect();
            Value::Object(obj)
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(name: &str, version: &str, date: Option<&str>) -> VersionRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap().and_hms_opt(23, 59, 1).unwrap();
        VersionRecord::new(name, version, "https://x.test/a", ts, date.map(str::to_string))
    }

    #[test]
    fn four_column_export() {
        let out = to_export_string(Layout::FourColumn, &[rec("Java SE 8", "8", None)], ',');
        assert_eq!(
            out,
            "version_name,version,url,scraped_date\nJava SE 8,8,https://x.test/a,2024-06-30 23:59:01\n"
        );
    }

    #[test]
    fn three_column_quotes_commas() {
        let out = to_export_string(
            Layout::ThreeColumn,
            &[rec("ignored", "v5.1", Some("August 26, 2013"))],
            ',',
        );
        assert_eq!(out, "Version,Date,URL\nv5.1,\"August 26, 2013\",https://x.test/a\n");
    }

    #[test]
    fn tsv_does_not_quote_commas_but_quotes_quotes() {
        let out = to_export_string(Layout::FourColumn, &[rec("say \"hi\", ok", "1", None)], '\t');
        let line = out.lines().nth(1).unwrap();
        assert!(line.starts_with("\"say \"\"hi\"\", ok\"\t1\t"));
    }

    #[test]
    fn empty_records_still_have_header() {
        assert_eq!(to_export_string(Layout::ThreeColumn, &[], ','), "Version,Date,URL\n");
    }

    #[test]
    fn json_uses_column_names() {
        let json = to_json(Layout::ThreeColumn, &[rec("n", "v4.1", Some("August 11, 2011"))]).unwrap();
        let v: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v[0]["Version"], "v4.1");
        assert_eq!(v[0]["Date"], "August 11, 2011");
        assert_eq!(v[0]["URL"], "https://x.test/a");
    }
}
