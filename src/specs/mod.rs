// src/specs/mod.rs
//! # Vendor specs
//!
//! One module per vendor page. A spec is plain data: *where* on the page the
//! version information lives (harvest [`Source`]s), *how* to read it
//! ([`Profile`] rules), what to write ([`Layout`]), and the hand-authored
//! fallback table used when live extraction comes up short.
//!
//! ## What lives here
//! - Trigger keywords and secondary heuristics per vendor, in priority order.
//! - Which document nodes to harvest (rows, list items, paragraphs, headings).
//! - Static fallback tables and the threshold that activates them.
//!
//! ## What does **not** live here
//! - Networking, harvesting and the extraction loop (`core`, `extract`).
//! - When to fall back, logging and export (`scrape`, `file`).
//!
//! Adding a vendor is a new module with one `pub const SPEC: VendorSpec`
//! plus an entry in [`ALL`].
use chrono::NaiveDateTime;

use crate::core::html::Source;
use crate::csv::Layout;
use crate::error::{Result, ScrapeError};
use crate::extract::{ExtractionResult, Profile, VersionRecord};

pub mod dbf2002;
pub mod dotnet;
pub mod java;
pub mod oracle_linux;
pub mod windows11;
pub mod windows_server;

/// How records come out of the page.
#[derive(Clone, Copy, Debug)]
pub enum Extraction {
    /// Harvest text fragments and run the extractor over them.
    Fragments { sources: &'static [Source], profile: Profile },
    /// Read fixed table columns; no heuristics.
    Columns { min_cells: usize, name: usize, version: usize, link: usize },
}

/// When live results are replaced by the fallback table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Threshold {
    Never,
    Empty,
    Below(usize),
}

impl Threshold {
    pub fn triggers(self, live: usize) -> bool {
        match self {
            Threshold::Never => false,
            Threshold::Empty => live == 0,
            Threshold::Below(n) => live < n,
        }
    }
}

/// `(name, version, date)` of one hand-authored record.
pub type FallbackEntry = (&'static str, &'static str, Option<&'static str>);

#[derive(Debug)]
pub struct VendorSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    pub extraction: Extraction,
    pub layout: Layout,
    /// Output file name without extension.
    pub file_stem: &'static str,
    pub fallback: &'static [FallbackEntry],
    pub threshold: Threshold,
}

impl VendorSpec {
    pub fn has_fallback(&self) -> bool {
        !self.fallback.is_empty()
    }

    /// Fallback table as records, deduplicated like live results.
    pub fn fallback_records(&self, scraped_at: NaiveDateTime) -> ExtractionResult {
        self.fallback
            .iter()
            .map(|(name, version, date)| {
                VersionRecord::new(*name, *version, self.url, scraped_at, date.map(str::to_string))
            })
            .collect()
    }
}

pub const ALL: &[&VendorSpec] = &[
    &java::SPEC,
    &dotnet::SPEC,
    &windows_server::SPEC,
    &oracle_linux::SPEC,
    &dbf2002::SPEC,
    &windows11::SPEC,
];

pub fn find(id: &str) -> Result<&'static VendorSpec> {
    let id = id.trim().to_ascii_lowercase();
    ALL.iter()
        .copied()
        .find(|s| s.id == id)
        .ok_or(ScrapeError::UnknownVendor(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_findable() {
        let ids: HashSet<&str> = ALL.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), ALL.len());
        for spec in ALL {
            assert_eq!(find(&spec.id.to_uppercase()).unwrap().id, spec.id);
        }
        assert!(matches!(find("nope"), Err(ScrapeError::UnknownVendor(_))));
    }

    #[test]
    fn threshold_rules() {
        assert!(!Threshold::Never.triggers(0));
        assert!(Threshold::Empty.triggers(0));
        assert!(!Threshold::Empty.triggers(1));
        assert!(Threshold::Below(20).triggers(19));
        assert!(!Threshold::Below(20).triggers(20));
    }

    #[test]
    fn only_dbf2002_uses_three_columns() {
        for spec in ALL {
            let want = if spec.id == "dbf2002" { Layout::ThreeColumn } else { Layout::FourColumn };
            assert_eq!(spec.layout, want, "{}", spec.id);
        }
    }
}
