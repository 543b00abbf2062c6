// src/specs/java.rs
//! Java SE release table on Wikipedia.
//!
//! Rows of the version tables have the release name in the first cell
//! ("JDK 1.0", "Java SE 8"); only that cell is read. No fallback: an empty
//! page yields an empty export.

use super::{Extraction, Threshold, VendorSpec};
use crate::core::html::Source;
use crate::csv::Layout;
use crate::extract::{Profile, Rule, Scan};

const RULES: &[Rule] = &[
    Rule::keywords(&["jdk", "java se", "java ", "j2se", "j2ee"]),
    Rule::new(Scan::FirstRun),
];

const SOURCES: &[Source] = &[Source::TableRows {
    min_cells: 3,
    skip_first_row: true,
    first_cell_only: true,
    max_tables: None,
}];

pub const SPEC: VendorSpec = VendorSpec {
    id: "java",
    title: "Java version history (Wikipedia)",
    url: "https://en.wikipedia.org/wiki/Java_version_history",
    extraction: Extraction::Fragments { sources: SOURCES, profile: Profile::new(RULES) },
    layout: Layout::FourColumn,
    file_stem: "java_versions",
    fallback: &[],
    threshold: Threshold::Never,
};
