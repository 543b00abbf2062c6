// src/specs/windows11.rs
//! Windows 11 release information.
//!
//! A well-formed table: servicing option, version, link to the release
//! notes. Read by column instead of by heuristics.

use super::{Extraction, Threshold, VendorSpec};
use crate::csv::Layout;

pub const SPEC: VendorSpec = VendorSpec {
    id: "windows11",
    title: "Windows 11 release information (Microsoft)",
    url: "https://learn.microsoft.com/en-us/windows/release-health/windows11-release-information",
    extraction: Extraction::Columns { min_cells: 3, name: 0, version: 1, link: 2 },
    layout: Layout::FourColumn,
    file_stem: "windows11_releases",
    fallback: &[],
    threshold: Threshold::Never,
};
