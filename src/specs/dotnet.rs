// src/specs/dotnet.rs
//! .NET 8.0 download page.
//!
//! The page is mostly cards and link lists, so every line of the body is a
//! candidate, followed by the rows of the first few tables.

use super::{Extraction, FallbackEntry, Threshold, VendorSpec};
use crate::core::html::Source;
use crate::csv::Layout;
use crate::extract::{Profile, Rule, Scan};

const RULES: &[Rule] = &[
    Rule::keywords(&[".net", "dotnet", "net "]),
    Rule::new(Scan::DottedWord { prefix: None }),
];

const SOURCES: &[Source] = &[
    Source::BodyLines,
    Source::TableRows { min_cells: 1, skip_first_row: false, first_cell_only: false, max_tables: Some(3) },
];

const FALLBACK: &[FallbackEntry] = &[
    (".NET 8.0 Runtime", "8.0", None),
    (".NET 8.0 SDK", "8.0", None),
    ("ASP.NET Core Runtime 8.0", "8.0", None),
    (".NET 8.0 Windows Desktop Runtime", "8.0", None),
    (".NET 8.0.1 Runtime", "8.0.1", None),
    (".NET 8.0.1 SDK", "8.0.1", None),
];

pub const SPEC: VendorSpec = VendorSpec {
    id: "dotnet",
    title: ".NET 8.0 downloads (Microsoft)",
    url: "https://dotnet.microsoft.com/en-us/download/dotnet/8.0",
    extraction: Extraction::Fragments { sources: SOURCES, profile: Profile::new(RULES) },
    layout: Layout::FourColumn,
    file_stem: "dotnet_versions",
    fallback: FALLBACK,
    threshold: Threshold::Empty,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_version_token;
    use chrono::NaiveDate;

    #[test]
    fn keyword_then_dotted_word() {
        assert_eq!(extract_version_token(".NET 8.0.11 Runtime", RULES).as_deref(), Some("8.0.11"));
        assert_eq!(extract_version_token("Download dotnet 8", RULES).as_deref(), Some("8"));
        assert_eq!(extract_version_token("SDK 8.0.404 (x64)", RULES).as_deref(), Some("8.0.404"));
        assert_eq!(extract_version_token("ASP.NET Core Runtime", RULES), None);
    }

    #[test]
    fn fallback_collapses_to_unique_versions() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let res = SPEC.fallback_records(ts);
        let got: Vec<(&str, &str)> = res.iter().map(|r| (r.name(), r.version())).collect();
        assert_eq!(got, vec![(".NET 8.0 Runtime", "8.0"), (".NET 8.0.1 Runtime", "8.0.1")]);
    }
}
