// src/specs/windows_server.rs
//! Windows Server release information.
//!
//! Versions are years ("Windows Server 2019"), so the year word comes first.
//! Both scans are gated on the product name appearing in the fragment; the
//! known-year table catches rows that only say "2012 R2" and the like.

use super::{Extraction, FallbackEntry, Threshold, VendorSpec};
use crate::core::html::Source;
use crate::csv::Layout;
use crate::extract::{Charset, Profile, Rule, Scan};

const GATE: &[&str] = &["windows server"];

const RULES: &[Rule] = &[
    Rule::requiring(GATE, Scan::YearWord { min: 2000, max: 2030 }),
    Rule::requiring(
        GATE,
        Scan::AfterKeyword { keywords: &["version", "build", "v "], charset: Charset::Digits },
    ),
    Rule::new(Scan::KnownToken {
        tokens: &["2022", "2019", "2016", "2012", "2008", "2003"],
        label: "Windows Server",
    }),
];

const SOURCES: &[Source] = &[
    Source::TableRows { min_cells: 1, skip_first_row: false, first_cell_only: false, max_tables: None },
    Source::Elements("ul li"),
    Source::Elements("ol li"),
    Source::Lines("p, div, section, article"),
];

const FALLBACK: &[FallbackEntry] = &[
    ("Windows Server 2022", "2022", None),
    ("Windows Server 2019", "2019", None),
    ("Windows Server 2016", "2016", None),
    ("Windows Server 2012 R2", "2012", None),
    ("Windows Server 2012", "2012", None),
    ("Windows Server 2008 R2", "2008", None),
    ("Windows Server 2008", "2008", None),
    ("Windows Server 2003", "2003", None),
];

pub const SPEC: VendorSpec = VendorSpec {
    id: "windows-server",
    title: "Windows Server release information (Microsoft)",
    url: "https://learn.microsoft.com/en-us/windows-server/get-started/windows-server-release-info",
    extraction: Extraction::Fragments { sources: SOURCES, profile: Profile::new(RULES) },
    layout: Layout::FourColumn,
    file_stem: "windows_server_versions",
    fallback: FALLBACK,
    threshold: Threshold::Empty,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{build_record, find_match};
    use chrono::NaiveDate;

    #[test]
    fn year_wins_when_product_named() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let rec = build_record("Windows Server 2022 supported", SPEC.url, ts, &Profile::new(RULES)).unwrap();
        assert_eq!(rec.version(), "2022");
        assert!(rec.name().contains("Windows Server 2022"));
    }

    #[test]
    fn build_number_after_year_miss() {
        let m = find_match("Windows Server, version 23H2", RULES).unwrap();
        assert_eq!(m.token, "23");
        assert_eq!(m.label, None);
    }

    #[test]
    fn known_year_without_product_name() {
        let m = find_match("Datacenter edition 2019 LTSC", RULES).unwrap();
        assert_eq!(m.token, "2019");
        assert_eq!(m.label.as_deref(), Some("Windows Server 2019"));
        assert!(find_match("Released in 1999", RULES).is_none());
    }

    #[test]
    fn fallback_dedups_r2_rows() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let res = SPEC.fallback_records(ts);
        let versions: Vec<&str> = res.iter().map(|r| r.version()).collect();
        assert_eq!(versions, ["2022", "2019", "2016", "2012", "2008", "2003"]);
        assert_eq!(res.records()[3].name(), "Windows Server 2012 R2");
    }
}
