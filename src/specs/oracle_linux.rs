// src/specs/oracle_linux.rs
//! Oracle Linux article on Wikipedia.
//!
//! Releases show up as "OL8", "8.6" or "Release 9.2" in tables, lists and
//! under release headings. The single-letter keywords (`r`, `u` as in "R7 U9")
//! match inside ordinary words too; those false positives are tolerated.

use super::{Extraction, FallbackEntry, Threshold, VendorSpec};
use crate::core::html::Source;
use crate::csv::Layout;
use crate::extract::{Profile, Rule, Scan};

const RULES: &[Rule] = &[
    Rule::requiring(&["oracle linux", "ol"], Scan::DottedWord { prefix: Some("ol") }),
    Rule::new(Scan::WordsAfterKeyword {
        keywords: &["release ", "version ", "v ", "r", "u"],
        prefix: Some("ol"),
    }),
];

const SOURCES: &[Source] = &[
    Source::TableRows { min_cells: 2, skip_first_row: false, first_cell_only: false, max_tables: None },
    Source::Elements("ul li"),
    Source::Elements("ol li"),
    Source::Headings {
        selector: "h2, h3, h4",
        gate: &["release", "version", "ol", "oracle linux", "r", "u"],
        follow: &["p", "div", "ul"],
    },
];

const FALLBACK: &[FallbackEntry] = &[
    ("Oracle Linux 9", "9", None),
    ("Oracle Linux 8", "8", None),
    ("Oracle Linux 7", "7", None),
    ("Oracle Linux 6", "6", None),
    ("Oracle Linux 5", "5", None),
    ("Oracle Linux 9.2", "9.2", None),
    ("Oracle Linux 8.8", "8.8", None),
    ("Oracle Linux 7.9", "7.9", None),
];

pub const SPEC: VendorSpec = VendorSpec {
    id: "oracle-linux",
    title: "Oracle Linux (Wikipedia)",
    url: "https://en.wikipedia.org/wiki/Oracle_Linux",
    extraction: Extraction::Fragments { sources: SOURCES, profile: Profile::new(RULES) },
    layout: Layout::FourColumn,
    file_stem: "oracle_linux_versions",
    fallback: FALLBACK,
    threshold: Threshold::Empty,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_version_token;

    #[test]
    fn dotted_and_prefixed_words() {
        assert_eq!(extract_version_token("Oracle Linux 8.6 2022-05-18", RULES).as_deref(), Some("8.6"));
        assert_eq!(extract_version_token("OL9 UEK R7", RULES).as_deref(), Some("9"));
    }

    #[test]
    fn release_keyword_scans_the_remainder() {
        assert_eq!(extract_version_token("Release 9.2 GA", RULES).as_deref(), Some("9.2"));
        assert_eq!(extract_version_token("Unbreakable kernel", RULES), None);
    }
}
