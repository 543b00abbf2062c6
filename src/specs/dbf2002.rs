// src/specs/dbf2002.rs
//! DBF Viewer 2002 news page.
//!
//! Each news item reads like "Version 4.97 (March 13, 2013) ...". Versions are
//! written `v4.97` and exported with their release date in the three-column
//! layout. The page is sparse enough that the fallback kicks in below twenty
//! live records.

use super::{Extraction, FallbackEntry, Threshold, VendorSpec};
use crate::core::html::Source;
use crate::csv::Layout;
use crate::extract::{Profile, Rule};

const RULES: &[Rule] = &[Rule::keywords(&["version", "v "])];

const PROFILE: Profile = Profile { rules: RULES, dates: true, token_prefix: "v" };

const SOURCES: &[Source] = &[Source::Elements("li"), Source::Elements("p"), Source::Elements("div")];

pub const MIN_LIVE_RECORDS: usize = 20;

const FALLBACK: &[FallbackEntry] = &[
    ("DBF Viewer 2002 v5.1", "v5.1", Some("August 26, 2013")),
    ("DBF Viewer 2002 v4.97", "v4.97", Some("March 13, 2013")),
    ("DBF Viewer 2002 v4.95", "v4.95", Some("February 05, 2013")),
    ("DBF Viewer 2002 v4.85", "v4.85", Some("November 28, 2012")),
    ("DBF Viewer 2002 v4.75", "v4.75", Some("August 07, 2012")),
    ("DBF Viewer 2002 v4.65", "v4.65", Some("June 14, 2012")),
    ("DBF Viewer 2002 v4.55", "v4.55", Some("April 11, 2012")),
    ("DBF Viewer 2002 v4.45", "v4.45", Some("February 13, 2012")),
    ("DBF Viewer 2002 v4.35", "v4.35", Some("December 12, 2011")),
    ("DBF Viewer 2002 v4.25", "v4.25", Some("October 17, 2011")),
    ("DBF Viewer 2002 v4.1", "v4.1", Some("August 11, 2011")),
    ("DBF Viewer 2002 v3.95", "v3.95", Some("June 15, 2011")),
    ("DBF Viewer 2002 v3.85", "v3.85", Some("April 25, 2011")),
    ("DBF Viewer 2002 v3.75", "v3.75", Some("February 28, 2011")),
    ("DBF Viewer 2002 v3.55", "v3.55", Some("November 10, 2010")),
    ("DBF Viewer 2002 v3.45", "v3.45", Some("September 15, 2010")),
    ("DBF Viewer 2002 v3.25", "v3.25", Some("March 15, 2010")),
    ("DBF Viewer 2002 v3.15", "v3.15", Some("December 18, 2009")),
    ("DBF Viewer 2002 v3.1", "v3.1", Some("September 21, 2009")),
    ("DBF Viewer 2002 v2.95", "v2.95", Some("May 18, 2009")),
    ("DBF Viewer 2002 v2.85", "v2.85", Some("March 23, 2009")),
    ("DBF Viewer 2002 v2.75", "v2.75", Some("January 15, 2009")),
    ("DBF Viewer 2002 v2.65", "v2.65", Some("November 20, 2008")),
    ("DBF Viewer 2002 v2.55", "v2.55", Some("September 25, 2008")),
    ("DBF Viewer 2002 v2.45", "v2.45", Some("July 30, 2008")),
    ("DBF Viewer 2002 v2.35", "v2.35", Some("June 05, 2008")),
    ("DBF Viewer 2002 v2.25", "v2.25", Some("April 10, 2008")),
    ("DBF Viewer 2002 v2.15", "v2.15", Some("February 15, 2008")),
    ("DBF Viewer 2002 v2.05", "v2.05", Some("December 20, 2007")),
    ("DBF Viewer 2002 v1.95", "v1.95", Some("October 25, 2007")),
];

pub const SPEC: VendorSpec = VendorSpec {
    id: "dbf2002",
    title: "DBF Viewer 2002 news",
    url: "https://www.dbf2002.com/news.html",
    extraction: Extraction::Fragments { sources: SOURCES, profile: PROFILE },
    layout: Layout::ThreeColumn,
    file_stem: "dbf2002_versions",
    fallback: FALLBACK,
    threshold: Threshold::Below(MIN_LIVE_RECORDS),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{extract_all, DATE_NOT_FOUND};
    use chrono::NaiveDate;

    #[test]
    fn prefixed_versions_with_dates() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let frags = [
            "Version 5.1 (August 26, 2013) Unicode support",
            "New in v 4.97: faster filters (beta)",
            "Version 5.1 (mirror)",
            "Contact us",
        ];
        let res = extract_all(&frags, SPEC.url, ts, &PROFILE);
        let got: Vec<(&str, Option<&str>)> = res.iter().map(|r| (r.version(), r.date())).collect();
        assert_eq!(got, vec![("v5.1", Some("August 26, 2013")), ("v4.97", Some(DATE_NOT_FOUND))]);
    }

    #[test]
    fn fallback_is_thirty_distinct_releases() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let res = SPEC.fallback_records(ts);
        assert_eq!(res.len(), 30);
        assert!(res.len() >= MIN_LIVE_RECORDS);
        assert_eq!(res.records()[0].date(), Some("August 26, 2013"));
    }
}
