// src/extract/record.rs

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::core::sanitize::clean_text;
use super::date::extract_date_token;
use super::token::{find_match, Rule};

/// How one vendor's fragments are read.
#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub rules: &'static [Rule],
    /// Attach `extract_date_token` output to each record.
    pub dates: bool,
    /// Prepended to every token, e.g. `"v"` → `v5.1`.
    pub token_prefix: &'static str,
}

impl Profile {
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules, dates: false, token_prefix: "" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionRecord {
    name: String,
    version: String,
    source_url: String,
    scraped_at: NaiveDateTime,
    date: Option<String>,
}

impl VersionRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        source_url: impl Into<String>,
        scraped_at: NaiveDateTime,
        date: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            source_url: source_url.into(),
            scraped_at,
            date,
        }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn version(&self) -> &str { &self.version }
    pub fn source_url(&self) -> &str { &self.source_url }
    pub fn scraped_at(&self) -> NaiveDateTime { self.scraped_at }
    pub fn date(&self) -> Option<&str> { self.date.as_deref() }
}

/// Records of one document, unique by version, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct ExtractionResult {
    records: Vec<VersionRecord>,
    seen: HashSet<String>,
}

impl ExtractionResult {
    pub fn new() -> Self { Self::default() }

    /// Keep `rec` unless its version is already present.
    /// Returns whether it was kept.
    pub fn push(&mut self, rec: VersionRecord) -> bool {
        if self.seen.contains(rec.version()) {
            return false;
        }
        self.seen.insert(rec.version.clone());
        self.records.push(rec);
        true
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn records(&self) -> &[VersionRecord] { &self.records }
    pub fn iter(&self) -> std::slice::Iter<'_, VersionRecord> { self.records.iter() }
    pub fn into_records(self) -> Vec<VersionRecord> { self.records }
}

impl FromIterator<VersionRecord> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = VersionRecord>>(iter: I) -> Self {
        let mut out = Self::new();
        for rec in iter {
            out.push(rec);
        }
        out
    }
}

impl<'a> IntoIterator for &'a ExtractionResult {
    type Item = &'a VersionRecord;
    type IntoIter = std::slice::Iter<'a, VersionRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

pub fn build_record(
    fragment: &str,
    source_url: &str,
    scraped_at: NaiveDateTime,
    profile: &Profile,
) -> Option<VersionRecord> {
    let m = find_match(fragment, profile.rules)?;
    let name = m.label.unwrap_or_else(|| clean_text(fragment));
    let version = join!(profile.token_prefix, &m.token);
    let date = profile.dates.then(|| extract_date_token(fragment));
    Some(VersionRecord::new(name, version, source_url, scraped_at, date))
}

pub fn extract_all<S: AsRef<str>>(
    fragments: &[S],
    source_url: &str,
    scraped_at: NaiveDateTime,
    profile: &Profile,
) -> ExtractionResult {
    fragments
        .iter()
        .filter_map(|f| build_record(f.as_ref(), source_url, scraped_at, profile))
        .collect()
}
