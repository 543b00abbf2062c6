// src/extract/mod.rs
//! Version record extraction.
//!
//! A pure transform: ordered text fragments in, ordered version-unique
//! records out. It never touches the network or the filesystem and never
//! fails; a fragment with no recognizable version is simply skipped, and an
//! empty result is for the caller to judge (see `scrape`'s fallback policy).
//!
//! ```text
//! fragment ─► token::find_match ─► record::build_record ─► ExtractionResult (dedup by version)
//!                                   ├─ sanitize::clean_text   (name)
//!                                   └─ date::extract_date_token (optional)
//! ```
mod date;
mod record;
mod token;

pub use date::{extract_date_token, DATE_NOT_FOUND};
pub use record::{build_record, extract_all, ExtractionResult, Profile, VersionRecord};
pub use token::{extract_version_token, find_match, Charset, Match, Rule, Scan};
pub use crate::core::sanitize::clean_text;
