// src/extract/token.rs
//! Version token heuristics.
//!
//! Lexical and permissive on purpose: vendor pages are prose and loosely
//! marked-up tables, so a rule accepts anything that looks like a version
//! after a trigger word and lives with the false positives.
//!
//! A vendor lists its [`Rule`]s in priority order; the first rule that
//! produces a token wins.

use crate::core::sanitize::to_lower;

/// Characters a keyword-anchored run may consist of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Charset {
    DigitsDots,
    Digits,
}

impl Charset {
    fn accepts(self, c: char) -> bool {
        match self {
            Charset::DigitsDots => c.is_ascii_digit() || c == '.',
            Charset::Digits => c.is_ascii_digit(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Scan {
    /// Run of `charset` right after the first keyword (priority order) that
    /// occurs; leading whitespace is skipped.
    AfterKeyword { keywords: &'static [&'static str], charset: Charset },
    /// Word scan (see `DottedWord`) over the text following a keyword.
    WordsAfterKeyword { keywords: &'static [&'static str], prefix: Option<&'static str> },
    /// First digit/dot run anywhere in the text.
    FirstRun,
    /// First whitespace-separated word holding both a digit and a `.`; with a
    /// `prefix`, words like `OL8` count too.
    DottedWord { prefix: Option<&'static str> },
    /// A word that is exactly a 4-digit year within `[min, max]`.
    YearWord { min: u32, max: u32 },
    /// First listed token found verbatim in the text, named `"<label> <token>"`.
    KnownToken { tokens: &'static [&'static str], label: &'static str },
}

#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// Rule only applies when one of these occurs (case-insensitive).
    /// Empty means always.
    pub requires: &'static [&'static str],
    pub scan: Scan,
}

impl Rule {
    pub const fn keywords(keywords: &'static [&'static str]) -> Self {
        Self { requires: &[], scan: Scan::AfterKeyword { keywords, charset: Charset::DigitsDots } }
    }

    pub const fn new(scan: Scan) -> Self {
        Self { requires: &[], scan }
    }

    pub const fn requiring(requires: &'static [&'static str], scan: Scan) -> Self {
        Self { requires, scan }
    }
}

/// A token plus, for table-driven rules, the canonical name to use instead of
/// the fragment text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub token: String,
    pub label: Option<String>,
}

impl Match {
    fn token(token: String) -> Self { Self { token, label: None } }
}

/// First rule match in `text`, or `None` (the usual outcome).
pub fn find_match(text: &str, rules: &[Rule]) -> Option<Match> {
    if text.trim().is_empty() { return None; }
    let lc = to_lower(text);

    rules.iter().find_map(|rule| {
        if !rule.requires.is_empty() && !rule.requires.iter().any(|r| lc.contains(r)) {
            return None;
        }
        apply(&rule.scan, text, &lc)
    })
}

pub fn extract_version_token(text: &str, rules: &[Rule]) -> Option<String> {
    find_match(text, rules).map(|m| m.token)
}

fn apply(scan: &Scan, text: &str, lc: &str) -> Option<Match> {
    match *scan {
        Scan::AfterKeyword { keywords, charset } => keywords.iter().find_map(|kw| {
            let pos = lc.find(kw)?;
            run_after(&text[pos + kw.len()..], charset).map(Match::token)
        }),
        Scan::WordsAfterKeyword { keywords, prefix } => keywords.iter().find_map(|kw| {
            let pos = lc.find(kw)?;
            dotted_word(&text[pos + kw.len()..], prefix).map(Match::token)
        }),
        Scan::FirstRun => first_run(text).map(Match::token),
        Scan::DottedWord { prefix } => dotted_word(text, prefix).map(Match::token),
        Scan::YearWord { min, max } => year_word(text, min, max).map(Match::token),
        Scan::KnownToken { tokens, label } => tokens
            .iter()
            .find(|t| text.contains(*t))
            .map(|t| Match { token: t.to_string(), label: Some(format!("{label} {t}")) }),
    }
}

/// Skip leading whitespace, then take the run of accepted chars.
/// Whitespace or any other char ends a started run; any other char before
/// the run starts means there is none.
fn run_after(rest: &str, charset: Charset) -> Option<String> {
    let mut tok = String::new();
    for c in rest.chars() {
        if charset.accepts(c) {
            tok.push(c);
        } else if !tok.is_empty() || !c.is_whitespace() {
            break;
        }
    }
    finish(&tok)
}

/// Skips everything up to the first digit or dot, then takes the run.
fn first_run(text: &str) -> Option<String> {
    let mut tok = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() || c == '.' {
            tok.push(c);
        } else if !tok.is_empty() {
            break;
        }
    }
    finish(&tok)
}

fn dotted_word(text: &str, prefix: Option<&str>) -> Option<String> {
    for word in text.split_whitespace() {
        if word.contains('.') && word.chars().any(|c| c.is_ascii_digit()) {
            if let Some(tok) = first_run(word) {
                return Some(tok);
            }
        }
        if let Some(p) = prefix {
            let wl = to_lower(word);
            if wl.len() > p.len() && wl.starts_with(p) {
                let rest = &word[p.len()..];
                if rest.starts_with(|c: char| c.is_ascii_digit()) {
                    if let Some(tok) = first_run(rest) {
                        return Some(tok);
                    }
                }
            }
        }
    }
    None
}

fn year_word(text: &str, min: u32, max: u32) -> Option<String> {
    text.split_whitespace()
        .filter(|w| w.len() == 4 && w.chars().all(|c| c.is_ascii_digit()))
        .find(|w| w.parse::<u32>().is_ok_and(|y| (min..=max).contains(&y)))
        .map(str::to_string)
}

/// Trim dots from both ends; a token must hold a digit.
fn finish(raw: &str) -> Option<String> {
    let tok = raw.trim_matches('.');
    if tok.chars().any(|c| c.is_ascii_digit()) { Some(tok.to_string()) } else { None }
}
