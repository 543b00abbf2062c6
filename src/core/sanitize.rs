// src/core/sanitize.rs

/// ASCII-only lowercasing. Byte offsets in the result line up with the input,
/// so a position found in the lowered text can slice the original.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove `[ ... ]` citation markers (`[1]`, `[citation needed]`), left to right.
/// Only closed pairs are removed; a stray `[` or `]` stays.
/// Single pass: a `[` opens a marker only if some `]` follows it.
pub fn strip_citations(s: &str) -> String {
    let Some(last_close) = s.rfind(']') else { return s.to_string() };
    let mut out = String::with_capacity(s.len());
    let mut in_marker = false;
    for (i, c) in s.char_indices() {
        if in_marker {
            if c == ']' { in_marker = false; }
            continue;
        }
        if c == '[' && i < last_close {
            in_marker = true;
            continue;
        }
        out.push(c);
    }
    out
}

/// Fragment text as it goes into a record name: citations dropped,
/// whitespace collapsed. Idempotent.
pub fn clean_text(s: &str) -> String {
    normalize_ws(&strip_citations(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Java SE\n\t 8  "), "Java SE 8");
        assert_eq!(normalize_ws(""), "");
        assert_eq!(normalize_ws(" \n "), "");
    }

    #[test]
    fn strip_citations_removes_each_pair() {
        assert_eq!(strip_citations("Released in 2020[1][2]"), "Released in 2020");
        assert_eq!(strip_citations("a[1] b [note 3] c"), "a b  c");
        assert_eq!(strip_citations("open [ only"), "open [ only");
        assert_eq!(strip_citations("close ] first [x]"), "close ] first ");
        assert_eq!(strip_citations("[[nested]] text"), "] text");
        assert_eq!(strip_citations("] [ ] ["), "]  [");
        assert_eq!(strip_citations("a [b] c [d"), "a  c [d");
    }

    #[test]
    fn strip_citations_scales_linearly() {
        let n = 200_000;
        let input = "x[1]".repeat(n);
        let start = std::time::Instant::now();
        let out = clean_text(&input);
        let elapsed = start.elapsed();
        assert_eq!(out.len(), n);
        assert!(out.bytes().all(|b| b == b'x'));
        // Quadratic removal takes seconds here; one pass takes milliseconds.
        assert!(elapsed < std::time::Duration::from_millis(500), "took {elapsed:?}");
    }

    #[test]
    fn clean_text_matches_citation_example() {
        assert_eq!(clean_text("Released in 2020[1][2]"), "Released in 2020");
        assert_eq!(clean_text("  Oracle   Linux 9 [12]\n update "), "Oracle Linux 9 update");
    }

    #[test]
    fn clean_text_is_idempotent() {
        let samples = [
            "",
            "   ",
            "Version 5.1 (August 26, 2013)",
            "x [a] [b] y]z[",
            "[[nested]] text",
            "tab\tand\nnewline [1]",
            "] [ ] [",
            "Ünïcode  [ß] ok",
        ];
        for s in samples {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn to_lower_keeps_byte_offsets() {
        let s = "ÄVersion 5";
        let lc = to_lower(s);
        assert_eq!(lc.len(), s.len());
        let pos = lc.find("version").unwrap();
        assert_eq!(&s[pos..pos + 7], "Version");
    }
}
