//! Email extraction from page text: a lexical scanning pass plus an
//! obfuscation-normalizing rewrite that feeds a second pass.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Scanning pattern for substrings that look like email addresses. Purely
/// lexical; the anchored check in `emails::is_valid_email` decides later
/// whether a candidate survives.
static EMAIL_SCAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Ordered replacement table for spelled-out "at"/"dot" obfuscations.
/// Spaced multi-word forms must run before the bare bracketed tokens, and
/// bare " at " keeps its surrounding spaces so ordinary words are not
/// glued together.
const OBFUSCATION_REPLACEMENTS: [(&str, &str); 10] = [
    (" [at] ", "@"),
    (" (at) ", "@"),
    (" at ", " @ "),
    (" [dot] ", "."),
    (" (dot) ", "."),
    (" dot ", "."),
    ("[at]", "@"),
    ("(at)", "@"),
    ("[dot]", "."),
    ("(dot)", "."),
];

/// Every non-overlapping match in `text`, deduplicated, in match order.
pub fn extract_emails(text: &str) -> Vec<String> {
    extract_from_variants([text])
}

/// One extraction pass over a list of text variants (typically the raw page
/// text and its normalized form), merged into a single deduplicated set.
pub fn extract_from_variants<'a, I>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut found = Vec::new();
    for text in texts {
        for m in EMAIL_SCAN_RE.find_iter(text) {
            let candidate = m.as_str();
            if seen.insert(candidate.to_string()) {
                found.push(candidate.to_string());
            }
        }
    }
    found
}

/// Rewrite common human-readable obfuscations of "@" and "." into their
/// canonical characters. Pure and total: text without obfuscations passes
/// through unchanged. The output is meant for a second extraction pass, not
/// for display.
pub fn normalize_obfuscations(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in OBFUSCATION_REPLACEMENTS {
        if out.contains(pattern) {
            out = out.replace(pattern, replacement);
        }
    }
    out
}
