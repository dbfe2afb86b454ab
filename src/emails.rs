use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Container for raw discovered email candidates with an occurrence counter
/// (larger value means the address was seen more often during the crawl).
///
/// This module encapsulates validation, generic-inbox filtering and
/// deduplication so the crawl loop stays readable.
#[derive(Default, Debug, Clone)]
pub struct EmailSet {
    map: HashMap<String, u32>,
}

impl EmailSet {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Record one observation of a candidate (creates the entry if absent).
    /// Candidates keep their case: deduplication is case-sensitive by
    /// contract, only surrounding whitespace is trimmed.
    pub fn record<S: AsRef<str>>(&mut self, email: S) {
        let e = email.as_ref().trim();
        if e.is_empty() {
            return;
        }
        *self.map.entry(e.to_string()).or_insert(0) += 1;
    }

    /// Number of distinct raw candidates collected so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Validate, filter and deduplicate the accumulated candidates into the
    /// final result set, sorted lexicographically by address.
    pub fn finalize(self, options: FinalizeOptions) -> Vec<ValidatedEmail> {
        let mut results: Vec<ValidatedEmail> = self
            .map
            .into_iter()
            .filter(|(email, _)| is_valid_email(email))
            .filter(|(email, _)| {
                options.allow_generic || !is_generic_inbox(email, &options.generic_prefixes)
            })
            .filter_map(|(email, occurrences)| {
                let domain = domain_of(&email)?.to_string();
                Some(ValidatedEmail {
                    email,
                    domain,
                    occurrences,
                })
            })
            .collect();
        results.sort_by(|a, b| a.email.cmp(&b.email));
        results
    }
}

/// A candidate that survived validation and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEmail {
    pub email: String,
    /// Substring after the first '@'.
    pub domain: String,
    /// How many times the exact address was observed.
    pub occurrences: u32,
}

/// Configuration controlling finalize() filtering.
#[derive(Debug, Clone)]
pub struct FinalizeOptions {
    /// Keep generic role-based inboxes when set.
    pub allow_generic: bool,
    /// Local parts considered generic role-based inboxes.
    pub generic_prefixes: Vec<String>,
}

impl Default for FinalizeOptions {
    fn default() -> Self {
        Self {
            allow_generic: false,
            generic_prefixes: ["info", "contact", "support", "admin", "noreply", "no-reply"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Strict full-string format check: anchored to the whole candidate, unlike
/// the scanning pattern in `extract`.
pub fn is_valid_email(e: &str) -> bool {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());
    e.len() <= 254 && RE.is_match(e)
}

/// True when the local part equals one of the generic role prefixes,
/// case-insensitively.
pub fn is_generic_inbox(email: &str, prefixes: &[String]) -> bool {
    match email.split_once('@') {
        Some((local, _)) => prefixes.iter().any(|p| local.eq_ignore_ascii_case(p)),
        None => false,
    }
}

/// Domain component of an address (after the first '@').
pub fn domain_of(email: &str) -> Option<&str> {
    email.split_once('@').map(|(_, domain)| domain)
}
