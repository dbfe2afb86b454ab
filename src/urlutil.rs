/*!
URL utilities for contactfinder.

This module centralizes:
- Target URL normalization (scheme defaulting, host requirement)
- The crawl origin boundary (`CrawlTarget`) and in-scope checks
- Link resolution against a page URL (fail-closed on resolution failure)
- Relevance keyword matching for people/contact pages
- mailto href parsing
*/

use url::Url;

use crate::errors::{CrawlerError, Result};

/// The crawl's seed URL and origin boundary. Immutable once the crawl starts.
#[derive(Debug, Clone)]
pub struct CrawlTarget {
    url: Url,
    host: String,
}

impl CrawlTarget {
    /// Wrap an already-parsed URL; fails when it carries no host.
    pub fn new(url: Url) -> Result<Self> {
        let host = url
            .host_str()
            .ok_or_else(|| CrawlerError::invalid_url(url.as_str(), "URL has no host"))?
            .to_ascii_lowercase();
        Ok(Self { url, host })
    }

    /// Parse a raw user-supplied target, defaulting to https:// when the
    /// scheme is omitted.
    pub fn from_input(raw: &str) -> Result<Self> {
        Self::new(normalize_target_url(raw)?)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Lowercased origin host that the scope check compares against.
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Normalize a raw target URL: trim surrounding whitespace and prepend
/// `https://` when no HTTP scheme is present.
pub fn normalize_target_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CrawlerError::invalid_url(raw, "empty URL"));
    }
    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    Url::parse(&candidate).map_err(|e| CrawlerError::invalid_url(trimmed, e.to_string()))
}

/// Resolve an href against the page it appeared on. Fragments are stripped so
/// anchor variants of the same page deduplicate in the frontier. Returns
/// `None` when the href does not resolve; unresolvable links are dropped,
/// never admitted past the origin boundary.
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let mut resolved = base.join(href).ok()?;
    resolved.set_fragment(None);
    Some(resolved)
}

/// True when the candidate's host matches the crawl origin's host,
/// ASCII case-insensitively. Links without a host (mailto:, javascript:,
/// tel:, data:) are never in scope.
pub fn in_scope(target: &CrawlTarget, candidate: &Url) -> bool {
    match candidate.host_str() {
        Some(host) => host.eq_ignore_ascii_case(target.host()),
        None => false,
    }
}

/// True when the lowercased href contains any of the people/contact
/// keywords. Matches the href text, not the anchor text; keywords are
/// expected lowercase.
pub fn is_relevant_link(href: &str, keywords: &[String]) -> bool {
    let lower = href.to_ascii_lowercase();
    keywords.iter().any(|k| lower.contains(k.as_str()))
}

/// Extract the address portion of a mailto href: strip the scheme
/// (case-insensitively), drop any `?subject=...` suffix, trim. Returns
/// `None` when nothing remains.
pub fn mailto_address(href: &str) -> Option<String> {
    let trimmed = href.trim();
    if !trimmed.to_ascii_lowercase().starts_with("mailto:") {
        return None;
    }
    let rest = &trimmed["mailto:".len()..];
    let addr = match rest.split_once('?') {
        Some((before, _)) => before,
        None => rest,
    }
    .trim();
    if addr.is_empty() {
        None
    } else {
        Some(addr.to_string())
    }
}
