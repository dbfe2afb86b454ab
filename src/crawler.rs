//! Bounded breadth-first crawl over a single website.
//!
//! The crawl walks same-host pages reachable from a seed URL, feeding every
//! HTML response to the extraction pipeline and queueing links whose href
//! suggests a people or contact page. Traversal is bounded three ways: a page
//! budget, a frontier capacity, and an optional wall-clock deadline. A
//! randomized politeness delay separates consecutive fetches.
//!
//! Individual page failures never abort a crawl; they become per-page
//! outcomes in the crawl log and the loop moves on to the next queued URL.

use std::time::Instant;

use crate::cli::Cli;
use crate::config::Config;
use crate::emails::EmailSet;
use crate::extract::{extract_from_variants, normalize_obfuscations};
use crate::fetch::PageFetcher;
use crate::frontier::{Enqueue, Frontier};
use crate::page::parse_page;
use crate::urlutil::{self, CrawlTarget};

/// Abstraction over environment / verbosity for the crawl loop. This removes
/// the direct dependency of the crawler on the concrete CLI type and enables
/// reuse inside the facade.
pub trait CrawlEnv {
    fn show_commands(&self) -> bool;
    fn is_trace(&self) -> bool;
    fn warn_enabled(&self) -> bool;
}

impl CrawlEnv for Cli {
    fn show_commands(&self) -> bool {
        self.show_commands
    }
    fn is_trace(&self) -> bool {
        self.is_trace()
    }
    fn warn_enabled(&self) -> bool {
        self.warn_enabled()
    }
}

/// Environment that narrates nothing. Used by the library facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentEnv;

impl CrawlEnv for SilentEnv {
    fn show_commands(&self) -> bool {
        false
    }
    fn is_trace(&self) -> bool {
        false
    }
    fn warn_enabled(&self) -> bool {
        false
    }
}

/// Outcome of visiting one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    /// Fetched, parsed, and scanned for addresses.
    Scraped {
        /// Raw candidate strings recorded from this page (mailto + text).
        candidates: usize,
        /// In-scope relevant links this page added to the frontier.
        enqueued: usize,
    },
    /// The fetch failed; `reason` carries the error message.
    Failed { reason: String },
    /// Fetched but not scanned because the response was not HTML.
    Skipped { content_type: String },
}

/// One entry in the crawl's page log, in visit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageVisit {
    pub url: String,
    pub status: PageStatus,
}

/// Aggregate statistics for one crawl.
#[derive(Debug, Clone, Default)]
pub struct CrawlStats {
    /// Pages fetched and scanned for addresses.
    pub pages_fetched: usize,
    /// Pages whose fetch failed (connection error, timeout, HTTP >= 400).
    pub pages_failed: usize,
    /// Pages fetched but skipped because the response was not HTML.
    pub pages_skipped: usize,
    /// Links accepted into the frontier across all pages.
    pub links_enqueued: usize,
    /// Per-page outcome log.
    pub visits: Vec<PageVisit>,
    /// Human-readable warnings accumulated along the way.
    pub warnings: Vec<String>,
}

impl CrawlStats {
    fn record(&mut self, visit: PageVisit) {
        match visit.status {
            PageStatus::Scraped { .. } => self.pages_fetched += 1,
            PageStatus::Failed { .. } => self.pages_failed += 1,
            PageStatus::Skipped { .. } => self.pages_skipped += 1,
        }
        self.visits.push(visit);
    }
}

/// Crawl the website at `target`, recording every address candidate into
/// `emails`.
///
/// Traversal is FIFO breadth-first over same-host links whose raw href
/// matches one of the configured keywords. The loop never returns an error:
/// failures before the crawl starts are the caller's problem, and per-page
/// failures are absorbed into [`CrawlStats`]. The crawl ends when the page
/// budget is spent, the frontier drains, or the optional deadline passes.
pub async fn crawl_site<F, E>(
    fetcher: &F,
    target: &CrawlTarget,
    config: &Config,
    emails: &mut EmailSet,
    env: &E,
) -> CrawlStats
where
    F: PageFetcher + ?Sized,
    E: CrawlEnv + ?Sized,
{
    let mut stats = CrawlStats::default();
    let mut frontier = Frontier::new(config.crawl.frontier_capacity);
    frontier.offer(target.url().clone());

    let started = Instant::now();
    let mut remaining = config.crawl.page_budget;
    let mut first_fetch = true;

    loop {
        if remaining == 0 {
            if env.is_trace() && frontier.pending() > 0 {
                eprintln!(
                    "Page budget exhausted with {} URLs still queued",
                    frontier.pending()
                );
            }
            break;
        }
        if let Some(limit) = config.network.max_crawl_duration
            && started.elapsed() >= limit
        {
            stats.warnings.push(format!(
                "Crawl deadline of {}s reached; {} queued URLs were not visited",
                limit.as_secs(),
                frontier.pending()
            ));
            break;
        }
        let Some(url) = frontier.pop() else {
            break;
        };
        if frontier.is_visited(&url) {
            continue;
        }
        frontier.mark_visited(&url);
        remaining -= 1;

        // Politeness delay before every fetch except the very first,
        // failures included.
        if first_fetch {
            first_fetch = false;
        } else {
            tokio::time::sleep(config.random_fetch_delay()).await;
        }

        if env.show_commands() {
            eprintln!(
                "(cmd) curl -sL --max-time {} -A '{}' '{}'",
                config.network.fetch_timeout.as_secs(),
                config.network.user_agent,
                url
            );
        }
        if env.is_trace() {
            eprintln!(
                "Fetching {url} (pages left: {remaining}, queued: {})",
                frontier.pending()
            );
        }

        let fetched = match fetcher.fetch(&url).await {
            Ok(page) => page,
            Err(e) => {
                let reason = e.to_string();
                if env.warn_enabled() {
                    eprintln!("Fetch warning: {reason}");
                }
                stats.warnings.push(reason.clone());
                stats.record(PageVisit {
                    url: url.to_string(),
                    status: PageStatus::Failed { reason },
                });
                continue;
            }
        };

        if !fetched.is_html() {
            let content_type = fetched.content_type.clone().unwrap_or_default();
            if env.is_trace() {
                eprintln!("Skipping {url}: content type '{content_type}' is not HTML");
            }
            stats.record(PageVisit {
                url: url.to_string(),
                status: PageStatus::Skipped { content_type },
            });
            continue;
        }

        let content = parse_page(&fetched.body);

        let mut candidates = 0;
        for address in &content.mailto_hints {
            if env.is_trace() {
                eprintln!("  mailto => {address}");
            }
            emails.record(address);
            candidates += 1;
        }
        let normalized = normalize_obfuscations(&content.text);
        for address in extract_from_variants([content.text.as_str(), normalized.as_str()]) {
            if env.is_trace() {
                eprintln!("  text => {address}");
            }
            emails.record(&address);
            candidates += 1;
        }

        // Links resolve against the URL the response actually came from, so
        // relative hrefs keep working after redirects. Relevance looks at the
        // raw href, the way authors wrote it.
        let mut enqueued = 0;
        for href in &content.links {
            let Some(resolved) = urlutil::resolve_link(&fetched.final_url, href) else {
                continue;
            };
            if !urlutil::in_scope(target, &resolved)
                || !urlutil::is_relevant_link(href, &config.crawl.relevant_keywords)
            {
                continue;
            }
            match frontier.offer(resolved) {
                Enqueue::Added => {
                    if env.is_trace() {
                        eprintln!("  link => {href}");
                    }
                    enqueued += 1;
                }
                Enqueue::Duplicate => {}
                Enqueue::Full => {
                    if env.is_trace() {
                        eprintln!("  frontier full, dropped '{href}'");
                    }
                }
            }
        }
        stats.links_enqueued += enqueued;
        if env.is_trace() {
            eprintln!("Scraped {url}: {candidates} candidates, {enqueued} links queued");
        }
        stats.record(PageVisit {
            url: url.to_string(),
            status: PageStatus::Scraped {
                candidates,
                enqueued,
            },
        });
    }

    stats
}
