use std::time::Instant;

use crate::config::Config;
use crate::crawler::{self, SilentEnv};
use crate::emails::EmailSet;
use crate::errors::Result;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::output::{ContactOrigin, DiscoveredContact, ScanMetadata, ScanResults};
use crate::urlutil::CrawlTarget;

/// High-level façade providing library-consumable entry points.
///
/// This abstracts the orchestration otherwise confined to the binary's
/// `main.rs` and offers a stable API for embedding inside other Rust
/// applications or services.
///
/// Design goals:
/// - Internal side-effects (printing, styling) are excluded.
/// - Focus on returning a normalized `ScanResults`.
/// - Allow substituting the page fetcher, for tests and custom transports.
pub struct ContactFinder;

impl ContactFinder {
    /// Scan a website for publicly listed contact addresses using the
    /// default HTTP fetcher.
    pub async fn scan(
        company_url: &str,
        company_name: Option<&str>,
        config: &Config,
    ) -> Result<ScanResults> {
        let fetcher = HttpFetcher::new(&config.network)?;
        Self::scan_with_fetcher(&fetcher, company_url, company_name, config).await
    }

    /// Scan with a caller-provided fetcher.
    pub async fn scan_with_fetcher<F>(
        fetcher: &F,
        company_url: &str,
        company_name: Option<&str>,
        config: &Config,
    ) -> Result<ScanResults>
    where
        F: PageFetcher + ?Sized,
    {
        config.validate()?;
        let target = CrawlTarget::from_input(company_url)?;

        let start = Instant::now();
        let mut emails = EmailSet::new();
        let stats = crawler::crawl_site(fetcher, &target, config, &mut emails, &SilentEnv).await;

        let contacts: Vec<DiscoveredContact> = emails
            .finalize(config.finalize_options())
            .into_iter()
            .map(|validated| DiscoveredContact {
                email: validated.email,
                domain: validated.domain,
                source: ContactOrigin::CompanyWebsite,
                occurrences: validated.occurrences,
            })
            .collect();

        Ok(ScanResults {
            company_url: target.url().to_string(),
            company_name: company_name.map(|s| s.to_string()),
            contacts,
            metadata: ScanMetadata {
                duration_ms: Some(start.elapsed().as_millis() as u64),
                pages_fetched: stats.pages_fetched,
                pages_failed: stats.pages_failed,
                pages_skipped: stats.pages_skipped,
                links_enqueued: stats.links_enqueued,
                warnings: stats.warnings,
                page_log: stats.visits,
            },
        })
    }
}
