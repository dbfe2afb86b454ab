//! Output formatting for contactfinder results.
//!
//! This module provides the line-oriented output formats: human-readable
//! text, batch lines, and CSV. It owns the result model the formatters
//! consume; the JSON/YAML envelope lives in `structured_output`.

#![allow(dead_code)]

use std::io;

use crate::crawler::{PageStatus, PageVisit};

/// Represents the final results of one contact discovery scan
#[derive(Debug, Clone)]
pub struct ScanResults {
    /// Normalized URL the crawl started from
    pub company_url: String,

    /// Company label echoed from the request, if one was given
    pub company_name: Option<String>,

    /// Validated, deduplicated contacts, sorted by address
    pub contacts: Vec<DiscoveredContact>,

    /// Metadata about the crawl
    pub metadata: ScanMetadata,
}

/// Individual discovered contact address
#[derive(Debug, Clone)]
pub struct DiscoveredContact {
    /// Email address
    pub email: String,

    /// Domain part of the address (after the '@')
    pub domain: String,

    /// Where the address was discovered
    pub source: ContactOrigin,

    /// How many times the address was seen across the crawl
    pub occurrences: u32,
}

/// Origin of a discovered contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOrigin {
    /// Scraped from the organization's own website
    CompanyWebsite,
}

/// Metadata about the crawl behind a set of results
#[derive(Debug, Clone, Default)]
pub struct ScanMetadata {
    /// How long the crawl took
    pub duration_ms: Option<u64>,

    /// Pages fetched and scanned for addresses
    pub pages_fetched: usize,

    /// Pages whose fetch failed
    pub pages_failed: usize,

    /// Pages skipped as non-HTML
    pub pages_skipped: usize,

    /// Links accepted into the frontier
    pub links_enqueued: usize,

    /// Non-fatal problems encountered along the way
    pub warnings: Vec<String>,

    /// Per-page outcome log, in visit order
    pub page_log: Vec<PageVisit>,
}

/// Output format options
#[derive(Debug, Clone)]
pub enum OutputFormat {
    /// Human-readable text format
    Text {
        /// Show occurrence counts
        show_occurrences: bool,
        /// Show crawl metadata and the page log
        show_metadata: bool,
    },

    /// Batch format: url:email1,email2,...
    Batch,

    /// CSV format
    Csv {
        /// Include header row
        include_header: bool,
    },
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text {
            show_occurrences: false,
            show_metadata: false,
        }
    }
}

/// Output formatter trait - made dyn-compatible by removing generic methods
pub trait OutputFormatter {
    /// Format the results into a printable string
    fn format_results(&self, results: &ScanResults) -> io::Result<String>;

    /// Get the MIME type for this format
    fn mime_type(&self) -> &'static str;

    /// Get the file extension for this format
    fn file_extension(&self) -> &'static str;
}

/// Text output formatter
pub struct TextFormatter {
    show_occurrences: bool,
    show_metadata: bool,
}

impl TextFormatter {
    pub fn new(show_occurrences: bool, show_metadata: bool) -> Self {
        Self {
            show_occurrences,
            show_metadata,
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_results(&self, results: &ScanResults) -> io::Result<String> {
        let mut output = String::new();

        if results.contacts.is_empty() {
            output.push_str(&format!(
                "No contact addresses discovered for {}\n",
                results.company_url
            ));
            return Ok(output);
        }

        if self.show_metadata {
            if let Some(name) = &results.company_name {
                output.push_str(&format!("Company: {}\n", name));
            }
            output.push_str(&format!(
                "Crawled {} page(s) ({} failed, {} skipped)\n",
                results.metadata.pages_fetched,
                results.metadata.pages_failed,
                results.metadata.pages_skipped
            ));
            for visit in &results.metadata.page_log {
                output.push_str(&format!("  {}\n", describe_visit(visit)));
            }
            output.push('\n');
        }

        if self.show_occurrences {
            output.push_str("Found contact addresses:\n");
            for contact in &results.contacts {
                output.push_str(&format!("{}\t{}\n", contact.email, contact.occurrences));
            }
        } else {
            // Simple format - just email addresses
            for contact in &results.contacts {
                output.push_str(&format!("{}\n", contact.email));
            }
        }

        if self.show_metadata && !results.metadata.warnings.is_empty() {
            output.push('\n');
            output.push_str("Warnings:\n");
            for warning in &results.metadata.warnings {
                output.push_str(&format!("  {}\n", warning));
            }
        }

        Ok(output)
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

/// Batch output formatter
pub struct BatchFormatter;

impl OutputFormatter for BatchFormatter {
    fn format_results(&self, results: &ScanResults) -> io::Result<String> {
        let emails: Vec<&str> = results.contacts.iter().map(|c| c.email.as_str()).collect();
        Ok(format!("{}:{}\n", results.company_url, emails.join(",")))
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

/// CSV output formatter
pub struct CsvFormatter {
    include_header: bool,
}

impl CsvFormatter {
    pub fn new(include_header: bool) -> Self {
        Self { include_header }
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_results(&self, results: &ScanResults) -> io::Result<String> {
        let mut output = String::new();

        if self.include_header {
            output.push_str("company_url,email,domain,source,occurrences\n");
        }

        for contact in &results.contacts {
            output.push_str(&format!(
                "{},{},{},{},{}\n",
                results.company_url,
                contact.email,
                contact.domain,
                format_origin(&contact.source),
                contact.occurrences
            ));
        }

        Ok(output)
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }
}

/// Format a contact origin for machine-friendly reading
fn format_origin(origin: &ContactOrigin) -> &'static str {
    match origin {
        ContactOrigin::CompanyWebsite => "company_website",
    }
}

/// One-line human description of a page visit
pub fn describe_visit(visit: &PageVisit) -> String {
    match &visit.status {
        PageStatus::Scraped {
            candidates,
            enqueued,
        } => format!(
            "scraped {} ({} candidates, {} links queued)",
            visit.url, candidates, enqueued
        ),
        PageStatus::Failed { reason } => format!("failed {} ({})", visit.url, reason),
        PageStatus::Skipped { content_type } => {
            format!("skipped {} (content type '{}')", visit.url, content_type)
        }
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: &OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text {
            show_occurrences,
            show_metadata,
        } => Box::new(TextFormatter::new(*show_occurrences, *show_metadata)),
        OutputFormat::Batch => Box::new(BatchFormatter),
        OutputFormat::Csv { include_header } => Box::new(CsvFormatter::new(*include_header)),
    }
}

/// Utility function to format results to a string
pub fn format_results_to_string(
    results: &ScanResults,
    format: &OutputFormat,
) -> io::Result<String> {
    let formatter = create_formatter(format);
    formatter.format_results(results)
}
