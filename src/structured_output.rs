//! Structured output module for JSON and YAML serialization.
//!
//! This module defines the machine-readable envelope for scan results:
//! tool metadata, the discovered addresses, crawl statistics, and warnings.
//! The same envelope is used for failures, with `success` set to false and
//! an `error` message attached, so consumers always parse one shape.

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::output::{ContactOrigin, ScanResults};

/// Root structure for all contactfinder output in structured formats
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct ScanOutput {
    /// Tool version and metadata
    pub metadata: OutputMetadata,

    /// Whether the scan ran to completion
    pub success: bool,

    /// The URL that was scanned (as requested, normalized when possible)
    pub company_url: String,

    /// Company label echoed from the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Discovered contact addresses
    pub emails: Vec<EmailEntry>,

    /// Number of discovered addresses
    pub total_found: u64,

    /// Crawl statistics
    pub statistics: CrawlStatistics,

    /// Non-fatal problems encountered during the crawl
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,

    /// Error message when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Tool metadata and versioning information
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct OutputMetadata {
    /// Tool name
    pub tool_name: String,

    /// Tool version
    pub version: String,

    /// Timestamp when the scan was performed
    pub generated_at: chrono::DateTime<chrono::Utc>,

    /// Schema version for this output format
    pub schema_version: String,
}

/// A discovered address entry
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct EmailEntry {
    /// The email address
    pub email: String,

    /// How this address was discovered
    pub source: EmailSource,

    /// Domain part of the address
    pub domain: String,
}

/// Source where an address was discovered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmailSource {
    /// Scraped from the organization's own website
    CompanyWebsite,
}

impl From<ContactOrigin> for EmailSource {
    fn from(origin: ContactOrigin) -> Self {
        match origin {
            ContactOrigin::CompanyWebsite => EmailSource::CompanyWebsite,
        }
    }
}

/// Crawl statistics for structured output
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct CrawlStatistics {
    /// Pages fetched and scanned
    pub pages_fetched: u64,

    /// Pages whose fetch failed
    pub pages_failed: u64,

    /// Pages skipped as non-HTML
    pub pages_skipped: u64,

    /// Total crawl time in milliseconds
    pub duration_ms: u64,
}

impl ScanOutput {
    fn base(company_url: String, company_name: Option<String>) -> Self {
        Self {
            metadata: OutputMetadata {
                tool_name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: chrono::Utc::now(),
                schema_version: "1.0.0".to_string(),
            },
            success: false,
            company_url,
            company_name,
            emails: Vec::new(),
            total_found: 0,
            statistics: CrawlStatistics {
                pages_fetched: 0,
                pages_failed: 0,
                pages_skipped: 0,
                duration_ms: 0,
            },
            warnings: Vec::new(),
            error: None,
        }
    }

    /// Build the envelope for a completed scan.
    pub fn success(results: &ScanResults) -> Self {
        let mut output = Self::base(results.company_url.clone(), results.company_name.clone());
        output.success = true;
        output.emails = results
            .contacts
            .iter()
            .map(|contact| EmailEntry {
                email: contact.email.clone(),
                source: contact.source.into(),
                domain: contact.domain.clone(),
            })
            .collect();
        output.total_found = output.emails.len() as u64;
        output.statistics = CrawlStatistics {
            pages_fetched: results.metadata.pages_fetched as u64,
            pages_failed: results.metadata.pages_failed as u64,
            pages_skipped: results.metadata.pages_skipped as u64,
            duration_ms: results.metadata.duration_ms.unwrap_or(0),
        };
        output.warnings = results.metadata.warnings.clone();
        output
    }

    /// Build the envelope for a scan that never completed.
    pub fn failure(
        company_url: impl Into<String>,
        company_name: Option<String>,
        error: impl Into<String>,
    ) -> Self {
        let mut output = Self::base(company_url.into(), company_name);
        output.error = Some(error.into());
        output
    }

    /// Generate JSON schema for this output format
    pub fn generate_json_schema() -> Result<String> {
        let schema = schemars::schema_for!(ScanOutput);
        Ok(serde_json::to_string_pretty(&schema)?)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{DiscoveredContact, ScanMetadata};

    fn sample_results() -> ScanResults {
        ScanResults {
            company_url: "https://acme.com/".to_string(),
            company_name: Some("Acme Corp".to_string()),
            contacts: vec![DiscoveredContact {
                email: "jane@acme.com".to_string(),
                domain: "acme.com".to_string(),
                source: ContactOrigin::CompanyWebsite,
                occurrences: 2,
            }],
            metadata: ScanMetadata {
                duration_ms: Some(4200),
                pages_fetched: 5,
                pages_failed: 1,
                pages_skipped: 0,
                links_enqueued: 7,
                warnings: vec!["one page timed out".to_string()],
                page_log: Vec::new(),
            },
        }
    }

    #[test]
    fn success_envelope_mirrors_results() {
        let output = ScanOutput::success(&sample_results());

        assert!(output.success);
        assert!(output.error.is_none());
        assert_eq!(output.total_found, 1);
        assert_eq!(output.emails[0].email, "jane@acme.com");
        assert_eq!(output.emails[0].domain, "acme.com");
        assert_eq!(output.statistics.pages_fetched, 5);
        assert_eq!(output.statistics.duration_ms, 4200);
        assert_eq!(output.warnings.len(), 1);

        let json = output.to_json().unwrap();
        assert!(json.contains("\"company_website\""));
        assert!(json.contains("\"total_found\": 1"));
    }

    #[test]
    fn statistics_hold_counts_beyond_u32() {
        let mut results = sample_results();
        results.metadata.pages_fetched = (u32::MAX as usize) + 1;
        results.metadata.pages_skipped = usize::MAX;

        let output = ScanOutput::success(&results);

        assert_eq!(output.statistics.pages_fetched, u64::from(u32::MAX) + 1);
        assert_eq!(output.statistics.pages_skipped, usize::MAX as u64);
    }

    #[test]
    fn failure_envelope_carries_error() {
        let output = ScanOutput::failure("not a url", None, "Invalid target URL");

        assert!(!output.success);
        assert_eq!(output.error.as_deref(), Some("Invalid target URL"));
        assert_eq!(output.total_found, 0);

        let json = output.to_json().unwrap();
        assert!(json.contains("\"success\": false"));
        assert!(json.contains("\"error\""));
        // company_name was not given and stays out of the payload
        assert!(!json.contains("company_name"));
    }

    #[test]
    fn schema_generation_works() {
        let schema = ScanOutput::generate_json_schema().unwrap();
        assert!(schema.contains("ScanOutput"));
        assert!(schema.contains("company_url"));
    }
}
