//! Unified error handling for the crawler.
//!
//! A `thiserror`-based model with:
//!   * Typed variants for the common failure domains
//!   * A categorization layer (`ErrorCategory`) for structured reporting
//!   * Helper constructors
//!   * `From` conversions for common lower-level errors
//!
//! Design goals:
//!   * Keep end-user messages clear & actionable
//!   * Avoid leaking internal implementation details
//!   * Enable structured output to classify errors deterministically
//!
//! Categories are intentionally coarse:
//!   - Input: user / data validation issues
//!   - Network: transient or remote-host problems
//!   - Internal: logic bugs or unexpected states
//!
//! Page-level fetch failures are represented here too, but the crawl loop
//! absorbs them into per-page outcomes instead of propagating; only errors
//! raised before a crawl starts (bad URL, bad config, client build) reach
//! the caller as `Err`.

use std::io;

use thiserror::Error;

/// High-level classification for structured reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Network => "network",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Primary application error type.
#[derive(Error, Debug)]
pub enum CrawlerError {
    // ------------------------ Input / Validation ----------------------------
    #[error("Invalid target URL '{url}': {reason}")]
    InvalidTargetUrl { url: String, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // ----------------------------- Network ----------------------------------
    #[error("Request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request to {url} timed out after {seconds}s")]
    FetchTimeout { url: String, seconds: u64 },

    #[error("Request to {url} returned HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    // ----------------------------- I/O --------------------------------------
    #[error("I/O error during {operation} on {path}: {source}")]
    Io {
        path: String,
        operation: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------- Internal ----------------------------------
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CrawlerError {
    /// Categorize the error for structured output.
    pub fn category(&self) -> ErrorCategory {
        use CrawlerError::*;
        match self {
            InvalidTargetUrl { .. } | Configuration { .. } => ErrorCategory::Input,

            Fetch { .. } | FetchTimeout { .. } | HttpStatus { .. } => ErrorCategory::Network,

            Io { .. } | Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// True for failures that are recoverable at page granularity: the crawl
    /// records them and moves on to the next queued URL.
    pub fn is_page_level(&self) -> bool {
        matches!(
            self,
            CrawlerError::Fetch { .. }
                | CrawlerError::FetchTimeout { .. }
                | CrawlerError::HttpStatus { .. }
        )
    }

    // ---------------------------- Constructors -----------------------------

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTargetUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn fetch(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Fetch {
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn fetch_timeout(url: impl Into<String>, seconds: u64) -> Self {
        Self::FetchTimeout {
            url: url.into(),
            seconds,
        }
    }

    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal_with(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Public result alias.
pub type Result<T> = std::result::Result<T, CrawlerError>;

/// Map standard IO errors into the `Io` variant (generic context).
impl From<io::Error> for CrawlerError {
    fn from(e: io::Error) -> Self {
        CrawlerError::Io {
            path: "<unknown>".into(),
            operation: "unspecified".into(),
            source: e,
        }
    }
}

/// Map reqwest errors where no richer context is available; fetch sites that
/// know the target URL and timeout wrap via the constructors instead.
impl From<reqwest::Error> for CrawlerError {
    fn from(e: reqwest::Error) -> Self {
        let url = e
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".into());
        if e.is_timeout() {
            CrawlerError::FetchTimeout { url, seconds: 0 }
        } else {
            CrawlerError::Fetch {
                url,
                source: Box::new(e),
            }
        }
    }
}

impl From<crate::config::ConfigError> for CrawlerError {
    fn from(e: crate::config::ConfigError) -> Self {
        CrawlerError::Configuration {
            message: e.to_string(),
        }
    }
}
