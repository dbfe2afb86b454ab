//! ContactFinder Library
//!
//! A Rust library for discovering publicly listed contact email addresses on
//! an organization's website. This library provides functionality to:
//!
//! - Crawl same-host pages breadth-first within a page budget, politely
//! - Extract addresses from `mailto:` links and page text, including common
//!   "name \[at\] domain \[dot\] com" obfuscations
//! - Validate, deduplicate, and filter generic role-based inboxes
//! - Format results as text, batch lines, CSV, JSON, or YAML
//!
//! # Example
//!
//! ```rust,no_run
//! use contactfinder::config::Config;
//! use contactfinder::ContactFinder;
//!
//! # async fn run() -> contactfinder::Result<()> {
//! let config = Config::default();
//! let results = ContactFinder::scan("https://acme.com", Some("Acme Corp"), &config).await?;
//! for contact in &results.contacts {
//!     println!("{} ({})", contact.email, contact.domain);
//! }
//! # Ok(())
//! # }
//! ```

// Re-export all modules for library use
pub mod cli;
pub mod config;
pub mod crawler;
pub mod emails;
pub mod errors;
pub mod extract;
pub mod facade;
pub mod fetch;
pub mod frontier;
pub mod output;
pub mod page;
pub mod structured_output;
pub mod styled_output;
pub mod urlutil;

// Re-export commonly used types and functions for convenience
pub use emails::{EmailSet, FinalizeOptions};
pub use errors::{CrawlerError, Result};
pub use facade::ContactFinder;
pub use output::{DiscoveredContact, OutputFormat, ScanResults};
pub use styled_output::StyledFormatter;
pub use urlutil::CrawlTarget;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
