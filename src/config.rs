//! Configuration management for contactfinder.
//!
//! Structured configuration with defaults matching the crawl contract,
//! overridable from environment variables and command-line arguments. It
//! centralizes the page budget, frontier capacity, timeouts, the politeness
//! delay range, and output filtering preferences.

use std::time::Duration;

use rand::Rng;

/// Main configuration structure for contactfinder.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Network operation settings
    pub network: NetworkConfig,

    /// Crawl traversal settings
    pub crawl: CrawlConfig,

    /// Output and filtering preferences
    pub output: OutputConfig,
}

/// Network-related configuration options
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Timeout applied to each individual page fetch
    pub fetch_timeout: Duration,

    /// Client identity header sent with every request
    pub user_agent: String,

    /// Optional overall deadline for a whole crawl, checked at the top of
    /// each loop iteration. `None` means the page budget is the only bound.
    pub max_crawl_duration: Option<Duration>,
}

/// Crawl traversal configuration
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Maximum number of pages fetched per crawl
    pub page_budget: usize,

    /// Maximum number of URLs waiting in the frontier; overflow candidates
    /// are dropped
    pub frontier_capacity: usize,

    /// Lower bound of the randomized inter-fetch delay
    pub delay_min: Duration,

    /// Upper bound of the randomized inter-fetch delay
    pub delay_max: Duration,

    /// Substrings that mark a link as likely to lead to people/contact pages
    pub relevant_keywords: Vec<String>,
}

/// Output and filtering configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether generic role-based inboxes (info@, support@, ...) are kept
    pub allow_generic: bool,

    /// Local parts treated as generic role-based inboxes
    pub generic_prefixes: Vec<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(12),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            max_crawl_duration: None,
        }
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            page_budget: 20,
            frontier_capacity: 30,
            delay_min: Duration::from_millis(1500),
            delay_max: Duration::from_millis(3500),
            relevant_keywords: [
                "team",
                "about",
                "staff",
                "employees",
                "employee",
                "people",
                "leadership",
                "management",
                "our-team",
                "company",
                "contact",
                "careers",
                "directory",
                "faculty",
                "researchers",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Default for OutputConfig {
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

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(timeout) = std::env::var("CONTACTFINDER_FETCH_TIMEOUT_SECS")
            && let Ok(secs) = timeout.parse::<u64>()
        {
            config.network.fetch_timeout = Duration::from_secs(secs);
        }

        if let Ok(budget) = std::env::var("CONTACTFINDER_PAGE_BUDGET")
            && let Ok(b) = budget.parse::<usize>()
        {
            config.crawl.page_budget = b;
        }

        if let Ok(capacity) = std::env::var("CONTACTFINDER_FRONTIER_CAPACITY")
            && let Ok(c) = capacity.parse::<usize>()
        {
            config.crawl.frontier_capacity = c;
        }

        if let Ok(min) = std::env::var("CONTACTFINDER_DELAY_MIN_MS")
            && let Ok(ms) = min.parse::<u64>()
        {
            config.crawl.delay_min = Duration::from_millis(ms);
        }

        if let Ok(max) = std::env::var("CONTACTFINDER_DELAY_MAX_MS")
            && let Ok(ms) = max.parse::<u64>()
        {
            config.crawl.delay_max = Duration::from_millis(ms);
        }

        if let Ok(allow) = std::env::var("CONTACTFINDER_ALLOW_GENERIC") {
            config.output.allow_generic = allow.eq_ignore_ascii_case("true")
                || allow.eq_ignore_ascii_case("1")
                || allow.eq_ignore_ascii_case("yes");
        }

        if let Ok(agent) = std::env::var("CONTACTFINDER_USER_AGENT") {
            config.network.user_agent = agent;
        }

        config
    }

    /// Merge with CLI arguments, giving CLI precedence
    pub fn merge_with_cli(&mut self, cli: &crate::cli::Cli) {
        if let Some(max_pages) = cli.max_pages {
            self.crawl.page_budget = max_pages;
        }

        if let Some(max_seconds) = cli.max_seconds {
            self.network.max_crawl_duration = Some(Duration::from_secs(max_seconds));
        }

        if cli.allow_generic {
            self.output.allow_generic = true;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.crawl.page_budget == 0 {
            return Err(ConfigError::InvalidValue {
                field: "crawl.page_budget".to_string(),
                value: "0".to_string(),
                reason: "Page budget must be at least 1".to_string(),
            });
        }

        if self.crawl.frontier_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "crawl.frontier_capacity".to_string(),
                value: "0".to_string(),
                reason: "Frontier capacity must be at least 1".to_string(),
            });
        }

        if self.network.fetch_timeout.as_millis() == 0 {
            return Err(ConfigError::InvalidValue {
                field: "network.fetch_timeout".to_string(),
                value: "0".to_string(),
                reason: "Fetch timeout must be greater than 0".to_string(),
            });
        }

        if self.crawl.delay_min > self.crawl.delay_max {
            return Err(ConfigError::InvalidValue {
                field: "crawl.delay_min".to_string(),
                value: format!("{}ms", self.crawl.delay_min.as_millis()),
                reason: format!(
                    "Delay lower bound exceeds upper bound ({}ms)",
                    self.crawl.delay_max.as_millis()
                ),
            });
        }

        Ok(())
    }

    /// Draw a politeness delay uniformly from the configured range.
    pub fn random_fetch_delay(&self) -> Duration {
        let min = self.crawl.delay_min.as_millis() as u64;
        let max = self.crawl.delay_max.as_millis() as u64;
        if min >= max {
            return self.crawl.delay_min;
        }
        Duration::from_millis(rand::rng().random_range(min..=max))
    }

    /// Finalization options derived from the output preferences.
    pub fn finalize_options(&self) -> crate::emails::FinalizeOptions {
        crate::emails::FinalizeOptions {
            allow_generic: self.output.allow_generic,
            generic_prefixes: self.output.generic_prefixes.clone(),
        }
    }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for '{}': {}", value, field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.crawl.page_budget, 20);
        assert_eq!(config.crawl.frontier_capacity, 30);
        assert_eq!(config.network.fetch_timeout, Duration::from_secs(12));
        assert_eq!(config.crawl.delay_min, Duration::from_millis(1500));
        assert_eq!(config.crawl.delay_max, Duration::from_millis(3500));
        assert!(!config.output.allow_generic);
        assert!(config.crawl.relevant_keywords.iter().any(|k| k == "team"));
        assert!(config.network.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.crawl.page_budget = 0;
        assert!(config.validate().is_err());

        config.crawl.page_budget = 20;
        config.crawl.delay_min = Duration::from_millis(5000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_loading() {
        unsafe {
            env::set_var("CONTACTFINDER_PAGE_BUDGET", "5");
            env::set_var("CONTACTFINDER_FETCH_TIMEOUT_SECS", "3");
            env::set_var("CONTACTFINDER_ALLOW_GENERIC", "yes");
        }

        let config = Config::from_env();
        assert_eq!(config.crawl.page_budget, 5);
        assert_eq!(config.network.fetch_timeout, Duration::from_secs(3));
        assert!(config.output.allow_generic);

        // Clean up
        unsafe {
            env::remove_var("CONTACTFINDER_PAGE_BUDGET");
            env::remove_var("CONTACTFINDER_FETCH_TIMEOUT_SECS");
            env::remove_var("CONTACTFINDER_ALLOW_GENERIC");
        }
    }

    #[test]
    fn test_random_delay_within_bounds() {
        let mut config = Config::default();
        config.crawl.delay_min = Duration::from_millis(10);
        config.crawl.delay_max = Duration::from_millis(20);
        for _ in 0..50 {
            let d = config.random_fetch_delay();
            assert!(d >= Duration::from_millis(10));
            assert!(d <= Duration::from_millis(20));
        }
    }

    #[test]
    fn test_degenerate_delay_range() {
        let mut config = Config::default();
        config.crawl.delay_min = Duration::from_millis(0);
        config.crawl.delay_max = Duration::from_millis(0);
        assert_eq!(config.random_fetch_delay(), Duration::ZERO);
    }

    #[test]
    fn test_finalize_options_mapping() {
        let mut config = Config::default();
        config.output.allow_generic = true;
        let opts = config.finalize_options();
        assert!(opts.allow_generic);
        assert!(opts.generic_prefixes.iter().any(|p| p == "no-reply"));
    }
}
