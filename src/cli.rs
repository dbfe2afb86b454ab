use clap::Parser;

/// Command-line interface definition.
/// Provides command-line options for contact email discovery.
///
/// Verbosity levels:
/// 0 - silent (only final output)
/// 1 - errors (default)
/// 2 - warnings + errors
/// 5 - trace/debug
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Discover publicly listed contact email addresses by crawling an organization's website"
)]
pub struct Cli {
    /// Seed URL of the organization's website (https:// is assumed when the
    /// scheme is omitted). Required unless --generate-schema is provided.
    #[arg(required_unless_present = "generate_schema")]
    pub company_url: Option<String>,

    /// Company name echoed into the output for labeling
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Maximum number of pages fetched during the crawl
    #[arg(long = "max-pages", value_name = "N")]
    pub max_pages: Option<usize>,

    /// Overall crawl deadline in seconds (unset: page budget is the only bound)
    #[arg(long = "max-seconds", value_name = "SECS")]
    pub max_seconds: Option<u64>,

    /// Keep generic role-based inboxes (info@, support@, ...) in the results
    #[arg(long = "allow-generic", default_value_t = false)]
    pub allow_generic: bool,

    /// Verbosity level (0,1,2,5)
    #[arg(long, default_value_t = 1)]
    pub verbose: u8,

    /// Show approximate shell-equivalent commands for each fetch
    #[arg(long)]
    pub show_commands: bool,

    /// Batch output: single line "url:addr1,addr2"
    #[arg(long, conflicts_with_all = ["json", "yaml", "csv"])]
    pub batch: bool,

    /// Output results as structured JSON
    #[arg(long, conflicts_with_all = ["yaml", "batch", "csv"])]
    pub json: bool,

    /// Output results as structured YAML
    #[arg(long, conflicts_with_all = ["json", "batch", "csv"])]
    pub yaml: bool,

    /// Output results as CSV (one row per discovered address)
    #[arg(long, conflicts_with_all = ["json", "yaml", "batch"])]
    pub csv: bool,

    /// Plain text output without terminal styling
    #[arg(long)]
    pub plain: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print the JSON schema for the structured output format and exit
    #[arg(long = "generate-schema")]
    pub generate_schema: bool,
}

/// Top-level output format selected by the CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Batch,
    Csv,
    Json,
    Yaml,
}

impl Cli {
    /// Parse CLI arguments from process args.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Convenience: are we in very verbose/debug mode?
    pub fn is_trace(&self) -> bool {
        self.verbose >= 5
    }

    /// Should we show occurrence counts and internal steps?
    pub fn show_internal(&self) -> bool {
        self.is_trace()
    }

    /// Are warning-level messages enabled?
    pub fn warn_enabled(&self) -> bool {
        self.verbose >= 2
    }

    /// Are error-level messages enabled?
    pub fn error_enabled(&self) -> bool {
        self.verbose >= 1
    }

    /// Which top-level output format did the flags select?
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else if self.csv {
            OutputFormat::Csv
        } else if self.batch {
            OutputFormat::Batch
        } else {
            OutputFormat::Text
        }
    }

    /// True when a machine-readable envelope (JSON/YAML) was requested.
    pub fn is_structured_output(&self) -> bool {
        self.json || self.yaml
    }

    /// True when the default styled terminal output should be used.
    pub fn should_use_styling(&self) -> bool {
        matches!(self.output_format(), OutputFormat::Text) && !self.plain
    }
}
