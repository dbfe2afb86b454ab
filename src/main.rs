use std::process;
use std::time::Instant;

use contactfinder::cli::{Cli, OutputFormat};
use contactfinder::config::Config;
use contactfinder::crawler::crawl_site;
use contactfinder::emails::EmailSet;
use contactfinder::errors::Result;
use contactfinder::fetch::HttpFetcher;
use contactfinder::output::{
    self, ContactOrigin, DiscoveredContact, OutputFormat as OutputFormatOrig, ScanMetadata,
    ScanResults,
};
use contactfinder::structured_output::ScanOutput;
use contactfinder::styled_output::StyledFormatter;
use contactfinder::urlutil::CrawlTarget;

#[tokio::main]
async fn main() {
    let cli = Cli::from_args();

    // Handle schema generation early exit
    if cli.generate_schema {
        match ScanOutput::generate_json_schema() {
            Ok(schema) => println!("{}", schema),
            Err(e) => {
                eprintln!("Error generating JSON schema: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = run(&cli).await {
        if cli.is_structured_output() {
            // Failures reuse the success envelope shape so consumers always
            // parse one structure.
            let envelope = ScanOutput::failure(
                cli.company_url.clone().unwrap_or_default(),
                cli.name.clone(),
                e.to_string(),
            );
            let rendered = match cli.output_format() {
                OutputFormat::Yaml => envelope.to_yaml(),
                _ => envelope.to_json(),
            };
            match rendered {
                Ok(text) => println!("{}", text),
                Err(format_err) => eprintln!("Error formatting structured output: {}", format_err),
            }
        } else if cli.error_enabled() {
            eprintln!("Error: {}", e);
        }
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = Config::from_env();
    config.merge_with_cli(cli);
    config.validate()?;

    // Normalize and validate the target before any network access.
    let raw_url = cli.company_url.as_deref().unwrap_or_default();
    let target = CrawlTarget::from_input(raw_url)?;

    if cli.is_trace() {
        eprintln!("Crawl target: {} (host: {})", target.url(), target.host());
        eprintln!(
            "Budget: {} pages, frontier capacity {}, delay {}-{}ms",
            config.crawl.page_budget,
            config.crawl.frontier_capacity,
            config.crawl.delay_min.as_millis(),
            config.crawl.delay_max.as_millis()
        );
    }

    let fetcher = HttpFetcher::new(&config.network)?;
    let mut emails = EmailSet::new();
    let stats = crawl_site(&fetcher, &target, &config, &mut emails, cli).await;

    if cli.is_trace() {
        eprintln!(
            "Crawl finished: {} scraped, {} failed, {} skipped, {} raw candidates",
            stats.pages_fetched,
            stats.pages_failed,
            stats.pages_skipped,
            emails.len()
        );
    }

    // Finalize & filter
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

    let results = ScanResults {
        company_url: target.url().to_string(),
        company_name: cli.name.clone(),
        contacts,
        metadata: ScanMetadata {
            duration_ms: Some(start_time.elapsed().as_millis() as u64),
            pages_fetched: stats.pages_fetched,
            pages_failed: stats.pages_failed,
            pages_skipped: stats.pages_skipped,
            links_enqueued: stats.links_enqueued,
            warnings: stats.warnings,
            page_log: stats.visits,
        },
    };

    // Handle structured output formats (JSON/YAML)
    match cli.output_format() {
        OutputFormat::Json | OutputFormat::Yaml => {
            let envelope = ScanOutput::success(&results);
            let rendered = match cli.output_format() {
                OutputFormat::Json => envelope.to_json(),
                _ => envelope.to_yaml(),
            };
            match rendered {
                Ok(text) => println!("{}", text),
                Err(e) => eprintln!("Error formatting structured output: {}", e),
            }
            return Ok(());
        }
        _ => {}
    }

    // Use styled output if enabled
    if cli.should_use_styling() {
        let formatter = if cli.no_color {
            StyledFormatter::without_colors()
        } else {
            StyledFormatter::new()
        };

        if let Err(e) = formatter.print_results(&results) {
            eprintln!("Error formatting styled output: {}", e);
            // Fall back to plain text output
            let fallback = OutputFormatOrig::Text {
                show_occurrences: cli.show_internal(),
                show_metadata: cli.is_trace(),
            };
            let formatter = output::create_formatter(&fallback);
            print!("{}", formatter.format_results(&results)?);
        }
    } else {
        // Use traditional output format
        let format = match cli.output_format() {
            OutputFormat::Batch => OutputFormatOrig::Batch,
            OutputFormat::Csv => OutputFormatOrig::Csv {
                include_header: true,
            },
            _ => OutputFormatOrig::Text {
                show_occurrences: cli.show_internal(),
                show_metadata: cli.is_trace(),
            },
        };

        let formatter = output::create_formatter(&format);
        print!("{}", formatter.format_results(&results)?);
    }

    // If no results and verbose, hint user
    if results.contacts.is_empty() && cli.error_enabled() {
        eprintln!(
            "No contact addresses discovered on {}.",
            results.company_url
        );
        eprintln!("Try a larger --max-pages budget, or --allow-generic to keep role inboxes.");
    }

    Ok(())
}
