//! Performance benchmarks for contactfinder components.
//!
//! These benchmarks measure the performance of critical parsing and
//! extraction operations to ensure the tool remains fast even with
//! large pages or high-frequency usage.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use url::Url;

// Import the modules we want to benchmark
use contactfinder::config::Config;
use contactfinder::emails::{is_valid_email, EmailSet};
use contactfinder::extract::{extract_emails, extract_from_variants, normalize_obfuscations};
use contactfinder::page::parse_page;
use contactfinder::urlutil::{self, CrawlTarget};

/// Sample team page for benchmarking
const SAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Acme Corp - Our Team</title></head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
        <a href="/team">Team</a>
        <a href="/contact">Contact</a>
        <a href="/careers">Careers</a>
    </nav>
    <h1>Meet the team</h1>
    <div class="member">
        <h2>Jane Smith, CEO</h2>
        <p>Reach Jane at <a href="mailto:jane.smith@acme.com">jane.smith@acme.com</a></p>
    </div>
    <div class="member">
        <h2>Bob Jones, CTO</h2>
        <p>Bob prefers bob [at] acme [dot] com for technical questions.</p>
    </div>
    <div class="member">
        <h2>Ann Lee, Head of Research</h2>
        <p>Write to ann.lee (at) acme (dot) com about papers and talks.</p>
    </div>
    <footer>
        <p>Press: press@acme.com | Legal: <a href="/legal">notices</a></p>
    </footer>
</body>
</html>
"#;

/// Large roster page with many member entries for stress testing
fn generate_large_roster(num_members: usize) -> String {
    let mut html = String::with_capacity(256 + num_members * 220);

    html.push_str("<!DOCTYPE html>\n<html><body>\n<h1>Staff directory</h1>\n");

    // Alternate plain, mailto and obfuscated listings
    for i in 0..num_members {
        html.push_str(&format!("<div class=\"member\"><h2>Person {i}</h2>"));
        match i % 3 {
            0 => html.push_str(&format!(
                "<p>Email: person{i}@example{}.com</p>",
                i % 10
            )),
            1 => html.push_str(&format!(
                "<p><a href=\"mailto:person{i}@example{}.com\">mail</a></p>",
                i % 10
            )),
            _ => html.push_str(&format!(
                "<p>person{i} [at] example{} [dot] com</p>",
                i % 10
            )),
        }
        html.push_str("</div>\n");
    }

    html.push_str("</body></html>\n");
    html
}

/// Benchmark HTML parsing with different page sizes
fn bench_page_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_parsing");
    group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));

    group.bench_function("team_page", |b| {
        b.iter(|| parse_page(black_box(SAMPLE_HTML)))
    });

    // Benchmark with different roster sizes
    for &size in &[10, 50, 200] {
        let roster = generate_large_roster(size);
        group.throughput(Throughput::Bytes(roster.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("roster_by_size", size),
            &roster,
            |b, html| b.iter(|| parse_page(black_box(html))),
        );
    }

    group.finish();
}

/// Benchmark address extraction from page text
fn bench_email_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_extraction");

    let page = parse_page(SAMPLE_HTML);

    group.bench_function("plain_text", |b| {
        b.iter(|| extract_emails(black_box(&page.text)))
    });

    group.bench_function("raw_and_normalized_variants", |b| {
        b.iter(|| {
            let normalized = normalize_obfuscations(black_box(&page.text));
            extract_from_variants([page.text.as_str(), normalized.as_str()])
        })
    });

    // Large inputs dominated by non-address prose
    let large_roster_text = parse_page(&generate_large_roster(200)).text;
    group.bench_function("large_roster_text", |b| {
        b.iter(|| extract_emails(black_box(&large_roster_text)))
    });

    group.finish();
}

/// Benchmark de-obfuscation rewriting
fn bench_obfuscation_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("obfuscation_normalization");

    let clean_text = "Plain prose with no obfuscated addresses at all, \
                      just ordinary words repeated a few times over.";
    group.bench_function("no_obfuscations", |b| {
        b.iter(|| normalize_obfuscations(black_box(clean_text)))
    });

    let obfuscated = "jane [at] acme [dot] com, bob (at) acme (dot) com, \
                      ann at acme dot com, team[at]acme[dot]com";
    group.bench_function("dense_obfuscations", |b| {
        b.iter(|| normalize_obfuscations(black_box(obfuscated)))
    });

    group.finish();
}

/// Benchmark address validation and accumulation
fn bench_email_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_processing");

    let test_emails = [
        "jane.smith@acme.com",
        "bob@acme.com",
        "press@acme.com",
        "info@acme.com",
        "not-an-email",
        "trailing@dot.",
        "ann.lee@research.acme.co.uk",
        "x@y.io",
    ];

    group.bench_function("is_valid_email", |b| {
        b.iter(|| {
            for email in &test_emails {
                black_box(is_valid_email(email));
            }
        })
    });

    group.bench_function("emailset_operations", |b| {
        b.iter(|| {
            let mut email_set = EmailSet::new();

            // Record each address twice to exercise the occurrence counter
            for email in &test_emails {
                email_set.record(email);
                email_set.record(email);
            }

            let results = email_set.finalize(Default::default());
            black_box(results);
        })
    });

    // Benchmark with different numbers of addresses
    for &num_emails in &[10, 50, 100, 500] {
        group.bench_with_input(
            BenchmarkId::new("emailset_scaling", num_emails),
            &num_emails,
            |b, &num_emails| {
                let emails: Vec<String> = (0..num_emails)
                    .map(|i| format!("person{}@example{}.com", i, i % 10))
                    .collect();

                b.iter(|| {
                    let mut email_set = EmailSet::new();

                    for email in &emails {
                        email_set.record(email);
                    }

                    let results = email_set.finalize(Default::default());
                    black_box(results);
                })
            },
        );
    }

    group.finish();
}

/// Benchmark link resolution and crawl-scope checks
fn bench_link_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_classification");

    let base = Url::parse("https://acme.com/about/").unwrap();
    let target = CrawlTarget::new(base.clone()).unwrap();
    let keywords = Config::default().crawl.relevant_keywords;

    let test_hrefs = vec![
        "/team",
        "../careers/open-roles",
        "https://acme.com/contact?ref=footer#form",
        "https://cdn.acme-assets.com/logo.png",
        "mailto:jane@acme.com",
        "javascript:void(0)",
        "/legal/terms",
        "people/directory.html",
    ];

    group.bench_function("resolve_links", |b| {
        b.iter(|| {
            for href in &test_hrefs {
                black_box(urlutil::resolve_link(&base, href));
            }
        })
    });

    group.bench_function("scope_and_relevance", |b| {
        b.iter(|| {
            for href in &test_hrefs {
                if let Some(resolved) = urlutil::resolve_link(&base, href) {
                    black_box(
                        urlutil::in_scope(&target, &resolved)
                            && urlutil::is_relevant_link(href, &keywords),
                    );
                }
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_page_parsing,
    bench_email_extraction,
    bench_obfuscation_normalization,
    bench_email_processing,
    bench_link_classification
);

criterion_main!(benches);
