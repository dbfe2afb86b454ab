//! HTML page parsing.
//!
//! Turns a fetched HTML body into the three things the crawl loop needs:
//! visible text (for the email extractor), anchor hrefs (for the
//! frontier), and addresses lifted from `mailto:` links. Parsing is
//! synchronous and self-contained; `scraper::Html` is not `Send`, so the
//! document never crosses an await point.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::urlutil;

static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

/// What a single parsed page contributes to the crawl.
#[derive(Debug, Default)]
pub struct PageContent {
    /// Visible text with fragments joined by single spaces.
    pub text: String,
    /// Raw href values of non-mailto anchors, in document order.
    pub links: Vec<String>,
    /// Addresses parsed out of `mailto:` anchors.
    pub mailto_hints: Vec<String>,
}

/// Parse an HTML document into text, candidate links, and mailto hints.
pub fn parse_page(html: &str) -> PageContent {
    let document = Html::parse_document(html);
    let mut content = PageContent::default();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        match urlutil::mailto_address(href) {
            Some(address) => content.mailto_hints.push(address),
            None => content.links.push(href.to_string()),
        }
    }

    // Prefer body text; fall back to the whole tree for fragments without
    // a body element.
    let mut push_text = |fragments: scraper::element_ref::Text<'_>| {
        for fragment in fragments {
            let trimmed = fragment.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !content.text.is_empty() {
                content.text.push(' ');
            }
            content.text.push_str(trimmed);
        }
    };

    if let Some(body) = document.select(&BODY_SELECTOR).next() {
        push_text(body.text());
    } else {
        push_text(document.root_element().text());
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_visible_text_across_elements() {
        let html = r#"
            <html><body>
                <h1>Our Team</h1>
                <p>Reach <span>jane</span> <span>[at]</span> <span>acme</span>
                   <span>[dot]</span> <span>com</span></p>
            </body></html>
        "#;
        let content = parse_page(html);
        assert!(content.text.contains("Our Team"));
        assert!(content.text.contains("jane [at] acme [dot] com"));
    }

    #[test]
    fn separates_mailto_anchors_from_links() {
        let html = r#"
            <html><body>
                <a href="/team">Team</a>
                <a href="mailto:jane@acme.com">Email Jane</a>
                <a href="mailto:BOB@ACME.COM?subject=Hello">Email Bob</a>
                <a href="https://other.example/page">External</a>
            </body></html>
        "#;
        let content = parse_page(html);
        assert_eq!(content.links, vec!["/team", "https://other.example/page"]);
        assert_eq!(content.mailto_hints, vec!["jane@acme.com", "BOB@ACME.COM"]);
    }

    #[test]
    fn anchors_without_href_are_ignored() {
        let html = r#"<html><body><a name="top">Top</a><a href="/a">A</a></body></html>"#;
        let content = parse_page(html);
        assert_eq!(content.links, vec!["/a"]);
    }

    #[test]
    fn keeps_document_order_of_links() {
        let html = r#"
            <html><body>
                <a href="/first">1</a>
                <a href="/second">2</a>
                <a href="/third">3</a>
            </body></html>
        "#;
        let content = parse_page(html);
        assert_eq!(content.links, vec!["/first", "/second", "/third"]);
    }

    #[test]
    fn handles_fragment_without_body() {
        let content = parse_page("<p>contact info@acme.com today</p>");
        assert!(content.text.contains("info@acme.com"));
    }

    #[test]
    fn script_and_style_text_stays_out_of_anchor_list() {
        let html = r#"
            <html><body>
                <script>var x = "mailto:fake@nowhere.com";</script>
                <a href="/about">About</a>
            </body></html>
        "#;
        let content = parse_page(html);
        assert_eq!(content.links, vec!["/about"]);
        assert!(content.mailto_hints.is_empty());
    }
}
