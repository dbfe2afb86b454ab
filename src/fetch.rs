//! HTTP page retrieval.
//!
//! The crawl loop talks to the network exclusively through the
//! [`PageFetcher`] trait so tests can drive it with canned responses.
//! [`HttpFetcher`] is the production implementation: one shared reqwest
//! client configured with the crawl's user agent and per-request timeout.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::NetworkConfig;
use crate::errors::{CrawlerError, Result};

/// A successfully retrieved page plus the response details the crawl
/// loop cares about.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the response actually came from (after redirects).
    pub final_url: Url,
    /// HTTP status code (always a success code here).
    pub status: u16,
    /// Raw `Content-Type` header value, if the server sent one.
    pub content_type: Option<String>,
    /// Decoded response body.
    pub body: String,
}

impl FetchedPage {
    /// True when the response declared an HTML payload. A missing
    /// `Content-Type` header counts as HTML so bare static servers still
    /// get parsed.
    pub fn is_html(&self) -> bool {
        match &self.content_type {
            Some(ct) => {
                let ct = ct.to_ascii_lowercase();
                ct.contains("text/html") || ct.contains("application/xhtml")
            }
            None => true,
        }
    }
}

/// Abstraction over single-page retrieval.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage>;
}

/// Production fetcher backed by a shared `reqwest` client.
pub struct HttpFetcher {
    client: Client,
    timeout_secs: u64,
}

impl HttpFetcher {
    /// Build the HTTP client from network settings. Fails only on client
    /// construction problems (e.g. TLS backend initialization).
    pub fn new(network: &NetworkConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(network.user_agent.clone())
            .timeout(network.fetch_timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| CrawlerError::internal_with("failed to build HTTP client", e))?;

        Ok(Self {
            client,
            timeout_secs: network.fetch_timeout.as_secs(),
        })
    }

    fn classify(&self, url: &Url, e: reqwest::Error) -> CrawlerError {
        if e.is_timeout() {
            CrawlerError::fetch_timeout(url.as_str(), self.timeout_secs)
        } else {
            CrawlerError::fetch(url.as_str(), e)
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlerError::http_status(url.as_str(), status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let final_url = response.url().clone();

        // Body decoding errors (truncated stream, read timeout) surface the
        // same way as request errors.
        let body = response.text().await.map_err(|e| self.classify(url, e))?;

        Ok(FetchedPage {
            final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(content_type: Option<&str>) -> FetchedPage {
        FetchedPage {
            final_url: Url::parse("https://acme.com/").unwrap(),
            status: 200,
            content_type: content_type.map(str::to_string),
            body: String::new(),
        }
    }

    #[test]
    fn html_detection() {
        assert!(page(Some("text/html")).is_html());
        assert!(page(Some("text/html; charset=utf-8")).is_html());
        assert!(page(Some("application/xhtml+xml")).is_html());
        assert!(page(Some("TEXT/HTML")).is_html());
        assert!(!page(Some("application/pdf")).is_html());
        assert!(!page(Some("image/png")).is_html());
    }

    #[test]
    fn missing_content_type_is_treated_as_html() {
        assert!(page(None).is_html());
    }

    #[tokio::test]
    async fn fetch_maps_http_errors_and_success() {
        let mut server = mockito::Server::new_async().await;
        let ok = server
            .mock("GET", "/team")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>jane@acme.com</body></html>")
            .create_async()
            .await;
        let missing = server
            .mock("GET", "/gone")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(&NetworkConfig::default()).unwrap();

        let url = Url::parse(&format!("{}/team", server.url())).unwrap();
        let fetched = fetcher.fetch(&url).await.unwrap();
        assert_eq!(fetched.status, 200);
        assert!(fetched.is_html());
        assert!(fetched.body.contains("jane@acme.com"));

        let gone = Url::parse(&format!("{}/gone", server.url())).unwrap();
        match fetcher.fetch(&gone).await {
            Err(CrawlerError::HttpStatus { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected HttpStatus error, got {other:?}"),
        }

        ok.assert_async().await;
        missing.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_reports_connection_failures() {
        let fetcher = HttpFetcher::new(&NetworkConfig::default()).unwrap();
        // Port 1 on localhost refuses connections.
        let url = Url::parse("http://127.0.0.1:1/").unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(err.is_page_level());
    }
}
