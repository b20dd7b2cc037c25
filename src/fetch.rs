//! Content retrieval with a cascading fallback chain.
//!
//! A page is fetched by walking an ordered list of interchangeable fetch
//! strategies: a direct request first, then each configured CORS proxy,
//! then a final plain-text fallback. Strategies are attempted strictly in
//! sequence; the first success halts the chain and each candidate is tried
//! exactly once per call (no retries, no parallel racing).
//!
//! Transport failures never escape this module: exhaustion of the chain is
//! reported as a `FetchOutcome` with `success: false`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{Error, Result};
use crate::options::AuditOptions;
use crate::patterns::HTML_SIGNATURE;

/// Browser-like Accept header sent with HTML fetch attempts.
const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Outcome of walking the fetch chain.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    /// The retrieved HTML, empty on failure.
    pub content: String,
    /// Whether any strategy in the chain succeeded.
    pub success: bool,
    /// Description of the failure when `success` is `false`.
    pub error: Option<String>,
}

/// One way of retrieving a page.
///
/// Strategies are interchangeable leaves behind this interface so they can
/// be added, reordered, or mocked in tests independently of the
/// orchestration logic.
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Attempt to retrieve `url`, returning the page HTML.
    async fn fetch(&self, client: &Client, url: &str) -> Result<String>;
}

/// Direct request to the target URL with a short timeout.
#[derive(Debug)]
pub struct DirectFetch {
    timeout: Duration,
}

impl DirectFetch {
    /// Create a direct strategy with the given per-attempt timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl FetchStrategy for DirectFetch {
    fn name(&self) -> &str {
        "direct"
    }

    async fn fetch(&self, client: &Client, url: &str) -> Result<String> {
        let response = client
            .get(url)
            .header(reqwest::header::ACCEPT, HTML_ACCEPT)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

/// Request through a CORS proxy with a longer timeout.
///
/// The target URL is percent-encoded and appended to the proxy template.
/// Proxies sometimes return error pages or JSON envelopes with a 200
/// status, so the payload is coerced to a string and must pass the HTML
/// signature check before it is accepted.
#[derive(Debug)]
pub struct ProxyFetch {
    template: String,
    timeout: Duration,
}

impl ProxyFetch {
    /// Create a proxy strategy for one URL template.
    #[must_use]
    pub fn new(template: impl Into<String>, timeout: Duration) -> Self {
        Self {
            template: template.into(),
            timeout,
        }
    }
}

#[async_trait]
impl FetchStrategy for ProxyFetch {
    fn name(&self) -> &str {
        "proxy"
    }

    async fn fetch(&self, client: &Client, url: &str) -> Result<String> {
        let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
        let proxy_url = format!("{}{}", self.template, encoded);

        let response = client
            .get(&proxy_url)
            .header(reqwest::header::ACCEPT, HTML_ACCEPT)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let content = coerce_payload(&body);

        if HTML_SIGNATURE.is_match(&content) {
            Ok(content)
        } else {
            Err(Error::NotHtml)
        }
    }
}

/// Last-resort plain fetch of the raw page source.
#[derive(Debug)]
pub struct RawFetch {
    timeout: Duration,
}

impl RawFetch {
    /// Create the raw-source fallback strategy.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl FetchStrategy for RawFetch {
    fn name(&self) -> &str {
        "raw"
    }

    async fn fetch(&self, client: &Client, url: &str) -> Result<String> {
        let response = client
            .get(url)
            .header(reqwest::header::ACCEPT, "*/*")
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        if HTML_SIGNATURE.is_match(&body) {
            Ok(body)
        } else {
            Err(Error::NotHtml)
        }
    }
}

/// Unwrap proxy JSON envelopes.
///
/// Some proxies wrap the page in a JSON object (e.g. `{"contents": "..."}`);
/// anything else is passed through unchanged.
fn coerce_payload(body: &str) -> String {
    let trimmed = body.trim_start();
    if trimmed.starts_with('{') {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
            if let Some(contents) = value.get("contents").and_then(|c| c.as_str()) {
                return contents.to_string();
            }
        }
    }
    body.to_string()
}

/// Walks an ordered strategy chain until one succeeds.
pub struct ContentFetcher {
    client: Client,
    strategies: Vec<Box<dyn FetchStrategy>>,
}

impl ContentFetcher {
    /// Build the standard chain from the audit options:
    /// direct, one proxy per configured template, then the raw fallback.
    pub fn new(opts: &AuditOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.clone())
            .build()?;

        let mut strategies: Vec<Box<dyn FetchStrategy>> =
            vec![Box::new(DirectFetch::new(opts.direct_timeout))];
        for template in &opts.proxy_templates {
            strategies.push(Box::new(ProxyFetch::new(template.clone(), opts.proxy_timeout)));
        }
        strategies.push(Box::new(RawFetch::new(opts.proxy_timeout)));

        Ok(Self { client, strategies })
    }

    /// Build a fetcher with an explicit strategy list.
    ///
    /// Primarily for tests, which substitute mock strategies.
    pub fn with_strategies(strategies: Vec<Box<dyn FetchStrategy>>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, strategies })
    }

    /// Retrieve `url`, trying each strategy in order.
    ///
    /// Every transport error is caught and treated as "try the next
    /// candidate"; only exhaustion of the whole chain is reported, as a
    /// `FetchOutcome` with `success: false`. This method never returns an
    /// error.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let mut last_error = String::from("no fetch strategies configured");

        for strategy in &self.strategies {
            match strategy.fetch(&self.client, url).await {
                Ok(content) => {
                    debug!(strategy = strategy.name(), url, "fetch succeeded");
                    return FetchOutcome {
                        content,
                        success: true,
                        error: None,
                    };
                }
                Err(err) => {
                    debug!(strategy = strategy.name(), url, %err, "fetch attempt failed");
                    last_error = format!("{} ({})", err, strategy.name());
                }
            }
        }

        let exhausted = Error::FetchExhausted {
            url: url.to_string(),
            reason: last_error,
        };
        FetchOutcome {
            content: String::new(),
            success: false,
            error: Some(exhausted.to_string()),
        }
    }
}
