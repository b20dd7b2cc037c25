#![allow(clippy::unwrap_used)] // unwrap() is appropriate in tests for clear panic messages

use async_trait::async_trait;
use pageaudit::{analyze_html, AuditOptions, ContentFetcher, Error, FetchStrategy};
use reqwest::Client;

/// Always yields the given HTML.
struct Canned(&'static str);

#[async_trait]
impl FetchStrategy for Canned {
    fn name(&self) -> &str {
        "canned"
    }

    async fn fetch(&self, _client: &Client, _url: &str) -> pageaudit::Result<String> {
        Ok(self.0.to_string())
    }
}

/// Always fails with a non-HTML payload error.
struct Refusing;

#[async_trait]
impl FetchStrategy for Refusing {
    fn name(&self) -> &str {
        "refusing"
    }

    async fn fetch(&self, _client: &Client, _url: &str) -> pageaudit::Result<String> {
        Err(Error::NotHtml)
    }
}

#[tokio::test]
async fn fetched_content_flows_into_the_audit() {
    let html = "<html><head><title>Fetched Through A Stub Strategy Chain</title></head>\
                <body><h1>Fetched</h1><p>stub content body</p></body></html>";
    let fetcher = ContentFetcher::with_strategies(vec![
        Box::new(Refusing),
        Box::new(Canned(html)),
    ])
    .unwrap();

    let outcome = fetcher.fetch("https://example.com/page").await;
    assert!(outcome.success);

    let result = analyze_html(
        &outcome.content,
        "https://example.com/page",
        None,
        &AuditOptions::default(),
    );
    assert!(result.content_fetched);
    assert_eq!(
        result.meta_data.unwrap().title.as_deref(),
        Some("Fetched Through A Stub Strategy Chain")
    );
}

#[tokio::test]
async fn exhausted_chain_reports_the_url_and_last_failure() {
    let fetcher =
        ContentFetcher::with_strategies(vec![Box::new(Refusing), Box::new(Refusing)]).unwrap();

    let outcome = fetcher.fetch("https://example.com/blocked").await;

    assert!(!outcome.success);
    assert!(outcome.content.is_empty());
    let error = outcome.error.unwrap();
    assert!(error.contains("https://example.com/blocked"));
    assert!(error.contains("refusing"));
}

#[tokio::test]
async fn empty_chain_fails_cleanly() {
    let fetcher = ContentFetcher::with_strategies(Vec::new()).unwrap();
    let outcome = fetcher.fetch("https://example.com").await;

    assert!(!outcome.success);
    assert!(outcome.error.is_some());
}
