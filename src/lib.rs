//! # pageaudit
//!
//! On-page SEO audit of a single web page.
//!
//! The library retrieves a page's HTML through a cascading fetch chain,
//! extracts its structural signals (title, meta tags, headings, images,
//! canonical/schema/social tags), measures how well an optional target
//! keyword is represented across those signals, and produces a weighted,
//! human-readable score with itemized pass/fail/warning findings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() {
//! let result = pageaudit::analyze("example.com/blog/pizza-recipe", Some("pizza recipe")).await;
//!
//! println!("Score: {}/100", result.score);
//! for category in &result.categories {
//!     println!("{}: {} checks", category.title, category.items.len());
//! }
//! # }
//! ```
//!
//! The synchronous core is exposed as [`analyze_html`] for callers that
//! already hold the page HTML (and for tests): analysis is a pure function
//! of `(html, url, keyword)` with no shared state between invocations.

mod error;
mod options;
mod result;

/// SEO rule evaluation, one module per report category.
pub mod checks;

/// Content retrieval with a cascading fallback chain.
pub mod fetch;

/// Compiled regex patterns used across the pipeline.
pub mod patterns;

/// Keyword presence and weighted density computation.
pub mod relevance;

/// Weighted score aggregation.
pub mod scoring;

/// HTML signal extraction over a parsed document.
pub mod signals;

/// URL normalization and path extraction.
pub mod url_utils;

use dom_query::Document;
use tracing::info;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{ContentFetcher, FetchOutcome, FetchStrategy};
pub use options::{AuditOptions, ScoreWeights};
pub use result::{
    AnalysisResult, Category, CheckDetails, CheckItem, CheckStatus, Importance,
    KeywordDensityResult, PageMeta,
};
pub use signals::PageSignals;

/// Audit a page by URL using default options.
///
/// The URL may be bare ("example.com/page"); a missing scheme is
/// normalized to `https://` before fetching. This function never returns
/// an error: retrieval failure is reported as a result with
/// `content_fetched: false`, a score of 0, and a single explanatory
/// category.
pub async fn analyze(url: &str, keyword: Option<&str>) -> AnalysisResult {
    analyze_with_options(url, keyword, &AuditOptions::default()).await
}

/// Audit a page by URL with custom options.
pub async fn analyze_with_options(
    url: &str,
    keyword: Option<&str>,
    opts: &AuditOptions,
) -> AnalysisResult {
    let url = url_utils::normalize_url(url);

    let outcome = match ContentFetcher::new(opts) {
        Ok(fetcher) => fetcher.fetch(&url).await,
        Err(err) => FetchOutcome {
            content: String::new(),
            success: false,
            error: Some(err.to_string()),
        },
    };

    if !outcome.success {
        let error = outcome
            .error
            .unwrap_or_else(|| "content could not be retrieved".to_string());
        info!(url = %url, error = %error, "audit aborted: content not fetched");
        return access_failure_result(&error);
    }

    let result = analyze_html(&outcome.content, &url, keyword, opts);
    info!(url = %url, score = result.score, "audit complete");
    result
}

/// Audit already-retrieved HTML.
///
/// Pure and deterministic: identical inputs yield identical results.
/// `url` is only used for the URL-structure checks; `keyword` may be
/// empty or whitespace, which disables the keyword rules exactly as if
/// it were absent.
#[must_use]
pub fn analyze_html(
    html: &str,
    url: &str,
    keyword: Option<&str>,
    opts: &AuditOptions,
) -> AnalysisResult {
    let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());

    let doc = Document::from(html);
    let signals = PageSignals::from_document(&doc);

    let density = keyword
        .map(|k| relevance::calculate_keyword_density(&signals.body_text, k, opts));

    let categories = checks::run_all(&signals, url, keyword, density.as_ref(), opts);
    let items: Vec<CheckItem> = categories
        .iter()
        .flat_map(|c| c.items.iter().cloned())
        .collect();
    let breakdown = scoring::calculate_seo_score(&items);

    AnalysisResult {
        score: breakdown.score,
        categories,
        content_fetched: true,
        relevance_tier: density
            .as_ref()
            .map(|d| d.importance.as_str().to_string()),
        meta_data: Some(PageMeta {
            title: signals.title.clone(),
            description: signals.description().map(str::to_string),
            canonical: signals.canonical.clone(),
            og_tags: signals.og.clone(),
        }),
    }
}

/// The structured result for a page whose content could not be retrieved.
fn access_failure_result(error: &str) -> AnalysisResult {
    AnalysisResult {
        score: 0,
        categories: vec![checks::access_error_category(error)],
        content_fetched: false,
        relevance_tier: None,
        meta_data: None,
    }
}
