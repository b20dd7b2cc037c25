//! Error types for pageaudit.
//!
//! These errors are internal to the content-retrieval chain. The public
//! `analyze` entry point never returns them: retrieval failure is reported
//! as a structured `AnalysisResult` instead.

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request itself failed (connect, TLS, timeout, status).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response was received but does not look like an HTML document.
    ///
    /// Raised when a proxy returns an error page or JSON envelope that
    /// fails the DOCTYPE/`<html`/`<head` signature check.
    #[error("response does not look like an HTML document")]
    NotHtml,

    /// Every strategy in the fetch chain was attempted and failed.
    #[error("all fetch strategies failed for {url}: {reason}")]
    FetchExhausted {
        /// The URL that could not be retrieved.
        url: String,
        /// Description of the last failure in the chain.
        reason: String,
    },
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;
