//! URL utilities for audit input handling.
//!
//! Provides scheme normalization for user-supplied URLs and path/hostname
//! extraction for the URL-structure checks. All functions degrade
//! gracefully on malformed input; URL validation proper is the caller's
//! responsibility.

use url::Url;

/// Normalize a user-supplied URL to an absolute form.
///
/// Bare-domain input ("example.com/page") gets an `https://` scheme
/// prepended before fetching. Already-absolute URLs pass through trimmed.
///
/// # Example
///
/// ```rust
/// use pageaudit::url_utils::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// ```
#[must_use]
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Extract the path component of a URL for URL-structure checks.
///
/// Falls back to the raw input (minus scheme and host guesswork) when the
/// URL cannot be parsed, so the structure rules still have something to
/// measure.
#[must_use]
pub fn url_path(url_str: &str) -> String {
    match Url::parse(&normalize_url(url_str)) {
        Ok(url) => url.path().to_string(),
        Err(_) => url_str.to_string(),
    }
}
