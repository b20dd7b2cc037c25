//! Compiled regex patterns used across the audit pipeline.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Matches the opening signature of an HTML document.
///
/// Used to reject proxy responses that return an error page or JSON
/// envelope disguised as a 200 OK.
pub static HTML_SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(<!doctype\s+html|<html|<head)").expect("HTML_SIGNATURE regex"));

/// Matches URL path segments considered unreadable for SEO purposes:
/// uppercase letters, underscores, or percent-encoded bytes.
pub static UNREADABLE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z_]|%[0-9a-fA-F]{2}").expect("UNREADABLE_PATH regex"));

/// Matches separators used in URL slugs (hyphen, underscore, slash, dot).
pub static SLUG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_/.+]+").expect("SLUG_SEPARATOR regex"));

/// Matches modern image format references in a src or type attribute.
pub static MODERN_IMAGE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(webp|avif|jxl)\b").expect("MODERN_IMAGE_FORMAT regex"));

/// Build a case-insensitive whole-word pattern for a literal phrase.
///
/// The phrase is escaped, so keyword input can never inject regex syntax.
/// Returns `None` for phrases that normalize to nothing.
#[must_use]
pub fn whole_word_pattern(phrase: &str) -> Option<Regex> {
    let normalized = WHITESPACE_NORMALIZE.replace_all(phrase.trim(), " ");
    if normalized.is_empty() {
        return None;
    }
    let escaped = regex::escape(&normalized).replace(r"\ ", r"\s+");
    Regex::new(&format!(r"(?i)\b{escaped}\b")).ok()
}
