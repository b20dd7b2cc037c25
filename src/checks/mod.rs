//! SEO rule evaluation, one module per report category.
//!
//! Each category runs a deterministic sequence of rule evaluations that
//! each produce one `CheckItem`. Keyword rules follow a consistent
//! three-tier pattern: exact match passes, partial/out-of-order match
//! warns with reduced points, absence fails. When no keyword is supplied
//! the keyword-specific items are simply omitted, not marked failed.

pub mod content;
pub mod headings;
pub mod images;
pub mod technical;
pub mod title_meta;
pub mod url_structure;

use crate::options::AuditOptions;
use crate::relevance::KeywordMatch;
use crate::result::{Category, CheckItem, CheckStatus, KeywordDensityResult};
use crate::signals::PageSignals;

/// Evaluate every category in fixed presentation order.
///
/// `density` is the precomputed keyword density report, present when a
/// keyword was supplied; the content category attaches it as evidence.
#[must_use]
pub fn run_all(
    signals: &PageSignals,
    url: &str,
    keyword: Option<&str>,
    density: Option<&KeywordDensityResult>,
    opts: &AuditOptions,
) -> Vec<Category> {
    vec![
        url_structure::check(url, keyword, opts),
        title_meta::check(signals, keyword, opts),
        headings::check(signals, keyword, opts),
        images::check(signals, keyword, opts),
        technical::check(signals, opts),
        content::check(signals, keyword, density, opts),
    ]
}

/// The single synthetic category emitted when content retrieval failed.
#[must_use]
pub fn access_error_category(error: &str) -> Category {
    let item = CheckItem::new(
        "Content Retrieval",
        CheckStatus::Fail,
        "The page content could not be retrieved",
        0,
    )
    .with_details(
        error,
        "The page responds with HTML to at least one fetch strategy",
        "Without the page HTML no on-page signal can be evaluated",
    );

    Category {
        title: "Content Access Error".to_string(),
        items: vec![item],
    }
}

/// Map a keyword match class to the three-tier verdict.
pub(crate) fn tier_status(matched: KeywordMatch) -> CheckStatus {
    match matched {
        KeywordMatch::Exact => CheckStatus::Pass,
        KeywordMatch::Partial => CheckStatus::Warning,
        KeywordMatch::None => CheckStatus::Fail,
    }
}

/// Build the standard three-tier keyword presence item for a location
/// ("title", "H1 heading", ...).
pub(crate) fn keyword_presence_item(
    name: &str,
    text: &str,
    keyword: &str,
    points: u32,
    location: &str,
    explanation: &str,
) -> CheckItem {
    let matched = crate::relevance::keyword_match(text, keyword);
    let message = match matched {
        KeywordMatch::Exact => format!("Keyword \"{keyword}\" found in the {location}"),
        KeywordMatch::Partial => {
            format!("Keyword \"{keyword}\" only partially matches the {location}")
        }
        KeywordMatch::None => format!("Keyword \"{keyword}\" not found in the {location}"),
    };

    let found = if text.trim().is_empty() {
        format!("No {location} text")
    } else {
        preview(text)
    };

    CheckItem::new(name, tier_status(matched), message, points).with_details(
        found,
        format!("\"{keyword}\" appears in the {location}"),
        explanation,
    )
}

/// Shorten evidence text for the details view, keeping char boundaries.
pub(crate) fn preview(text: &str) -> String {
    const MAX: usize = 120;
    let text = text.trim();
    if text.chars().count() <= MAX {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    #[test]
    fn access_error_category_has_single_fail_item() {
        let category = access_error_category("all fetch strategies failed");
        assert_eq!(category.title, "Content Access Error");
        assert_eq!(category.items.len(), 1);
        assert_eq!(category.items[0].status, CheckStatus::Fail);
        assert_eq!(category.items[0].points, 0);
    }

    #[test]
    fn category_titles_and_order_are_fixed() {
        let doc = Document::from("<html><head></head><body></body></html>");
        let signals = PageSignals::from_document(&doc);
        let opts = AuditOptions::default();

        let with_keyword = run_all(&signals, "https://example.com", Some("pizza"), None, &opts);
        let without_keyword = run_all(&signals, "https://example.com", None, None, &opts);

        let titles: Vec<&str> = with_keyword.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "URL Structure",
                "Title & Meta Tags",
                "Headings & Content",
                "Images",
                "Technical SEO",
                "Content Analysis",
            ]
        );
        let titles_without: Vec<&str> = without_keyword.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, titles_without);
    }

    #[test]
    fn omitting_keyword_removes_exactly_keyword_items() {
        let html = r#"<html><head><title>Best Pizza Recipe</title>
            <meta name="description" content="A guide."></head>
            <body><h1>Best Pizza Recipe</h1><p>words</p>
            <img src="a.jpg" alt="pizza"></body></html>"#;
        let doc = Document::from(html);
        let signals = PageSignals::from_document(&doc);
        let opts = AuditOptions::default();

        let with_keyword = run_all(&signals, "https://example.com/pizza", Some("pizza"), None, &opts);
        let without_keyword = run_all(&signals, "https://example.com/pizza", None, None, &opts);

        for (with_kw, without_kw) in with_keyword.iter().zip(&without_keyword) {
            let kw_items: Vec<&str> = with_kw
                .items
                .iter()
                .filter(|i| i.name.to_lowercase().contains("keyword"))
                .map(|i| i.name.as_str())
                .collect();
            let remaining: Vec<&str> = with_kw
                .items
                .iter()
                .filter(|i| !i.name.to_lowercase().contains("keyword"))
                .map(|i| i.name.as_str())
                .collect();
            let structural: Vec<&str> =
                without_kw.items.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(remaining, structural, "category {}", with_kw.title);
            for name in kw_items {
                assert!(!structural.contains(&name));
            }
        }
    }

    #[test]
    fn preview_truncates_long_text() {
        let long = "x".repeat(300);
        let shortened = preview(&long);
        assert!(shortened.ends_with("..."));
        assert!(shortened.chars().count() <= 123);
    }
}
