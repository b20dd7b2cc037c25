//! URL structure rules.

use crate::options::AuditOptions;
use crate::patterns::{SLUG_SEPARATOR, UNREADABLE_PATH};
use crate::result::{Category, CheckItem, CheckStatus};
use crate::url_utils;

/// Target maximum path length in characters.
const MAX_PATH_LEN: usize = 75;
/// Paths up to this length only warn.
const WARN_PATH_LEN: usize = 100;

/// Evaluate the URL structure category.
#[must_use]
pub fn check(url: &str, keyword: Option<&str>, opts: &AuditOptions) -> Category {
    let path = url_utils::url_path(url);
    let mut items = vec![path_length_item(&path, opts), readability_item(&path, opts)];

    if let Some(keyword) = keyword {
        items.push(keyword_in_url_item(&path, keyword, opts));
    }

    Category {
        title: "URL Structure".to_string(),
        items,
    }
}

fn path_length_item(path: &str, opts: &AuditOptions) -> CheckItem {
    let length = path.chars().count();
    let (status, message) = if length <= MAX_PATH_LEN {
        (
            CheckStatus::Pass,
            format!("URL path is {length} characters"),
        )
    } else if length <= WARN_PATH_LEN {
        (
            CheckStatus::Warning,
            format!("URL path is {length} characters (recommended: {MAX_PATH_LEN} or fewer)"),
        )
    } else {
        (
            CheckStatus::Fail,
            format!("URL path is too long ({length} characters, recommended: {MAX_PATH_LEN} or fewer)"),
        )
    };

    CheckItem::new("URL Length", status, message, opts.weights.url_length).with_details(
        format!("{length} characters"),
        format!("{MAX_PATH_LEN} characters or fewer"),
        "Short URLs are easier to read, share, and display in search results",
    )
}

fn readability_item(path: &str, opts: &AuditOptions) -> CheckItem {
    let readable = !UNREADABLE_PATH.is_match(path);
    let (status, message) = if readable {
        (
            CheckStatus::Pass,
            "URL path is lowercase and hyphen-separated".to_string(),
        )
    } else {
        (
            CheckStatus::Warning,
            "URL path contains uppercase letters, underscores, or encoded characters".to_string(),
        )
    };

    CheckItem::new("URL Readability", status, message, opts.weights.url_readability).with_details(
        path.to_string(),
        "Lowercase words separated by hyphens",
        "Readable slugs help users and crawlers understand the page topic",
    )
}

fn keyword_in_url_item(path: &str, keyword: &str, opts: &AuditOptions) -> CheckItem {
    // Separators become spaces so "pizza-recipe" matches "pizza recipe".
    let slug = SLUG_SEPARATOR.replace_all(path, " ");
    super::keyword_presence_item(
        "Keyword in URL",
        &slug,
        keyword,
        opts.weights.keyword_in_url,
        "URL slug",
        "URLs containing the target phrase reinforce topical relevance",
    )
}
