//! Title and meta description rules.

use crate::options::AuditOptions;
use crate::relevance::{keyword_match, KeywordMatch};
use crate::result::{Category, CheckItem, CheckStatus};
use crate::signals::PageSignals;

/// Target window for title length, in characters.
const TITLE_MIN: usize = 30;
const TITLE_MAX: usize = 60;
/// Tolerance band around the title window that only warns.
const TITLE_SLACK: usize = 10;

/// Target window for meta description length, in characters.
const DESCRIPTION_MIN: usize = 120;
const DESCRIPTION_MAX: usize = 160;
/// Tolerance band around the description window that only warns.
const DESCRIPTION_SLACK: usize = 40;

/// Evaluate the title and meta tag category.
#[must_use]
pub fn check(signals: &PageSignals, keyword: Option<&str>, opts: &AuditOptions) -> Category {
    let title = signals.title.as_deref().unwrap_or_default();
    let description = signals.description().unwrap_or_default();

    let mut items = vec![
        title_presence_item(signals, opts),
        length_item(
            "Title Length",
            title,
            TITLE_MIN,
            TITLE_MAX,
            TITLE_SLACK,
            opts.weights.title_length,
            "Titles in this range display fully in search results",
        ),
        description_presence_item(signals, opts),
        length_item(
            "Meta Description Length",
            description,
            DESCRIPTION_MIN,
            DESCRIPTION_MAX,
            DESCRIPTION_SLACK,
            opts.weights.meta_description_length,
            "Descriptions in this range display fully and invite clicks",
        ),
    ];

    if let Some(keyword) = keyword {
        items.insert(
            2,
            super::keyword_presence_item(
                "Keyword in Title",
                title,
                keyword,
                opts.weights.keyword_in_title,
                "title",
                "The title is the strongest on-page relevance signal",
            ),
        );
        if let Some(position) = keyword_position_item(title, keyword, opts) {
            items.insert(3, position);
        }
        items.push(super::keyword_presence_item(
            "Keyword in Description",
            description,
            keyword,
            opts.weights.keyword_in_description,
            "meta description",
            "Matched phrases are bolded in search snippets",
        ));
    }

    Category {
        title: "Title & Meta Tags".to_string(),
        items,
    }
}

fn title_presence_item(signals: &PageSignals, opts: &AuditOptions) -> CheckItem {
    match &signals.title {
        Some(title) => CheckItem::new(
            "Title Tag",
            CheckStatus::Pass,
            "Title tag found",
            opts.weights.title_tag,
        )
        .with_details(
            super::preview(title),
            "A unique, descriptive title tag",
            "The title anchors the page's search snippet",
        ),
        None => CheckItem::new(
            "Title Tag",
            CheckStatus::Fail,
            "Page is missing a title tag",
            opts.weights.title_tag,
        )
        .with_details(
            "No title tag",
            "A unique, descriptive title tag",
            "The title anchors the page's search snippet",
        ),
    }
}

fn description_presence_item(signals: &PageSignals, opts: &AuditOptions) -> CheckItem {
    match signals.description() {
        Some(description) => CheckItem::new(
            "Meta Description",
            CheckStatus::Pass,
            "Meta description found",
            opts.weights.meta_description,
        )
        .with_details(
            super::preview(description),
            "A compelling meta description",
            "The description is the page's pitch in search results",
        ),
        None => CheckItem::new(
            "Meta Description",
            CheckStatus::Fail,
            "Page is missing a meta description",
            opts.weights.meta_description,
        )
        .with_details(
            "No meta description",
            "A compelling meta description",
            "The description is the page's pitch in search results",
        ),
    }
}

/// Shared length rule: inside the window passes, inside the slack band
/// warns, everything else (including absence) fails.
fn length_item(
    name: &str,
    text: &str,
    min: usize,
    max: usize,
    slack: usize,
    points: u32,
    explanation: &str,
) -> CheckItem {
    let length = text.chars().count();
    let (status, message) = if length == 0 {
        (
            CheckStatus::Fail,
            format!("Nothing to measure (recommended: {min}-{max} characters)"),
        )
    } else if (min..=max).contains(&length) {
        (CheckStatus::Pass, format!("{length} characters"))
    } else if (min.saturating_sub(slack)..=max + slack).contains(&length) {
        let verdict = if length < min { "short" } else { "long" };
        (
            CheckStatus::Warning,
            format!("Slightly too {verdict} ({length} characters, recommended: {min}-{max})"),
        )
    } else {
        let verdict = if length < min { "short" } else { "long" };
        (
            CheckStatus::Fail,
            format!("Too {verdict} ({length} characters, recommended: {min}-{max})"),
        )
    };

    CheckItem::new(name, status, message, points).with_details(
        format!("{length} characters"),
        format!("{min}-{max} characters"),
        explanation,
    )
}

/// Reward the keyword sitting in the front half of the title.
///
/// Only emitted when the exact phrase is present; partial matches carry
/// no meaningful position.
fn keyword_position_item(title: &str, keyword: &str, opts: &AuditOptions) -> Option<CheckItem> {
    if keyword_match(title, keyword) != KeywordMatch::Exact {
        return None;
    }

    let title_lower = title.to_lowercase();
    let keyword_lower = keyword.trim().to_lowercase();
    let index = title_lower.find(&keyword_lower)?;
    let front_half = index <= title_lower.len() / 2;

    let (status, message) = if front_half {
        (
            CheckStatus::Pass,
            "Keyword appears near the start of the title".to_string(),
        )
    } else {
        (
            CheckStatus::Warning,
            "Keyword appears late in the title".to_string(),
        )
    };

    Some(
        CheckItem::new("Keyword Position", status, message, opts.weights.keyword_position)
            .with_details(
                super::preview(title),
                "Keyword within the first half of the title",
                "Early placement carries more weight with readers and rankers",
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn signals(html: &str) -> PageSignals {
        PageSignals::from_document(&Document::from(html))
    }

    fn opts() -> AuditOptions {
        AuditOptions::default()
    }

    #[test]
    fn well_formed_head_passes_structural_rules() {
        let html = format!(
            r#"<head><title>Best Pizza Recipe for Busy Weeknights</title>
            <meta name="description" content="{}"></head>"#,
            "A thorough pizza recipe guide for beginners covering dough preparation, sauce making, topping choices and baking techniques step by step."
        );
        let category = check(&signals(&html), None, &opts());

        assert_eq!(category.items.len(), 4);
        assert!(category.items.iter().all(|i| i.status == CheckStatus::Pass),
            "{:?}", category.items.iter().map(|i| (&i.name, i.status)).collect::<Vec<_>>());
    }

    #[test]
    fn missing_title_fails_presence_and_length() {
        let category = check(&signals("<body><p>x</p></body>"), None, &opts());
        assert_eq!(category.items[0].status, CheckStatus::Fail);
        assert_eq!(category.items[1].status, CheckStatus::Fail);
    }

    #[test]
    fn slightly_short_title_warns() {
        // 23 chars: inside the slack band below the 30-char minimum
        let html = "<head><title>Quick Pizza Dough Guide</title></head>";
        let category = check(&signals(html), None, &opts());
        assert_eq!(category.items[1].name, "Title Length");
        assert_eq!(category.items[1].status, CheckStatus::Warning);
    }

    #[test]
    fn keyword_items_use_three_tiers() {
        let html = "<head><title>Best Pizza Recipe Around</title></head>";
        let s = signals(html);

        let exact = check(&s, Some("pizza recipe"), &opts());
        let item = exact.items.iter().find(|i| i.name == "Keyword in Title").unwrap();
        assert_eq!(item.status, CheckStatus::Pass);

        let partial = check(&s, Some("recipe for pizza"), &opts());
        let item = partial.items.iter().find(|i| i.name == "Keyword in Title").unwrap();
        assert_eq!(item.status, CheckStatus::Warning);

        let absent = check(&s, Some("chocolate cake"), &opts());
        let item = absent.items.iter().find(|i| i.name == "Keyword in Title").unwrap();
        assert_eq!(item.status, CheckStatus::Fail);
    }

    #[test]
    fn keyword_position_rewards_early_placement() {
        let early = "<head><title>Pizza Recipe for Weeknight Dinners</title></head>";
        let category = check(&signals(early), Some("pizza recipe"), &opts());
        let item = category.items.iter().find(|i| i.name == "Keyword Position").unwrap();
        assert_eq!(item.status, CheckStatus::Pass);

        let late = "<head><title>A Long Story About My Favorite Pizza Recipe</title></head>";
        let category = check(&signals(late), Some("pizza recipe"), &opts());
        let item = category.items.iter().find(|i| i.name == "Keyword Position").unwrap();
        assert_eq!(item.status, CheckStatus::Warning);
    }

    #[test]
    fn keyword_position_omitted_without_exact_match() {
        let html = "<head><title>Recipe Ideas Featuring Pizza</title></head>";
        let category = check(&signals(html), Some("pizza recipe"), &opts());
        assert!(category.items.iter().all(|i| i.name != "Keyword Position"));
    }

    #[test]
    fn description_keyword_checked_against_meta_content() {
        let html = r#"<head><title>Pizza</title>
            <meta name="description" content="Our pizza recipe uses a cold-fermented dough."></head>"#;
        let category = check(&signals(html), Some("pizza recipe"), &opts());
        let item = category
            .items
            .iter()
            .find(|i| i.name == "Keyword in Description")
            .unwrap();
        assert_eq!(item.status, CheckStatus::Pass);
    }
}
