//! Heading structure rules.

use crate::options::AuditOptions;
use crate::result::{Category, CheckItem, CheckStatus};
use crate::signals::PageSignals;

/// Evaluate the headings category.
#[must_use]
pub fn check(signals: &PageSignals, keyword: Option<&str>, opts: &AuditOptions) -> Category {
    let mut items = vec![h1_presence_item(signals, opts)];

    if let Some(keyword) = keyword {
        items.push(super::keyword_presence_item(
            "Keyword in H1",
            &signals.headings[0].join(" "),
            keyword,
            opts.weights.keyword_in_h1,
            "H1 heading",
            "The main heading should restate the page's target phrase",
        ));
    }

    items.push(hierarchy_item(signals, opts));
    items.push(subheading_item(signals, opts));

    if let Some(keyword) = keyword {
        let subheadings: Vec<String> = signals.headings[1]
            .iter()
            .chain(&signals.headings[2])
            .cloned()
            .collect();
        items.push(super::keyword_presence_item(
            "Keyword in Subheadings",
            &subheadings.join(" "),
            keyword,
            opts.weights.keyword_in_subheadings,
            "H2/H3 subheadings",
            "Subheadings carrying the phrase signal thorough topic coverage",
        ));
    }

    Category {
        title: "Headings & Content".to_string(),
        items,
    }
}

fn h1_presence_item(signals: &PageSignals, opts: &AuditOptions) -> CheckItem {
    let count = signals.headings[0].len();
    let (status, message) = match count {
        0 => (CheckStatus::Fail, "Page is missing an H1 heading".to_string()),
        1 => (CheckStatus::Pass, "Exactly one H1 heading found".to_string()),
        n => (
            CheckStatus::Warning,
            format!("Page has {n} H1 headings (recommended: exactly one)"),
        ),
    };

    CheckItem::new("H1 Heading", status, message, opts.weights.h1_presence).with_details(
        format!("{count} H1 heading(s)"),
        "Exactly one H1 heading",
        "A single H1 gives the page one unambiguous topic",
    )
}

/// Weak ordering proxy for heading hierarchy: an H1 must exist and,
/// wherever H2/H3 are used, the level above must not out-count them.
fn hierarchy_item(signals: &PageSignals, opts: &AuditOptions) -> CheckItem {
    let h1 = signals.headings[0].len();
    let h2 = signals.headings[1].len();
    let h3 = signals.headings[2].len();

    let (status, message) = if h1 == 0 {
        (
            CheckStatus::Fail,
            "No H1 heading to anchor the hierarchy".to_string(),
        )
    } else if (h2 > 0 && h1 > h2) || (h3 > 0 && h2 > h3) {
        (
            CheckStatus::Warning,
            "Heading levels look unbalanced (a level out-counts the one below it)".to_string(),
        )
    } else {
        (
            CheckStatus::Pass,
            "Heading levels form a plausible hierarchy".to_string(),
        )
    };

    CheckItem::new("Heading Hierarchy", status, message, opts.weights.heading_hierarchy)
        .with_details(
            format!("H1: {h1}, H2: {h2}, H3: {h3}"),
            "One H1 with progressively more numerous subheadings",
            "A coherent outline helps crawlers map the page's structure",
        )
}

fn subheading_item(signals: &PageSignals, opts: &AuditOptions) -> CheckItem {
    let h2 = signals.headings[1].len();
    let (status, message) = if h2 > 0 {
        (CheckStatus::Pass, format!("{h2} H2 subheading(s) found"))
    } else {
        (
            CheckStatus::Warning,
            "No H2 subheadings found".to_string(),
        )
    };

    CheckItem::new("Subheading Usage", status, message, opts.weights.subheading_usage)
        .with_details(
            format!("{h2} H2 subheading(s)"),
            "At least one H2 subheading",
            "Subheadings break content into scannable sections",
        )
}
