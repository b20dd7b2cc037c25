//! Technical SEO rules: canonical, structured data, social tags, viewport.

use crate::options::AuditOptions;
use crate::result::{Category, CheckItem, CheckStatus};
use crate::signals::PageSignals;

/// The Open Graph properties a well-tagged page carries.
const CORE_OG_PROPERTIES: [&str; 3] = ["og:title", "og:description", "og:image"];

/// Evaluate the technical category. No keyword rules live here.
#[must_use]
pub fn check(signals: &PageSignals, opts: &AuditOptions) -> Category {
    let items = vec![
        canonical_item(signals, opts),
        schema_item(signals, opts),
        open_graph_item(signals, opts),
        twitter_card_item(signals, opts),
        viewport_item(signals, opts),
    ];

    Category {
        title: "Technical SEO".to_string(),
        items,
    }
}

fn canonical_item(signals: &PageSignals, opts: &AuditOptions) -> CheckItem {
    match &signals.canonical {
        Some(href) => CheckItem::new(
            "Canonical Link",
            CheckStatus::Pass,
            "Canonical URL declared",
            opts.weights.canonical_link,
        )
        .with_details(
            href.clone(),
            "A canonical link element",
            "Canonical URLs prevent duplicate-content dilution",
        ),
        None => CheckItem::new(
            "Canonical Link",
            CheckStatus::Fail,
            "No canonical URL declared",
            opts.weights.canonical_link,
        )
        .with_details(
            "No canonical link element",
            "A canonical link element",
            "Canonical URLs prevent duplicate-content dilution",
        ),
    }
}

fn schema_item(signals: &PageSignals, opts: &AuditOptions) -> CheckItem {
    let (status, message) = if signals.has_schema {
        (
            CheckStatus::Pass,
            "Schema.org structured data found".to_string(),
        )
    } else {
        (
            CheckStatus::Warning,
            "No structured data found".to_string(),
        )
    };

    CheckItem::new("Schema Markup", status, message, opts.weights.schema_markup).with_details(
        if signals.has_schema {
            "JSON-LD or microdata present"
        } else {
            "No JSON-LD script or microdata attributes"
        },
        "Schema.org markup describing the page content",
        "Structured data unlocks rich results in search listings",
    )
}

fn open_graph_item(signals: &PageSignals, opts: &AuditOptions) -> CheckItem {
    let present: Vec<&str> = CORE_OG_PROPERTIES
        .iter()
        .filter(|p| signals.og.contains_key(**p))
        .copied()
        .collect();

    let (status, message) = if present.len() == CORE_OG_PROPERTIES.len() {
        (
            CheckStatus::Pass,
            "Core Open Graph tags present".to_string(),
        )
    } else if present.is_empty() {
        (CheckStatus::Fail, "No Open Graph tags found".to_string())
    } else {
        (
            CheckStatus::Warning,
            format!(
                "Open Graph incomplete ({} of {} core tags)",
                present.len(),
                CORE_OG_PROPERTIES.len()
            ),
        )
    };

    CheckItem::new("Open Graph Tags", status, message, opts.weights.open_graph).with_details(
        if present.is_empty() {
            "No og:* meta tags".to_string()
        } else {
            present.join(", ")
        },
        CORE_OG_PROPERTIES.join(", "),
        "Open Graph tags control how shares render on social platforms",
    )
}

/// Twitter Cards are an optional signal: absence is informational, not a
/// scored failure.
fn twitter_card_item(signals: &PageSignals, opts: &AuditOptions) -> CheckItem {
    if signals.has_twitter_card {
        CheckItem::new(
            "Twitter Card",
            CheckStatus::Pass,
            "Twitter Card tags present",
            opts.weights.twitter_card,
        )
    } else {
        CheckItem::new(
            "Twitter Card",
            CheckStatus::Info,
            "No Twitter Card tags found (optional)",
            opts.weights.twitter_card,
        )
    }
}

fn viewport_item(signals: &PageSignals, opts: &AuditOptions) -> CheckItem {
    let (status, message) = if signals.has_viewport {
        (CheckStatus::Pass, "Viewport meta tag present".to_string())
    } else {
        (CheckStatus::Fail, "No viewport meta tag found".to_string())
    };

    CheckItem::new("Viewport Meta", status, message, opts.weights.viewport_meta).with_details(
        if signals.has_viewport {
            "Viewport meta tag declared"
        } else {
            "No viewport meta tag"
        },
        "A responsive viewport declaration",
        "Mobile-friendly rendering is a baseline ranking requirement",
    )
}
