//! Body content rules: length, keyword density, early keyword placement.

use crate::options::AuditOptions;
use crate::relevance::{self, KeywordMatch};
use crate::result::{Category, CheckItem, CheckStatus, Importance, KeywordDensityResult};
use crate::signals::PageSignals;

/// Minimum word count for substantive content.
const MIN_WORDS: usize = 300;
/// Word counts at or above this only warn.
const WARN_WORDS: usize = 150;

/// How much of the document counts as "early" for keyword placement.
const EARLY_WORD_WINDOW: usize = 100;

/// Stuffing threshold matching the density engine's demotion point.
const STUFFING_DENSITY: f64 = 3.0;

/// Evaluate the content category.
///
/// `density` is the precomputed report for the supplied keyword; when a
/// keyword is given without one, the report is computed here.
#[must_use]
pub fn check(
    signals: &PageSignals,
    keyword: Option<&str>,
    density: Option<&KeywordDensityResult>,
    opts: &AuditOptions,
) -> Category {
    let mut items = vec![word_count_item(signals, opts)];

    if let Some(keyword) = keyword {
        let computed;
        let report = match density {
            Some(report) => report,
            None => {
                computed = relevance::calculate_keyword_density(&signals.body_text, keyword, opts);
                &computed
            }
        };
        items.push(density_item(keyword, report, opts));
        items.push(early_keyword_item(signals, keyword, opts));
    }

    Category {
        title: "Content Analysis".to_string(),
        items,
    }
}

fn word_count_item(signals: &PageSignals, opts: &AuditOptions) -> CheckItem {
    let words = signals.word_count;
    let (status, message) = if words >= MIN_WORDS {
        (CheckStatus::Pass, format!("{words} words of content"))
    } else if words >= WARN_WORDS {
        (
            CheckStatus::Warning,
            format!("Thin content ({words} words, recommended: {MIN_WORDS}+)"),
        )
    } else {
        (
            CheckStatus::Fail,
            format!("Very thin content ({words} words, recommended: {MIN_WORDS}+)"),
        )
    };

    CheckItem::new("Content Length", status, message, opts.weights.word_count).with_details(
        format!("{words} words"),
        format!("{MIN_WORDS} words or more"),
        "Substantive pages answer queries more completely than thin ones",
    )
}

fn density_item(keyword: &str, report: &KeywordDensityResult, opts: &AuditOptions) -> CheckItem {
    let density = report.density;
    let (status, message) = match report.importance {
        Importance::High => (
            CheckStatus::Pass,
            format!("Keyword density {density:.2}% is in the optimal range"),
        ),
        Importance::Medium if density > STUFFING_DENSITY => (
            CheckStatus::Warning,
            format!("Keyword density {density:.2}% looks like keyword stuffing"),
        ),
        Importance::Medium | Importance::Low => (
            CheckStatus::Warning,
            format!("Keyword density {density:.2}% is below the optimal range"),
        ),
        Importance::None => (
            CheckStatus::Fail,
            format!("Keyword \"{keyword}\" is effectively absent from the content"),
        ),
    };

    let found = format!(
        "{:.2}% density ({} exact, {} variation, {} synonym, {} partial across {} words)",
        density,
        report.exact_match_count,
        report.variation_match_count,
        report.synonym_match_count,
        report.partial_match_count,
        report.total_words,
    );

    CheckItem::new("Keyword Density", status, message, opts.weights.keyword_density)
        .with_details(
            found,
            "Density between 1% and 3%",
            "Natural repetition signals relevance; stuffing triggers penalties",
        )
}

fn early_keyword_item(signals: &PageSignals, keyword: &str, opts: &AuditOptions) -> CheckItem {
    let opening: Vec<&str> = signals
        .body_text
        .split_whitespace()
        .take(EARLY_WORD_WINDOW)
        .collect();
    let opening = opening.join(" ");

    let matched = relevance::keyword_match(&opening, keyword);
    let (status, message) = match matched {
        KeywordMatch::Exact => (
            CheckStatus::Pass,
            format!("Keyword appears within the first {EARLY_WORD_WINDOW} words"),
        ),
        KeywordMatch::Partial => (
            CheckStatus::Warning,
            format!("Keyword only partially appears within the first {EARLY_WORD_WINDOW} words"),
        ),
        KeywordMatch::None => (
            CheckStatus::Fail,
            format!("Keyword missing from the first {EARLY_WORD_WINDOW} words"),
        ),
    };

    CheckItem::new("Keyword Placement", status, message, opts.weights.keyword_early)
        .with_details(
            super::preview(&opening),
            format!("\"{keyword}\" within the opening {EARLY_WORD_WINDOW} words"),
            "Early mention confirms the page delivers what its title promises",
        )
}
