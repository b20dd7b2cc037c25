//! Result types for audit output.
//!
//! This module defines the structured output of a page audit: individual
//! check items, their grouping into categories, the keyword density report,
//! and the top-level analysis result.

use std::collections::HashMap;

use serde::Serialize;

/// Verdict of a single SEO rule.
///
/// `Info` items are informational only and are excluded from scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The rule is fully satisfied.
    Pass,
    /// The rule is not satisfied.
    Fail,
    /// The rule is partially satisfied; earns reduced points.
    Warning,
    /// Informational only; carries no points.
    Info,
}

/// Evidence attached to an actionable check item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckDetails {
    /// What was actually found on the page.
    pub found: String,
    /// The ideal condition the rule checks for.
    pub expected: String,
    /// Why this rule matters.
    pub explanation: String,
}

/// One evaluated SEO rule.
///
/// Created once per analysis run inside a single category function and
/// immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckItem {
    /// Short rule label, e.g. "Keyword in Title".
    pub name: String,
    /// Verdict for this rule.
    pub status: CheckStatus,
    /// Human-readable explanation of the verdict.
    pub message: String,
    /// Weight of this rule in the final score.
    pub points: u32,
    /// Raw evidence, present when the rule is actionable.
    pub details: Option<CheckDetails>,
}

impl CheckItem {
    /// Create a check item without evidence details.
    #[must_use]
    pub fn new(name: &str, status: CheckStatus, message: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            points,
            details: None,
        }
    }

    /// Attach evidence details to this item.
    #[must_use]
    pub fn with_details(
        mut self,
        found: impl Into<String>,
        expected: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        self.details = Some(CheckDetails {
            found: found.into(),
            expected: expected.into(),
            explanation: explanation.into(),
        });
        self
    }
}

/// A group of related check items.
///
/// Order of categories reflects report presentation but is not
/// semantically load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Category title, e.g. "Headings & Content".
    pub title: String,
    /// The evaluated rules in this category.
    pub items: Vec<CheckItem>,
}

/// Page metadata surfaced alongside the score for presentation layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Page title, if present.
    pub title: Option<String>,
    /// Meta description, if present.
    pub description: Option<String>,
    /// Canonical URL, if declared.
    pub canonical: Option<String>,
    /// Open Graph properties keyed by property name (`og:title`, ...).
    pub og_tags: HashMap<String, String>,
}

/// Top-level output of a page audit.
///
/// Invariant: when `content_fetched` is `false`, `categories` contains
/// exactly one category describing the access failure and `score` is 0.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Final weighted score, 0-100 (0-90 attainable given the curve).
    pub score: u32,
    /// All evaluated categories in presentation order.
    pub categories: Vec<Category>,
    /// Whether the page content was successfully retrieved.
    pub content_fetched: bool,
    /// Keyword importance tier ("high", "medium", "low", "none") when a
    /// keyword was supplied and content was fetched.
    pub relevance_tier: Option<String>,
    /// Extracted page metadata, when content was fetched.
    pub meta_data: Option<PageMeta>,
}

/// Keyword importance tier derived from density.
///
/// Ordered: `None < Low < Medium < High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    /// Keyword effectively absent (density below 0.1%).
    #[default]
    None,
    /// Density 0.1% - 0.5%.
    Low,
    /// Density 0.5% - 1.0%, or above the 3.0% stuffing threshold.
    Medium,
    /// Density 1.0% - 3.0%, the optimal band.
    High,
}

impl Importance {
    /// Lowercase label matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Weighted keyword density report for a document.
///
/// Derived value, recomputed fresh on every call and never mutated after
/// computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordDensityResult {
    /// Weighted density as a percentage of total words.
    pub density: f64,
    /// Raw (unweighted) total of all match classes.
    pub count: usize,
    /// Whole-phrase, whole-word occurrences of the literal keyword.
    pub exact_match_count: usize,
    /// Occurrences of reordered multi-word permutations.
    pub variation_match_count: usize,
    /// Prefix-based matches of individual keyword tokens.
    pub partial_match_count: usize,
    /// Occurrences of dictionary-mapped synonym terms.
    pub synonym_match_count: usize,
    /// Whitespace-split word count of the document text.
    pub total_words: usize,
    /// Importance tier derived from the density thresholds.
    pub importance: Importance,
    /// Contextual snippets around matches, for the details view.
    pub occurrences_in_context: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_item_builder_attaches_details() {
        let item = CheckItem::new("Title Tag", CheckStatus::Pass, "Title found", 6)
            .with_details("My Page", "A descriptive title", "Titles anchor search snippets");

        assert_eq!(item.name, "Title Tag");
        assert_eq!(item.status, CheckStatus::Pass);
        assert_eq!(item.points, 6);
        let details = item.details.unwrap();
        assert_eq!(details.found, "My Page");
    }

    #[test]
    fn importance_tiers_are_ordered() {
        assert!(Importance::None < Importance::Low);
        assert!(Importance::Low < Importance::Medium);
        assert!(Importance::Medium < Importance::High);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&CheckStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn importance_labels_match_serialized_form() {
        let json = serde_json::to_string(&Importance::High).unwrap();
        assert_eq!(json, format!("\"{}\"", Importance::High.as_str()));
    }
}
