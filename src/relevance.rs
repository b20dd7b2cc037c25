//! Keyword relevance engine.
//!
//! Determines whether a target phrase is represented in a text fragment
//! (exact or token-level matching) and computes a weighted keyword density
//! across four match classes: exact phrase, reordered variations, domain
//! synonyms, and token-prefix partials.
//!
//! Everything here is pure and deterministic: identical inputs produce
//! identical results, and nothing is cached between calls.

use std::collections::HashSet;

use crate::options::AuditOptions;
use crate::patterns::{whole_word_pattern, WHITESPACE_NORMALIZE};
use crate::result::{Importance, KeywordDensityResult};

/// Match class weights for the density calculation.
const EXACT_WEIGHT: f64 = 1.0;
const VARIATION_WEIGHT: f64 = 0.7;
const SYNONYM_WEIGHT: f64 = 0.4;
const PARTIAL_WEIGHT: f64 = 0.3;

/// Context snippet limits and radius for the details view.
const MAX_EXACT_SNIPPETS: usize = 5;
const MAX_VARIATION_SNIPPETS: usize = 3;
const SNIPPET_RADIUS: usize = 30;

/// Tokens this short carry no signal for token-level matching.
const MIN_SIGNIFICANT_TOKEN_LEN: usize = 3;

/// How strongly a text fragment matches a target keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordMatch {
    /// The literal phrase appears in the text.
    Exact,
    /// The keyword's significant tokens appear, possibly reordered or
    /// with one token missing (for phrases of three or more tokens).
    Partial,
    /// The keyword is not represented.
    None,
}

/// Classify how well `text` represents `keyword`.
///
/// An empty keyword short-circuits to `KeywordMatch::None` without
/// scanning. Matching is case-insensitive and whitespace-normalized.
#[must_use]
pub fn keyword_match(text: &str, keyword: &str) -> KeywordMatch {
    let keyword = normalize(keyword);
    if keyword.is_empty() || text.is_empty() {
        return KeywordMatch::None;
    }

    let text = normalize(text);
    if text.contains(&keyword) {
        return KeywordMatch::Exact;
    }

    let tokens = significant_tokens(&keyword);
    if tokens.len() > 1 {
        let present = tokens.iter().filter(|t| text.contains(t.as_str())).count();
        if present == tokens.len() {
            return KeywordMatch::Partial;
        }
        // Longer phrases tolerate minor phrasing drift: one token may be missing.
        if tokens.len() > 2 && present + 1 >= tokens.len() {
            return KeywordMatch::Partial;
        }
    }

    KeywordMatch::None
}

/// Compute the weighted keyword density of a plain-text document.
///
/// `text` is expected to be tag-stripped page text; `keyword` the target
/// phrase. The result combines four match classes with fixed weights
/// (exact 1.0, variation 0.7, synonym 0.4, partial 0.3), expresses the
/// total as a percentage of the word count, and derives an importance
/// tier from fixed density thresholds. Densities above 3.0% are demoted
/// to `Medium` as probable keyword stuffing.
#[must_use]
pub fn calculate_keyword_density(
    text: &str,
    keyword: &str,
    opts: &AuditOptions,
) -> KeywordDensityResult {
    let text = normalize(text);
    let keyword = normalize(keyword);

    let total_words = text.split_whitespace().count();
    if keyword.is_empty() || total_words == 0 {
        return KeywordDensityResult {
            total_words,
            ..KeywordDensityResult::default()
        };
    }

    let mut snippets = Vec::new();

    // 1. Exact phrase occurrences (whole-word, whitespace-normalized).
    let exact_spans = phrase_spans(&text, &keyword);
    let exact_count = exact_spans.len();
    for (start, end) in exact_spans.iter().take(MAX_EXACT_SNIPPETS) {
        snippets.push(snippet_around(&text, *start, *end));
    }

    // 2. Reordered variations of multi-word phrases.
    let tokens: Vec<&str> = keyword.split(' ').collect();
    let mut variation_count = 0;
    let mut variation_snippets = 0;
    if tokens.len() > 1 && tokens.len() <= opts.max_variation_tokens {
        for variant in reorder_variants(&tokens) {
            let spans = phrase_spans(&text, &variant);
            variation_count += spans.len();
            for (start, end) in spans {
                if variation_snippets < MAX_VARIATION_SNIPPETS {
                    snippets.push(snippet_around(&text, start, end));
                    variation_snippets += 1;
                }
            }
        }
    }

    // 3. Domain synonyms not already part of the keyword.
    let token_set: HashSet<&str> = tokens.iter().copied().collect();
    let mut synonym_count = 0;
    for (term, syns) in &opts.synonyms {
        if !token_set.contains(term.as_str()) {
            continue;
        }
        for syn in syns {
            if !token_set.contains(syn.as_str()) {
                synonym_count += phrase_spans(&text, syn).len();
            }
        }
    }

    // 4. Prefix partials of significant tokens, net of exact matches.
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut partial_count = 0;
    for token in significant_tokens(&keyword) {
        let prefixed = words.iter().filter(|w| w.starts_with(token.as_str())).count();
        partial_count += prefixed.saturating_sub(exact_count);
    }

    let weighted = (exact_count as f64).mul_add(
        EXACT_WEIGHT,
        (variation_count as f64).mul_add(
            VARIATION_WEIGHT,
            (synonym_count as f64).mul_add(SYNONYM_WEIGHT, partial_count as f64 * PARTIAL_WEIGHT),
        ),
    );
    let density = weighted / total_words as f64 * 100.0;

    KeywordDensityResult {
        density,
        count: exact_count + variation_count + synonym_count + partial_count,
        exact_match_count: exact_count,
        variation_match_count: variation_count,
        partial_match_count: partial_count,
        synonym_match_count: synonym_count,
        total_words,
        importance: importance_for_density(density),
        occurrences_in_context: snippets,
    }
}

/// Map a density percentage to its importance tier.
///
/// Thresholds: `<0.1 -> None`, `<0.5 -> Low`, `<=1.0 -> Medium`,
/// `<=3.0 -> High`, `>3.0 -> Medium` (stuffing demotion).
#[must_use]
pub fn importance_for_density(density: f64) -> Importance {
    if density < 0.1 {
        Importance::None
    } else if density < 0.5 {
        Importance::Low
    } else if density <= 1.0 {
        Importance::Medium
    } else if density <= 3.0 {
        Importance::High
    } else {
        Importance::Medium
    }
}

/// Lowercase and collapse whitespace.
fn normalize(text: &str) -> String {
    WHITESPACE_NORMALIZE
        .replace_all(text.trim(), " ")
        .to_lowercase()
}

/// Significant tokens of a phrase: longer than three characters.
fn significant_tokens(keyword: &str) -> Vec<String> {
    keyword
        .split_whitespace()
        .filter(|t| t.len() > MIN_SIGNIFICANT_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Byte spans of whole-word occurrences of `phrase` in `text`.
fn phrase_spans(text: &str, phrase: &str) -> Vec<(usize, usize)> {
    match whole_word_pattern(phrase) {
        Some(re) => re.find_iter(text).map(|m| (m.start(), m.end())).collect(),
        None => Vec::new(),
    }
}

/// Every ordering produced by moving one token to the front or back,
/// excluding the original order and duplicates.
fn reorder_variants(tokens: &[&str]) -> Vec<String> {
    let original = tokens.join(" ");
    let mut variants = Vec::new();

    for i in 0..tokens.len() {
        let rest: Vec<&str> = tokens
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, t)| *t)
            .collect();

        let fronted = format!("{} {}", tokens[i], rest.join(" "));
        let backed = format!("{} {}", rest.join(" "), tokens[i]);

        for variant in [fronted, backed] {
            if variant != original && !variants.contains(&variant) {
                variants.push(variant);
            }
        }
    }

    variants
}

/// Extract a UTF-8-safe snippet around a match span.
fn snippet_around(text: &str, start: usize, end: usize) -> String {
    let mut lo = start.saturating_sub(SNIPPET_RADIUS);
    while !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (end + SNIPPET_RADIUS).min(text.len());
    while !text.is_char_boundary(hi) {
        hi += 1;
    }
    format!("...{}...", &text[lo..hi])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> AuditOptions {
        AuditOptions::default()
    }

    #[test]
    fn exact_substring_is_exact_match() {
        assert_eq!(
            keyword_match("The Best Pizza Recipe Guide", "pizza recipe"),
            KeywordMatch::Exact
        );
    }

    #[test]
    fn all_tokens_present_is_partial_match() {
        assert_eq!(
            keyword_match("a recipe for great pizza", "pizza recipe"),
            KeywordMatch::Partial
        );
    }

    #[test]
    fn long_phrases_tolerate_one_missing_token() {
        // "homemade" missing, "pizza" and "recipe" present
        assert_eq!(
            keyword_match("a recipe for great pizza", "homemade pizza recipe"),
            KeywordMatch::Partial
        );
    }

    #[test]
    fn two_token_phrase_requires_both_tokens() {
        assert_eq!(
            keyword_match("a recipe for great bread", "pizza recipe"),
            KeywordMatch::None
        );
    }

    #[test]
    fn empty_keyword_short_circuits() {
        assert_eq!(keyword_match("any text", ""), KeywordMatch::None);
        assert_eq!(keyword_match("any text", "   "), KeywordMatch::None);
        let result = calculate_keyword_density("some words here", "", &opts());
        assert_eq!(result.density, 0.0);
        assert_eq!(result.total_words, 3);
    }

    #[test]
    fn single_significant_token_never_partial_matches() {
        // "my" is below the significance threshold; only "pizza" remains,
        // and a single token never qualifies for partial matching.
        assert_eq!(keyword_match("fresh hot pizza daily", "my pizza"), KeywordMatch::None);
        assert_eq!(keyword_match("order my pizza today", "my pizza"), KeywordMatch::Exact);
    }

    #[test]
    fn density_counts_exact_matches() {
        let text = "pizza recipe one two three four five six seven eight nine ten \
                    pizza recipe more words here to pad out the total count now";
        let result = calculate_keyword_density(text, "pizza recipe", &opts());
        assert_eq!(result.exact_match_count, 2);
        assert_eq!(result.total_words, 24);
        assert!(result.density > 0.0);
    }

    #[test]
    fn density_counts_reordered_variations() {
        let text = "the recipe pizza fans love most of all time here today";
        let result = calculate_keyword_density(text, "pizza recipe", &opts());
        assert_eq!(result.exact_match_count, 0);
        assert_eq!(result.variation_match_count, 1);
    }

    #[test]
    fn density_counts_synonyms_from_dictionary() {
        let text = "search ranking matters for every page on the open web";
        let result = calculate_keyword_density(text, "seo tips", &opts());
        // "search" and "ranking" both map from "seo"
        assert_eq!(result.synonym_match_count, 2);
    }

    #[test]
    fn density_counts_prefix_partials() {
        let text = "pizzas are great and pizzerias sell them everywhere daily";
        let result = calculate_keyword_density(text, "pizza recipe", &opts());
        assert_eq!(result.exact_match_count, 0);
        // "pizzas" starts with the "pizza" token; "pizzerias" does not.
        assert_eq!(result.partial_match_count, 1);
    }

    #[test]
    fn variation_matching_skipped_beyond_token_cap() {
        let custom = AuditOptions {
            max_variation_tokens: 2,
            ..AuditOptions::default()
        };
        let text = "recipe pizza homemade is the best thing on earth today";
        let result = calculate_keyword_density(text, "homemade pizza recipe", &custom);
        assert_eq!(result.variation_match_count, 0);
    }

    #[test]
    fn importance_tiers_follow_thresholds() {
        assert_eq!(importance_for_density(0.05), Importance::None);
        assert_eq!(importance_for_density(0.3), Importance::Low);
        assert_eq!(importance_for_density(0.8), Importance::Medium);
        assert_eq!(importance_for_density(1.0), Importance::Medium);
        assert_eq!(importance_for_density(2.0), Importance::High);
        assert_eq!(importance_for_density(3.0), Importance::High);
        assert_eq!(importance_for_density(4.5), Importance::Medium);
    }

    #[test]
    fn density_tier_is_monotone_until_stuffing_threshold() {
        // Fixed 400-word document; raise exact occurrences and verify the
        // tier never decreases until density crosses 3.0%.
        let filler: Vec<String> = (0..400).map(|i| format!("word{i}")).collect();
        let mut previous = Importance::None;
        for occurrences in 0..=12 {
            let mut words = filler.clone();
            for _ in 0..occurrences {
                words.push("pizza".to_string());
                words.push("recipe".to_string());
            }
            let text = words.join(" ");
            let result = calculate_keyword_density(&text, "pizza recipe", &opts());
            if result.density <= 3.0 {
                assert!(
                    result.importance >= previous,
                    "tier regressed at {occurrences} occurrences"
                );
                previous = result.importance;
            } else {
                assert_eq!(result.importance, Importance::Medium);
            }
        }
    }

    #[test]
    fn context_snippets_are_capped() {
        let mut text = String::new();
        for i in 0..10 {
            text.push_str(&format!("filler{i} pizza recipe trailing{i} "));
        }
        let result = calculate_keyword_density(&text, "pizza recipe", &opts());
        assert_eq!(result.exact_match_count, 10);
        assert!(result.occurrences_in_context.len() <= MAX_EXACT_SNIPPETS + MAX_VARIATION_SNIPPETS);
        assert!(result.occurrences_in_context[0].contains("pizza recipe"));
    }

    #[test]
    fn snippets_respect_utf8_boundaries() {
        let text = "café déjà-vu résumé naïve pizza recipe crème brûlée soufflé";
        let result = calculate_keyword_density(text, "pizza recipe", &opts());
        assert_eq!(result.exact_match_count, 1);
        assert!(result.occurrences_in_context[0].contains("pizza recipe"));
    }

    #[test]
    fn reorder_variants_move_one_token() {
        let variants = reorder_variants(&["best", "pizza", "recipe"]);
        assert!(variants.contains(&"pizza best recipe".to_string()));
        assert!(variants.contains(&"best recipe pizza".to_string()));
        assert!(variants.contains(&"recipe best pizza".to_string()));
        assert!(!variants.contains(&"best pizza recipe".to_string()));
    }

    #[test]
    fn density_is_deterministic() {
        let text = "pizza recipe guide with search ranking words and pizzas galore";
        let first = calculate_keyword_density(text, "pizza recipe", &opts());
        let second = calculate_keyword_density(text, "pizza recipe", &opts());
        assert_eq!(first, second);
    }
}
