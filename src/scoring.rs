//! Weighted score aggregation with a fixed dampening curve.
//!
//! Consumes all check items from an audit run and produces the final
//! 0-100 score. Informational items carry no points; warnings earn a
//! fixed 30% of their weight; the raw percentage is curved by a uniform
//! 0.9 factor so top scores stay hard to reach (attainable range 0-90).

use crate::result::{CheckItem, CheckStatus};

/// Fraction of a rule's points earned by a `warning` verdict.
const WARNING_CREDIT: f64 = 0.3;

/// Uniform dampening factor applied to the raw percentage.
const CURVE_FACTOR: f64 = 0.9;

/// Aggregated scoring result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Final curved score, 0-90.
    pub score: u32,
    /// Points earned across all items (warnings at partial credit).
    pub earned_points: f64,
    /// Sum of points over all scorable (non-info) items.
    pub total_possible_points: u32,
}

/// Aggregate check items into the final SEO score.
///
/// `pass` earns full points, `warning` earns 30%, `fail` and `info` earn
/// nothing; `info` items are also excluded from the possible total. A run
/// with no scorable items yields a score of 0.
#[must_use]
pub fn calculate_seo_score(items: &[CheckItem]) -> ScoreBreakdown {
    let total_possible_points: u32 = items
        .iter()
        .filter(|item| item.status != CheckStatus::Info)
        .map(|item| item.points)
        .sum();

    let earned_points: f64 = items
        .iter()
        .map(|item| match item.status {
            CheckStatus::Pass => f64::from(item.points),
            CheckStatus::Warning => f64::from(item.points) * WARNING_CREDIT,
            CheckStatus::Fail | CheckStatus::Info => 0.0,
        })
        .sum();

    let raw_score = if total_possible_points == 0 {
        0.0
    } else {
        earned_points / f64::from(total_possible_points) * 100.0
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = (raw_score * CURVE_FACTOR).round() as u32;

    ScoreBreakdown {
        score,
        earned_points,
        total_possible_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(status: CheckStatus, points: u32) -> CheckItem {
        CheckItem::new("rule", status, "msg", points)
    }

    #[test]
    fn all_passing_caps_at_ninety() {
        let items = vec![item(CheckStatus::Pass, 10), item(CheckStatus::Pass, 5)];
        let breakdown = calculate_seo_score(&items);
        assert_eq!(breakdown.total_possible_points, 15);
        assert_eq!(breakdown.earned_points, 15.0);
        assert_eq!(breakdown.score, 90);
    }

    #[test]
    fn warnings_earn_partial_credit() {
        let items = vec![item(CheckStatus::Warning, 10)];
        let breakdown = calculate_seo_score(&items);
        assert_eq!(breakdown.earned_points, 3.0);
        // 3/10 * 100 * 0.9 = 27
        assert_eq!(breakdown.score, 27);
    }

    #[test]
    fn failures_earn_nothing_but_count_toward_total() {
        let items = vec![item(CheckStatus::Pass, 10), item(CheckStatus::Fail, 10)];
        let breakdown = calculate_seo_score(&items);
        assert_eq!(breakdown.total_possible_points, 20);
        // 10/20 * 100 * 0.9 = 45
        assert_eq!(breakdown.score, 45);
    }

    #[test]
    fn info_items_are_excluded_entirely() {
        let items = vec![item(CheckStatus::Pass, 10), item(CheckStatus::Info, 50)];
        let breakdown = calculate_seo_score(&items);
        assert_eq!(breakdown.total_possible_points, 10);
        assert_eq!(breakdown.score, 90);
    }

    #[test]
    fn empty_item_list_scores_zero() {
        let breakdown = calculate_seo_score(&[]);
        assert_eq!(breakdown.score, 0);
        assert_eq!(breakdown.total_possible_points, 0);
    }

    #[test]
    fn score_never_exceeds_ninety() {
        let items: Vec<CheckItem> = (0..20).map(|_| item(CheckStatus::Pass, 7)).collect();
        let breakdown = calculate_seo_score(&items);
        assert!(breakdown.score <= 90);
    }
}
