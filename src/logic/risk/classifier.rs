//! Risk Classifier & Ranker
//!
//! Pure functions over scores: no artifact access, no clock, no I/O.
//! Scores go in; ranked, labeled rows and one alert tier come out.

use std::cmp::Ordering;

use super::rules::RiskThresholds;
use super::types::{display_name, AlertTier, RankedPrediction, RiskLevel, TypeScore};

/// Map a raw score to its risk tier using the product thresholds.
pub fn classify(score: f64) -> RiskLevel {
    classify_with(score, &RiskThresholds::default())
}

/// Classification against explicit thresholds. Both comparisons are
/// strict: a score exactly on a boundary belongs to the band below it.
pub fn classify_with(score: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if score > thresholds.high_min {
        RiskLevel::High
    } else if score > thresholds.moderate_min {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Top-N scores in descending order, classified and 1-based ranked.
///
/// The sort is stable, so equal scores keep the order they arrived in
/// (vocabulary order when called from the pipeline). Fewer than N
/// candidates just yields a shorter list.
pub fn rank(scores: Vec<TypeScore>, top_n: usize) -> Vec<RankedPrediction> {
    rank_with(scores, top_n, &RiskThresholds::default())
}

/// Ranking with explicit thresholds.
pub fn rank_with(
    scores: Vec<TypeScore>,
    top_n: usize,
    thresholds: &RiskThresholds,
) -> Vec<RankedPrediction> {
    let mut ordered = scores;
    ordered.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ordered.truncate(top_n);
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedPrediction {
            rank: i + 1,
            display_name: display_name(&entry.crime_type),
            risk: classify_with(entry.score, thresholds),
            score: entry.score,
            crime_type: entry.crime_type,
        })
        .collect()
}

/// Collapse the ranked rows into the run's single alert tier:
/// any High wins, else any Moderate, else Stable.
pub fn alert_tier(top: &[RankedPrediction]) -> AlertTier {
    if top.iter().any(|entry| entry.risk == RiskLevel::High) {
        AlertTier::High
    } else if top.iter().any(|entry| entry.risk == RiskLevel::Moderate) {
        AlertTier::Moderate
    } else {
        AlertTier::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::risk::TOP_PREDICTIONS;

    fn scores(pairs: &[(&str, f64)]) -> Vec<TypeScore> {
        pairs
            .iter()
            .map(|(crime_type, score)| TypeScore {
                crime_type: crime_type.to_string(),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn test_classify_boundaries_are_strict() {
        assert_eq!(classify(150.0001), RiskLevel::High);
        assert_eq!(classify(150.0), RiskLevel::Moderate);
        assert_eq!(classify(80.0001), RiskLevel::Moderate);
        assert_eq!(classify(80.0), RiskLevel::Low);
    }

    #[test]
    fn test_classify_far_from_boundaries() {
        assert_eq!(classify(1000.0), RiskLevel::High);
        assert_eq!(classify(100.0), RiskLevel::Moderate);
        assert_eq!(classify(0.0), RiskLevel::Low);
        assert_eq!(classify(-5.0), RiskLevel::Low);
    }

    #[test]
    fn test_classify_with_custom_thresholds() {
        let thresholds = RiskThresholds {
            high_min: 10.0,
            moderate_min: 5.0,
        };
        assert_eq!(classify_with(11.0, &thresholds), RiskLevel::High);
        assert_eq!(classify_with(10.0, &thresholds), RiskLevel::Moderate);
        assert_eq!(classify_with(5.0, &thresholds), RiskLevel::Low);
    }

    #[test]
    fn test_rank_orders_descending_and_caps_at_n() {
        let ranked = rank(
            scores(&[
                ("a", 10.0),
                ("b", 200.0),
                ("c", 90.0),
                ("d", 160.0),
                ("e", 5.0),
                ("f", 1.0),
            ]),
            TOP_PREDICTIONS,
        );

        let order: Vec<&str> = ranked.iter().map(|p| p.crime_type.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "c", "a", "e"]);
        assert_eq!(
            ranked.iter().map(|p| p.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_rank_with_fewer_candidates_than_n() {
        let ranked = rank(scores(&[("a", 1.0), ("b", 2.0)]), TOP_PREDICTIONS);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].crime_type, "b");
    }

    #[test]
    fn test_equal_scores_keep_arrival_order() {
        let ranked = rank(
            scores(&[("first", 50.0), ("second", 50.0), ("third", 50.0)]),
            2,
        );
        let order: Vec<&str> = ranked.iter().map(|p| p.crime_type.as_str()).collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    #[test]
    fn test_ranked_rows_carry_display_names_and_risk() {
        let ranked = rank(scores(&[("snatch_theft", 151.0)]), 5);
        assert_eq!(ranked[0].display_name, "Snatch Theft");
        assert_eq!(ranked[0].risk, RiskLevel::High);
    }

    #[test]
    fn test_alert_high_beats_moderate() {
        let ranked = rank(
            scores(&[("a", 200.0), ("b", 100.0), ("c", 10.0)]),
            TOP_PREDICTIONS,
        );
        assert_eq!(alert_tier(&ranked), AlertTier::High);
    }

    #[test]
    fn test_alert_moderate_when_no_high() {
        let ranked = rank(scores(&[("a", 100.0), ("b", 10.0)]), TOP_PREDICTIONS);
        assert_eq!(alert_tier(&ranked), AlertTier::Moderate);
    }

    #[test]
    fn test_alert_stable_when_all_low() {
        let ranked = rank(scores(&[("a", 10.0), ("b", 5.0)]), TOP_PREDICTIONS);
        assert_eq!(alert_tier(&ranked), AlertTier::Stable);
    }

    #[test]
    fn test_alert_stable_for_empty_report() {
        assert_eq!(alert_tier(&[]), AlertTier::Stable);
    }
}
