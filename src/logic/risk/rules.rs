//! Risk Rules & Thresholds
//!
//! Fixed constants of the product design. They are not learned from
//! data and never move with the model artifact; keeping them here keeps
//! the classifier free of magic numbers.

use serde::{Deserialize, Serialize};

/// Scores strictly above this are High risk.
pub const HIGH_RISK_THRESHOLD: f64 = 150.0;

/// Scores strictly above this (and at most the High threshold) are
/// Moderate risk.
pub const MODERATE_RISK_THRESHOLD: f64 = 80.0;

/// How many ranked crime types the report carries.
pub const TOP_PREDICTIONS: usize = 5;

/// Static advice rendered under every report, independent of outcome.
pub const RECOMMENDED_ACTIONS: &[&str] = &[
    "Conduct random spot checks in areas with past incidents",
    "Strengthen community-based prevention programmes",
    "Run awareness campaigns on personal safety and conflict de-escalation",
    "Continuously monitor crime trends via the dashboard",
];

/// Classification thresholds. Call sites that need the product defaults
/// use `RiskThresholds::default()`; tests can narrow or widen the bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Strictly above = High.
    pub high_min: f64,
    /// Strictly above = Moderate; at or below = Low.
    pub moderate_min: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_min: HIGH_RISK_THRESHOLD,
            moderate_min: MODERATE_RISK_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_design_constants() {
        let thresholds = RiskThresholds::default();
        assert_eq!(thresholds.high_min, 150.0);
        assert_eq!(thresholds.moderate_min, 80.0);
        assert!(thresholds.high_min > thresholds.moderate_min);
    }

    #[test]
    fn test_recommended_actions_are_nonempty() {
        assert_eq!(RECOMMENDED_ACTIONS.len(), 4);
        assert!(RECOMMENDED_ACTIONS.iter().all(|line| !line.is_empty()));
    }
}
