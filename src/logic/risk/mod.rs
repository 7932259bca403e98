//! Risk Module - Ranking, Classification & Alerting
//!
//! ## Structure
//! - `types.rs` - risk levels, ranked rows, report, alert tiers
//! - `rules.rs` - fixed thresholds + static advice
//! - `classifier.rs` - pure ranking/classification functions

pub mod classifier;
pub mod rules;
pub mod types;

pub use classifier::{alert_tier, classify, classify_with, rank, rank_with};
pub use rules::{
    RiskThresholds, HIGH_RISK_THRESHOLD, MODERATE_RISK_THRESHOLD, RECOMMENDED_ACTIONS,
    TOP_PREDICTIONS,
};
pub use types::{
    display_name, AlertTier, PredictionReport, RankedPrediction, RiskLevel, TypeScore,
};
