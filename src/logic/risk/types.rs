//! Risk Types
//!
//! Data structures shared by the ranker, the classifier and the UI
//! boundary. No decision logic lives here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Three-tier risk label derived from a raw predicted incident count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Moderate => "moderate",
            RiskLevel::Low => "low",
        }
    }

    /// Badge text the dashboard renders next to a ranked row.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::Low => "Low Risk",
        }
    }

    /// Numeric severity for ordering (higher = more severe).
    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLevel::High => 2,
            RiskLevel::Moderate => 1,
            RiskLevel::Low => 0,
        }
    }

    /// UI badge color (hex).
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::High => "#ef4444",
            RiskLevel::Moderate => "#f59e0b",
            RiskLevel::Low => "#10b981",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw model output for one candidate crime type, before ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeScore {
    pub crime_type: String,
    pub score: f64,
}

/// One ranked row of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPrediction {
    /// 1-based position after the descending sort.
    pub rank: usize,
    /// Vocabulary form of the crime type, e.g. `snatch_theft`.
    pub crime_type: String,
    /// Human form for the dashboard, e.g. `Snatch Theft`.
    pub display_name: String,
    pub score: f64,
    pub risk: RiskLevel,
}

/// Run-level alert banner tier. Exactly one per run, chosen by
/// priority: any High beats any Moderate beats Stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTier {
    High,
    Moderate,
    Stable,
}

impl AlertTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertTier::High => "high",
            AlertTier::Moderate => "moderate",
            AlertTier::Stable => "stable",
        }
    }

    /// Banner text rendered by the UI.
    pub fn message(&self) -> &'static str {
        match self {
            AlertTier::High => {
                "Breaking Alert: High-risk crime detected. Immediate attention recommended."
            }
            AlertTier::Moderate => {
                "Alert: Moderate-risk crime detected. Recommended actions include increased situational awareness, targeted patrols, and enhanced monitoring."
            }
            AlertTier::Stable => {
                "Situation Stable: No moderate or high-risk crime detected."
            }
        }
    }
}

impl std::fmt::Display for AlertTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the UI renders for one prediction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Echo of the selections the run was made for.
    pub state: String,
    pub category: String,
    pub year: i32,
    /// Ranked rows, highest score first; at most the configured top-N.
    pub top: Vec<RankedPrediction>,
    pub alert: AlertTier,
    pub elapsed_ms: u64,
}

/// Vocabulary form to dashboard form: underscores opened, each word
/// title-cased. `snatch_theft` becomes `Snatch Theft`.
pub fn display_name(crime_type: &str) -> String {
    crime_type
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
