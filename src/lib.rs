//! Crime Analytics & Prediction System - Prediction Core
//!
//! Loads the trained artifacts (gradient-boosting model, label encoders,
//! feature defaults) and serves the prediction pipeline behind the
//! dashboard: request build, categorical encoding, feature alignment,
//! batched inference, ranking and risk classification.
//!
//! ## Architecture
//! - `logic::artifacts` - artifact loading + process-lifetime cache
//! - `logic::features` - request rows, encoding, schema alignment
//! - `logic::risk` - ranking, thresholds, alert tiers
//! - `logic::pipeline` - the end-to-end run
//! - `api` - UI-facing commands (errors as display strings)

pub mod api;
pub mod constants;
pub mod error;
pub mod logic;

pub use error::{PredictError, PredictResult};
pub use logic::artifacts::{ArtifactBundle, ArtifactPaths};
pub use logic::features::PredictionRequest;
pub use logic::pipeline::predict_top_crimes;
pub use logic::risk::{AlertTier, PredictionReport, RankedPrediction, RiskLevel};
