//! Logic Module - Prediction Engines
//!
//! ## Structure
//! - `artifacts` - trained model, encoders, defaults (load-once cache)
//! - `features` - request rows, label encoding, schema alignment
//! - `risk` - ranking, thresholds, alert tiers
//! - `pipeline` - the end-to-end prediction run

pub mod artifacts;
pub mod features;
pub mod pipeline;
pub mod risk;
