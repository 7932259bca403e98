//! API Module
//!
//! The boundary the dashboard UI talks to. Core errors become display
//! strings here and never leak typed variants across it.

pub mod commands;

pub use commands::{
    engine_status, get_artifact_digests, list_categories, list_states, recommended_actions,
    run_prediction, year_bounds, EngineStatus, YearBounds,
};
