//! Central Configuration Constants
//!
//! Single source of truth for artifact locations, feature names and
//! UI-facing bounds. To point the app at a different artifact build,
//! only edit this file (or set `CRIME_ARTIFACT_DIR`).

/// Default directory holding the trained artifacts
pub const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

/// Model artifact file name
pub const MODEL_FILE: &str = "crime_model.json";

/// Label encoders artifact file name
pub const ENCODERS_FILE: &str = "label_encoders.json";

/// Feature defaults artifact file name
pub const DEFAULTS_FILE: &str = "defaults.json";

/// Feature carrying the selected state
pub const STATE_FEATURE: &str = "state";

/// Feature carrying the selected crime category
pub const CATEGORY_FEATURE: &str = "category";

/// Feature carrying the candidate crime type
pub const TYPE_FEATURE: &str = "type";

/// Feature carrying the target year
pub const YEAR_FEATURE: &str = "year";

/// Features that pass through the label encoders, in artifact order
pub const ENCODED_FEATURES: &[&str] = &[STATE_FEATURE, CATEGORY_FEATURE, TYPE_FEATURE];

/// Earliest target year offered by the UI
pub const MIN_TARGET_YEAR: i32 = 2026;

/// Latest target year offered by the UI
pub const MAX_TARGET_YEAR: i32 = 2029;

/// Pre-selected target year
pub const DEFAULT_TARGET_YEAR: i32 = 2027;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Crime Analytics & Prediction System";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the artifact directory from environment or use default
pub fn get_artifact_dir() -> String {
    std::env::var("CRIME_ARTIFACT_DIR").unwrap_or_else(|_| DEFAULT_ARTIFACT_DIR.to_string())
}
