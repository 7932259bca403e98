//! UI Commands - the surface the dashboard calls.
//!
//! Request validation lives here, not in the core. Errors cross this
//! boundary as display strings; the pipeline's typed errors stay inside
//! the crate.

use serde::{Deserialize, Serialize};

use crate::constants::{
    APP_NAME, APP_VERSION, CATEGORY_FEATURE, DEFAULT_TARGET_YEAR, MAX_TARGET_YEAR,
    MIN_TARGET_YEAR, STATE_FEATURE, TYPE_FEATURE,
};
use crate::logic::artifacts::{artifact_digests, ArtifactBundle, ArtifactDigests, ArtifactPaths};
use crate::logic::features::{schema_hash, PredictionRequest};
use crate::logic::pipeline::predict_top_crimes;
use crate::logic::risk::{PredictionReport, RECOMMENDED_ACTIONS};

/// States offered by the State select, in fitted vocabulary order.
/// Options come straight from the encoder, so dropdown and artifact can
/// never drift apart.
pub fn list_states(bundle: &ArtifactBundle<'_>) -> Result<Vec<String>, String> {
    bundle
        .encoders
        .vocabulary(STATE_FEATURE)
        .map(<[String]>::to_vec)
        .map_err(|e| e.to_string())
}

/// Crime categories offered by the Category select.
pub fn list_categories(bundle: &ArtifactBundle<'_>) -> Result<Vec<String>, String> {
    bundle
        .encoders
        .vocabulary(CATEGORY_FEATURE)
        .map(<[String]>::to_vec)
        .map_err(|e| e.to_string())
}

/// Inclusive bounds and pre-selected value for the target-year slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

pub fn year_bounds() -> YearBounds {
    YearBounds {
        min: MIN_TARGET_YEAR,
        max: MAX_TARGET_YEAR,
        default: DEFAULT_TARGET_YEAR,
    }
}

/// Run one full prediction for the current selections.
pub fn run_prediction(
    bundle: &ArtifactBundle<'_>,
    request: &PredictionRequest,
) -> Result<PredictionReport, String> {
    if request.year < MIN_TARGET_YEAR || request.year > MAX_TARGET_YEAR {
        return Err(format!(
            "target year {} is outside the supported range {}..={}",
            request.year, MIN_TARGET_YEAR, MAX_TARGET_YEAR
        ));
    }
    predict_top_crimes(bundle, request).map_err(|e| e.to_string())
}

/// Static recommended-action lines rendered under the report.
pub fn recommended_actions() -> &'static [&'static str] {
    RECOMMENDED_ACTIONS
}

/// Engine summary for the dashboard header and health checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub app: String,
    pub version: String,
    pub model_name: String,
    pub model_version: String,
    pub feature_count: usize,
    pub tree_count: usize,
    pub schema_hash: u32,
    pub states: usize,
    pub categories: usize,
    pub crime_types: usize,
    pub default_count: usize,
}

pub fn engine_status(bundle: &ArtifactBundle<'_>) -> Result<EngineStatus, String> {
    let states = bundle
        .encoders
        .vocabulary(STATE_FEATURE)
        .map_err(|e| e.to_string())?
        .len();
    let categories = bundle
        .encoders
        .vocabulary(CATEGORY_FEATURE)
        .map_err(|e| e.to_string())?
        .len();
    let crime_types = bundle
        .encoders
        .vocabulary(TYPE_FEATURE)
        .map_err(|e| e.to_string())?
        .len();

    Ok(EngineStatus {
        app: APP_NAME.to_string(),
        version: APP_VERSION.to_string(),
        model_name: bundle.model.info.name.clone(),
        model_version: bundle.model.info.version.clone(),
        feature_count: bundle.model.feature_count(),
        tree_count: bundle.model.tree_count(),
        schema_hash: schema_hash(bundle.model.feature_names()),
        states,
        categories,
        crime_types,
        default_count: bundle.defaults.len(),
    })
}

/// Artifact file digests for the audit view.
pub fn get_artifact_digests(paths: &ArtifactPaths) -> Result<ArtifactDigests, String> {
    artifact_digests(paths).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::logic::artifacts::{CrimeModel, Defaults, DecisionTree, EncoderBank, ModelInfo, TreeNode};

    fn model() -> CrimeModel {
        CrimeModel::new(
            vec![
                "state".to_string(),
                "category".to_string(),
                "type".to_string(),
                "year".to_string(),
            ],
            vec![DecisionTree {
                nodes: vec![TreeNode::Leaf { value: 42.0 }],
            }],
            0.0,
            ModelInfo {
                name: "crime-lgbm".to_string(),
                version: "2026.08".to_string(),
                trained_at: None,
            },
        )
        .unwrap()
    }

    fn encoders() -> EncoderBank {
        let mut vocabularies = BTreeMap::new();
        vocabularies.insert(
            "state".to_string(),
            vec!["Johor".to_string(), "Selangor".to_string()],
        );
        vocabularies.insert("category".to_string(), vec!["property".to_string()]);
        vocabularies.insert(
            "type".to_string(),
            vec!["break_in".to_string(), "robbery".to_string(), "snatch_theft".to_string()],
        );
        EncoderBank::from_vocabularies(vocabularies).unwrap()
    }

    #[test]
    fn test_select_options_come_from_the_encoders() {
        let model = model();
        let encoders = encoders();
        let defaults = Defaults::default();
        let bundle = ArtifactBundle::new(&model, &encoders, &defaults);

        assert_eq!(list_states(&bundle).unwrap(), vec!["Johor", "Selangor"]);
        assert_eq!(list_categories(&bundle).unwrap(), vec!["property"]);
    }

    #[test]
    fn test_year_bounds_match_the_slider() {
        let bounds = year_bounds();
        assert_eq!(bounds.min, 2026);
        assert_eq!(bounds.max, 2029);
        assert_eq!(bounds.default, 2027);
    }

    #[test]
    fn test_out_of_range_year_is_rejected_before_the_pipeline() {
        let model = model();
        let encoders = encoders();
        let defaults = Defaults::default();
        let bundle = ArtifactBundle::new(&model, &encoders, &defaults);

        let request = PredictionRequest {
            state: "Johor".to_string(),
            category: "property".to_string(),
            year: 2031,
        };
        let err = run_prediction(&bundle, &request).unwrap_err();
        assert!(err.contains("2031"));
        assert!(err.contains("2026..=2029"));
    }

    #[test]
    fn test_run_prediction_happy_path() {
        let model = model();
        let encoders = encoders();
        let defaults = Defaults::default();
        let bundle = ArtifactBundle::new(&model, &encoders, &defaults);

        let request = PredictionRequest {
            state: "Johor".to_string(),
            category: "property".to_string(),
            year: 2027,
        };
        let report = run_prediction(&bundle, &request).unwrap();
        // constant model scores every candidate 42.0
        assert_eq!(report.top.len(), 3);
        assert!(report.top.iter().all(|p| p.score == 42.0));
    }

    #[test]
    fn test_engine_status_counts_artifacts() {
        let model = model();
        let encoders = encoders();
        let defaults: Defaults = [("population".to_string(), 100.0)].into_iter().collect();
        let bundle = ArtifactBundle::new(&model, &encoders, &defaults);

        let status = engine_status(&bundle).unwrap();
        assert_eq!(status.model_name, "crime-lgbm");
        assert_eq!(status.feature_count, 4);
        assert_eq!(status.tree_count, 1);
        assert_eq!(status.states, 2);
        assert_eq!(status.categories, 1);
        assert_eq!(status.crime_types, 3);
        assert_eq!(status.default_count, 1);
        assert_eq!(status.version, APP_VERSION);
    }
}
