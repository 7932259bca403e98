//! Feature Alignment - projecting rows onto the model's column order.
//!
//! The model owns the schema. Alignment reads the ordered feature names
//! from the artifact and emits values in exactly that order, whatever
//! order the row was assembled in.

use ndarray::Array2;

use crate::constants::{ENCODED_FEATURES, YEAR_FEATURE};
use crate::error::{PredictError, PredictResult};
use crate::logic::artifacts::Defaults;

use super::row::{FeatureRow, FieldValue};

/// Order one encoded row by the model's declared feature names.
///
/// Alignment is a projection: row fields the model does not declare are
/// dropped. A declared feature absent from the row is schema drift and
/// fails loudly instead of defaulting the column to zero.
pub fn align_row(row: &FeatureRow, feature_names: &[String]) -> PredictResult<Vec<f64>> {
    let mut values = Vec::with_capacity(feature_names.len());
    for feature in feature_names {
        match row.get(feature) {
            Some(FieldValue::Number(value)) => values.push(*value),
            Some(FieldValue::Label(label)) => {
                return Err(PredictError::UnencodedField {
                    feature: feature.clone(),
                    label: label.clone(),
                });
            }
            None => {
                return Err(PredictError::MissingFeature {
                    feature: feature.clone(),
                });
            }
        }
    }
    Ok(values)
}

/// Stack aligned rows into one scoring matrix, preserving input order.
pub fn align_batch(rows: &[FeatureRow], feature_names: &[String]) -> PredictResult<Array2<f64>> {
    let width = feature_names.len();
    let mut matrix = Array2::zeros((rows.len(), width));
    for (i, row) in rows.iter().enumerate() {
        let values = align_row(row, feature_names)?;
        for (j, value) in values.into_iter().enumerate() {
            matrix[[i, j]] = value;
        }
    }
    Ok(matrix)
}

// ============================================================================
// SCHEMA DRIFT CHECKS
// ============================================================================

/// CRC-32 over the ordered feature names. Logged at load so two
/// deployments can be compared for schema drift from their logs alone.
pub fn schema_hash(feature_names: &[String]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for name in feature_names {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize()
}

/// Model features no request row will ever carry: not request-controlled
/// and absent from the defaults artifact. Each one will fail alignment.
pub fn uncovered_features(feature_names: &[String], defaults: &Defaults) -> Vec<String> {
    feature_names
        .iter()
        .filter(|name| !is_request_feature(name) && !defaults.contains(name))
        .cloned()
        .collect()
}

/// Default keys the model schema never reads; alignment drops them
/// silently, so they are noise in the artifact.
pub fn unused_defaults(feature_names: &[String], defaults: &Defaults) -> Vec<String> {
    defaults
        .iter()
        .map(|(name, _)| name)
        .filter(|name| !feature_names.iter().any(|f| f == name))
        .map(str::to_string)
        .collect()
}

fn is_request_feature(name: &str) -> bool {
    name == YEAR_FEATURE || ENCODED_FEATURES.contains(&name)
}
