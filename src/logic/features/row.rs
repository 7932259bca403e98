//! Request Rows - one model input record per candidate crime type.
//!
//! A row starts as a mix of raw labels and numbers; the encoder pass
//! rewrites the labels in place. Rows are transient, built fresh for
//! every scoring call and dropped afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CATEGORY_FEATURE, ENCODED_FEATURES, STATE_FEATURE, TYPE_FEATURE, YEAR_FEATURE,
};
use crate::error::PredictResult;
use crate::logic::artifacts::{Defaults, EncoderBank};

/// The UI selections driving one prediction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub state: String,
    pub category: String,
    pub year: i32,
}

/// A single field value. Labels stay labels until the encoder pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Label(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            FieldValue::Label(label) => Some(label.as_str()),
            FieldValue::Number(_) => None,
        }
    }
}

/// One model input record, keyed by feature name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRow {
    fields: HashMap<String, FieldValue>,
}

impl FeatureRow {
    pub fn get(&self, feature: &str) -> Option<&FieldValue> {
        self.fields.get(feature)
    }

    pub fn set_label(&mut self, feature: impl Into<String>, label: impl Into<String>) {
        self.fields
            .insert(feature.into(), FieldValue::Label(label.into()));
    }

    pub fn set_number(&mut self, feature: impl Into<String>, value: f64) {
        self.fields
            .insert(feature.into(), FieldValue::Number(value));
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.fields.contains_key(feature)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names, sorted for deterministic assertions and logs.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Merge the UI selections, one candidate crime type and the defaults
/// into a full row.
///
/// Defaults go in first and the four request-controlled fields are
/// written last, so a colliding default key can never override a user
/// selection. Pure: no artifact access beyond the passed defaults.
pub fn build_row(request: &PredictionRequest, crime_type: &str, defaults: &Defaults) -> FeatureRow {
    let mut row = FeatureRow::default();
    for (feature, value) in defaults.iter() {
        row.set_number(feature, value);
    }
    row.set_label(STATE_FEATURE, request.state.as_str());
    row.set_label(CATEGORY_FEATURE, request.category.as_str());
    row.set_label(TYPE_FEATURE, crime_type);
    row.set_number(YEAR_FEATURE, f64::from(request.year));
    row
}

/// Replace every encoder-covered label in the row with its integer code.
///
/// An unknown label is vocabulary drift and aborts the run; values that
/// are already numeric pass through untouched.
pub fn encode_row(row: &mut FeatureRow, encoders: &EncoderBank) -> PredictResult<()> {
    for feature in ENCODED_FEATURES {
        let label = match row.get(feature) {
            Some(FieldValue::Label(label)) => label.clone(),
            _ => continue,
        };
        let code = encoders.encode(feature, &label)?;
        row.set_number(*feature, code as f64);
    }
    Ok(())
}
