//! Feature Defaults Artifact
//!
//! Training-time values for every model feature the UI does not control.
//! Together with the four request fields these cover the model schema;
//! coverage is checked once when the bundle is assembled.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PredictResult;

use super::ArtifactKind;

/// Mapping from feature name to its default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Defaults(BTreeMap<String, f64>);

impl Defaults {
    /// Load the defaults artifact: a flat JSON object of name/value pairs.
    pub fn load(path: &Path) -> PredictResult<Self> {
        let defaults: Self = super::read_artifact(ArtifactKind::Defaults, path)?;
        log::info!("feature defaults ready: {} entries", defaults.len());
        Ok(defaults)
    }

    /// Default value for `feature`, if one was recorded at training time.
    pub fn get(&self, feature: &str) -> Option<f64> {
        self.0.get(feature).copied()
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.0.contains_key(feature)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate name/value pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl FromIterator<(String, f64)> for Defaults {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_membership() {
        let defaults: Defaults = [
            ("population".to_string(), 100.0),
            ("unemployment_rate".to_string(), 3.4),
        ]
        .into_iter()
        .collect();

        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults.get("population"), Some(100.0));
        assert_eq!(defaults.get("rainfall"), None);
        assert!(defaults.contains("unemployment_rate"));
        assert!(!defaults.contains("rainfall"));
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let defaults: Defaults = [
            ("zebra".to_string(), 1.0),
            ("alpha".to_string(), 2.0),
            ("mid".to_string(), 3.0),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = defaults.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zebra"]);
    }

    #[test]
    fn test_artifact_json_shape() {
        let defaults: Defaults =
            serde_json::from_str(r#"{"population": 100.0, "year_built": 1998}"#).unwrap();
        assert_eq!(defaults.get("population"), Some(100.0));
        assert_eq!(defaults.get("year_built"), Some(1998.0));
    }
}
