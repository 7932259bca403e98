//! Crime Model - Gradient-Boosted Tree Ensemble
//!
//! The training pipeline dumps the fitted regressor to JSON: the ordered
//! feature names it was trained on plus an additive tree ensemble.
//! Scoring walks each tree to a leaf and sums the leaf values onto the
//! base score, one row at a time. Rows never interact, so batching is
//! purely a throughput concern.

use std::collections::HashSet;
use std::path::Path;

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::{PredictError, PredictResult};

use super::ArtifactKind;

// ============================================================================
// TREE STRUCTURE
// ============================================================================

/// Split or leaf node, index-linked within its tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Decision node: `value <= threshold` goes left, NaN follows
    /// `default_left`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        #[serde(default)]
        default_left: bool,
    },
    /// Terminal node carrying this tree's contribution.
    Leaf { value: f64 },
}

/// One regression tree; node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk from the root to a leaf for one aligned row.
    ///
    /// Terminates because validation guarantees children point strictly
    /// forward; indexes are in bounds for the same reason.
    fn score(&self, row: ArrayView1<'_, f64>) -> f64 {
        let mut at = 0usize;
        loop {
            match &self.nodes[at] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    default_left,
                } => {
                    let value = row[*feature];
                    let go_left = if value.is_nan() {
                        *default_left
                    } else {
                        value <= *threshold
                    };
                    at = if go_left { *left } else { *right };
                }
            }
        }
    }

    /// Structural check: non-empty, every child index in bounds and
    /// strictly forward-pointing, every split feature within `width`.
    fn validate(&self, width: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= width {
                    return Err(format!(
                        "node {i} splits on feature {feature}, schema width is {width}"
                    ));
                }
                for child in [*left, *right] {
                    if child >= self.nodes.len() {
                        return Err(format!(
                            "node {i} points past the tree ({child} >= {})",
                            self.nodes.len()
                        ));
                    }
                    if child <= i {
                        return Err(format!("node {i} points backwards to node {child}"));
                    }
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// MODEL
// ============================================================================

/// Training-run metadata carried inside the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub trained_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// The loaded gradient-boosting model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimeModel {
    /// Feature names in the exact column order the model was trained on.
    feature_names: Vec<String>,
    /// Additive ensemble, evaluated in training order.
    trees: Vec<DecisionTree>,
    /// Score every prediction starts from.
    #[serde(default)]
    base_score: f64,
    /// Training-run metadata.
    pub info: ModelInfo,
}

impl CrimeModel {
    /// Load and structurally validate the model artifact.
    pub fn load(path: &Path) -> PredictResult<Self> {
        let model: Self = super::read_artifact(ArtifactKind::Model, path)?;
        model
            .validate()
            .map_err(|message| PredictError::ArtifactFormat {
                kind: ArtifactKind::Model,
                path: path.to_path_buf(),
                message,
            })?;
        log::info!(
            "model {} v{} ready: {} features, {} trees",
            model.info.name,
            model.info.version,
            model.feature_count(),
            model.tree_count()
        );
        Ok(model)
    }

    /// Assemble and validate a model in memory.
    pub fn new(
        feature_names: Vec<String>,
        trees: Vec<DecisionTree>,
        base_score: f64,
        info: ModelInfo,
    ) -> PredictResult<Self> {
        let model = Self {
            feature_names,
            trees,
            base_score,
            info,
        };
        model.validate().map_err(PredictError::InvalidModel)?;
        Ok(model)
    }

    /// Reject a malformed dump before first use, so scoring can index
    /// nodes and columns without rechecking.
    fn validate(&self) -> Result<(), String> {
        if self.feature_names.is_empty() {
            return Err("model declares no features".to_string());
        }
        if self.trees.is_empty() {
            return Err("model carries no trees".to_string());
        }
        let mut seen = HashSet::new();
        for name in &self.feature_names {
            // a duplicate name would make alignment ambiguous
            if !seen.insert(name.as_str()) {
                return Err(format!("duplicate feature name {name:?}"));
            }
        }
        for (t, tree) in self.trees.iter().enumerate() {
            tree.validate(self.feature_names.len())
                .map_err(|e| format!("tree {t}: {e}"))?;
        }
        Ok(())
    }

    /// Feature names in the column order the scorer expects.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn feature_count(&self) -> usize {
        self.feature_names.len()
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Score a batch of aligned rows; one score per row, in row order.
    ///
    /// Each row is scored independently, so co-batching candidates can
    /// never change an individual score.
    pub fn predict(&self, rows: &Array2<f64>) -> PredictResult<Vec<f64>> {
        if rows.ncols() != self.feature_names.len() {
            return Err(PredictError::FeatureWidth {
                expected: self.feature_names.len(),
                actual: rows.ncols(),
            });
        }
        Ok(rows
            .rows()
            .into_iter()
            .map(|row| {
                self.base_score + self.trees.iter().map(|tree| tree.score(row)).sum::<f64>()
            })
            .collect())
    }
}
