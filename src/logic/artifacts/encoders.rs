//! Label Encoders - Categorical Feature Vocabularies
//!
//! The encoder artifact carries one fitted vocabulary per categorical
//! feature (state, category, type). A label's code is its position in
//! the vocabulary, so the mapping is bidirectional by construction and
//! the artifact never has to store both directions.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::constants::ENCODED_FEATURES;
use crate::error::{PredictError, PredictResult};

use super::ArtifactKind;

/// One fitted vocabulary. Artifact order is code order.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    feature: String,
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    /// Build an encoder from a fitted vocabulary.
    ///
    /// Rejects empty and duplicated vocabularies up front; both would
    /// break the code/label bijection the rest of the pipeline assumes.
    pub fn from_classes(feature: &str, classes: Vec<String>) -> PredictResult<Self> {
        if classes.is_empty() {
            return Err(PredictError::EmptyVocabulary {
                feature: feature.to_string(),
            });
        }
        let mut index = HashMap::with_capacity(classes.len());
        for (code, label) in classes.iter().enumerate() {
            if index.insert(label.clone(), code).is_some() {
                return Err(PredictError::DuplicateLabel {
                    feature: feature.to_string(),
                    label: label.clone(),
                });
            }
        }
        Ok(Self {
            feature: feature.to_string(),
            classes,
            index,
        })
    }

    /// Feature this encoder was fitted for.
    pub fn feature(&self) -> &str {
        &self.feature
    }

    /// The fitted vocabulary, in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of labels in the vocabulary.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Label to integer code. `None` when the label was never fitted.
    pub fn encode(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Integer code back to its label.
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }
}

/// Named collection of label encoders, one per categorical feature.
#[derive(Debug, Clone)]
pub struct EncoderBank {
    encoders: HashMap<String, LabelEncoder>,
}

impl EncoderBank {
    /// Load the encoder artifact: a JSON object mapping each feature
    /// name to its ordered vocabulary. The artifact must cover every
    /// request-controlled categorical feature.
    pub fn load(path: &Path) -> PredictResult<Self> {
        let vocabularies: BTreeMap<String, Vec<String>> =
            super::read_artifact(ArtifactKind::Encoders, path)?;
        let bank = Self::from_vocabularies(vocabularies)?;
        for feature in ENCODED_FEATURES {
            if !bank.contains(feature) {
                return Err(PredictError::ArtifactFormat {
                    kind: ArtifactKind::Encoders,
                    path: path.to_path_buf(),
                    message: format!("no vocabulary for required feature {feature:?}"),
                });
            }
        }
        let mut summary: Vec<String> = bank
            .encoders
            .iter()
            .map(|(feature, encoder)| format!("{feature}({})", encoder.len()))
            .collect();
        summary.sort_unstable();
        log::info!("label encoders ready: {}", summary.join(", "));
        Ok(bank)
    }

    /// Assemble a bank from in-memory vocabularies.
    pub fn from_vocabularies(vocabularies: BTreeMap<String, Vec<String>>) -> PredictResult<Self> {
        let mut encoders = HashMap::with_capacity(vocabularies.len());
        for (feature, classes) in vocabularies {
            let encoder = LabelEncoder::from_classes(&feature, classes)?;
            encoders.insert(feature, encoder);
        }
        Ok(Self { encoders })
    }

    /// Number of fitted encoders.
    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.encoders.contains_key(feature)
    }

    /// The encoder fitted for `feature`.
    pub fn encoder(&self, feature: &str) -> PredictResult<&LabelEncoder> {
        self.encoders
            .get(feature)
            .ok_or_else(|| PredictError::UnknownEncoder {
                feature: feature.to_string(),
            })
    }

    /// The fitted vocabulary for `feature`, in code order. This is what
    /// the UI renders as select options, so drift between dropdown and
    /// encoder is impossible.
    pub fn vocabulary(&self, feature: &str) -> PredictResult<&[String]> {
        Ok(self.encoder(feature)?.classes())
    }

    /// Encode one label for `feature`.
    pub fn encode(&self, feature: &str, label: &str) -> PredictResult<usize> {
        let encoder = self.encoder(feature)?;
        encoder
            .encode(label)
            .ok_or_else(|| PredictError::UnknownLabel {
                feature: feature.to_string(),
                label: label.to_string(),
            })
    }

    /// Decode one code for `feature` back to its label.
    pub fn decode(&self, feature: &str, code: usize) -> PredictResult<&str> {
        let encoder = self.encoder(feature)?;
        encoder
            .decode(code)
            .ok_or_else(|| PredictError::UnknownCode {
                feature: feature.to_string(),
                code,
            })
    }

    /// Fitted feature names, sorted for deterministic listings.
    pub fn features(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.encoders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
