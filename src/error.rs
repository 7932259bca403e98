//! Error types for the prediction core.
//!
//! Every variant here is a deployment or schema defect, not a transient
//! condition, so nothing in this module is retried. Errors carry enough
//! context (paths, feature names, offending labels) to be actionable
//! straight from the message.

use std::path::PathBuf;

use thiserror::Error;

use crate::logic::artifacts::ArtifactKind;

/// Top-level error type for the prediction pipeline.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Artifact file absent at its expected path. Terminal for the run;
    /// the message names the path so the deployment can be fixed.
    #[error("{kind} artifact not found at: {}", path.display())]
    ArtifactMissing { kind: ArtifactKind, path: PathBuf },

    /// Artifact file present but unreadable.
    #[error("failed to read {kind} artifact at {}: {source}", path.display())]
    ArtifactIo {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file readable but not parseable as its expected shape.
    #[error("malformed {kind} artifact at {}: {message}", path.display())]
    ArtifactFormat {
        kind: ArtifactKind,
        path: PathBuf,
        message: String,
    },

    /// Model built in memory failed structural validation.
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// No encoder fitted for a feature the caller asked about.
    #[error("no encoder fitted for feature {feature:?}")]
    UnknownEncoder { feature: String },

    /// An encoder artifact carried an empty vocabulary.
    #[error("encoder for {feature:?} has an empty vocabulary")]
    EmptyVocabulary { feature: String },

    /// An encoder artifact carried the same label twice.
    #[error("encoder for {feature:?} lists label {label:?} more than once")]
    DuplicateLabel { feature: String, label: String },

    /// Label outside the fitted vocabulary. Vocabulary drift between
    /// UI options and encoder artifact; never silently coerced.
    #[error("label {label:?} is outside the fitted vocabulary of {feature:?}")]
    UnknownLabel { feature: String, label: String },

    /// Integer code outside the fitted vocabulary.
    #[error("code {code} is outside the fitted vocabulary of {feature:?}")]
    UnknownCode { feature: String, code: usize },

    /// The model declares a feature the request row does not carry.
    /// Schema drift between artifacts; fails loudly instead of
    /// defaulting the column to zero.
    #[error("model declares feature {feature:?} but the request row does not carry it")]
    MissingFeature { feature: String },

    /// A categorical field reached alignment still holding its label,
    /// meaning the encoder pass was skipped or incomplete.
    #[error("feature {feature:?} still holds label {label:?} after encoding")]
    UnencodedField { feature: String, label: String },

    /// Matrix width handed to the scorer disagrees with the model schema.
    #[error("feature width mismatch: model expects {expected} columns, matrix has {actual}")]
    FeatureWidth { expected: usize, actual: usize },
}

/// Result type alias for pipeline operations.
pub type PredictResult<T> = Result<T, PredictError>;
