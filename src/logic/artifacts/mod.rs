//! Artifact Loading & Process-Lifetime Cache
//!
//! Three training-produced artifacts back every prediction: the model,
//! the label encoders and the feature defaults. Each is read-only after
//! load and loads at most once per process; a failed load caches nothing,
//! so the same deployment error is reported again on the next attempt.
//!
//! ## Structure
//! - `model.rs` - gradient-boosted tree ensemble + scoring
//! - `encoders.rs` - categorical vocabularies (state/category/type)
//! - `defaults.rs` - training-time values for non-UI features

pub mod defaults;
pub mod encoders;
pub mod model;

pub use defaults::Defaults;
pub use encoders::{EncoderBank, LabelEncoder};
pub use model::{CrimeModel, DecisionTree, ModelInfo, TreeNode};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{DEFAULTS_FILE, ENCODERS_FILE, MODEL_FILE};
use crate::error::{PredictError, PredictResult};

// ============================================================================
// ARTIFACT KINDS & PATHS
// ============================================================================

/// The three artifact kinds produced by the training pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Model,
    Encoders,
    Defaults,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "model",
            ArtifactKind::Encoders => "label encoders",
            ArtifactKind::Defaults => "defaults",
        }
    }

    /// File name of this artifact inside the artifact directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::Model => MODEL_FILE,
            ArtifactKind::Encoders => ENCODERS_FILE,
            ArtifactKind::Defaults => DEFAULTS_FILE,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved locations of the three artifact files.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub encoders: PathBuf,
    pub defaults: PathBuf,
}

impl ArtifactPaths {
    /// Standard layout: all three files in one directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(MODEL_FILE),
            encoders: dir.join(ENCODERS_FILE),
            defaults: dir.join(DEFAULTS_FILE),
        }
    }

    /// Layout from `CRIME_ARTIFACT_DIR`, falling back to the built-in
    /// directory.
    pub fn from_env() -> Self {
        Self::in_dir(crate::constants::get_artifact_dir())
    }

    pub fn for_kind(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Model => &self.model,
            ArtifactKind::Encoders => &self.encoders,
            ArtifactKind::Defaults => &self.defaults,
        }
    }
}

// ============================================================================
// FILE READING & DIGESTS
// ============================================================================

/// Read one artifact file, distinguishing absence from unreadability.
fn read_bytes(kind: ArtifactKind, path: &Path) -> PredictResult<Vec<u8>> {
    if !path.exists() {
        return Err(PredictError::ArtifactMissing {
            kind,
            path: path.to_path_buf(),
        });
    }
    fs::read(path).map_err(|source| PredictError::ArtifactIo {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Read and deserialize one artifact file, logging its digest on success.
pub(crate) fn read_artifact<T: DeserializeOwned>(
    kind: ArtifactKind,
    path: &Path,
) -> PredictResult<T> {
    let bytes = read_bytes(kind, path)?;
    let parsed = serde_json::from_slice(&bytes).map_err(|e| PredictError::ArtifactFormat {
        kind,
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let digest = hex::encode(Sha256::digest(&bytes));
    log::info!(
        "{} artifact loaded from {} ({} bytes, sha256 {}...)",
        kind,
        path.display(),
        bytes.len(),
        &digest[..16]
    );
    Ok(parsed)
}

/// Hex SHA-256 of each artifact file, for the status surface and audit
/// logs. Recomputed from disk on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDigests {
    pub model: String,
    pub encoders: String,
    pub defaults: String,
}

pub fn artifact_digests(paths: &ArtifactPaths) -> PredictResult<ArtifactDigests> {
    Ok(ArtifactDigests {
        model: file_digest(ArtifactKind::Model, &paths.model)?,
        encoders: file_digest(ArtifactKind::Encoders, &paths.encoders)?,
        defaults: file_digest(ArtifactKind::Defaults, &paths.defaults)?,
    })
}

fn file_digest(kind: ArtifactKind, path: &Path) -> PredictResult<String> {
    let bytes = read_bytes(kind, path)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

// ============================================================================
// BUNDLE
// ============================================================================

/// Borrowed view over the three loaded artifacts. This is the explicit
/// handle the pipeline runs against; nothing reads artifact state through
/// an ambient global. Immutable after load and cheap to copy.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactBundle<'a> {
    pub model: &'a CrimeModel,
    pub encoders: &'a EncoderBank,
    pub defaults: &'a Defaults,
}

impl<'a> ArtifactBundle<'a> {
    /// Assemble a bundle and report schema coverage.
    ///
    /// Coverage gaps are warnings here, not errors: the hard failure
    /// stays at feature alignment, where the affected request is known.
    pub fn new(model: &'a CrimeModel, encoders: &'a EncoderBank, defaults: &'a Defaults) -> Self {
        let bundle = Self {
            model,
            encoders,
            defaults,
        };
        bundle.log_schema_coverage();
        bundle
    }

    fn log_schema_coverage(&self) {
        use crate::logic::features::{schema_hash, uncovered_features, unused_defaults};

        let names = self.model.feature_names();
        log::info!(
            "feature schema: {} columns, {} trees (crc32 {:08x})",
            names.len(),
            self.model.tree_count(),
            schema_hash(names)
        );

        let uncovered = uncovered_features(names, self.defaults);
        if !uncovered.is_empty() {
            log::warn!(
                "model features with no default and no request field: {:?}; feature alignment will fail until the defaults artifact is fixed",
                uncovered
            );
        }
        let unused = unused_defaults(names, self.defaults);
        if !unused.is_empty() {
            log::warn!("defaults never read by the model schema: {:?}", unused);
        }
    }
}

// ============================================================================
// PROCESS-LIFETIME CACHE
// ============================================================================

static MODEL: OnceCell<CrimeModel> = OnceCell::new();
static ENCODERS: OnceCell<EncoderBank> = OnceCell::new();
static DEFAULTS: OnceCell<Defaults> = OnceCell::new();
static BUNDLE: OnceCell<ArtifactBundle<'static>> = OnceCell::new();

/// Load-once accessor for the model artifact.
pub fn shared_model(paths: &ArtifactPaths) -> PredictResult<&'static CrimeModel> {
    MODEL.get_or_try_init(|| CrimeModel::load(&paths.model))
}

/// Load-once accessor for the encoder artifact.
pub fn shared_encoders(paths: &ArtifactPaths) -> PredictResult<&'static EncoderBank> {
    ENCODERS.get_or_try_init(|| EncoderBank::load(&paths.encoders))
}

/// Load-once accessor for the defaults artifact.
pub fn shared_defaults(paths: &ArtifactPaths) -> PredictResult<&'static Defaults> {
    DEFAULTS.get_or_try_init(|| Defaults::load(&paths.defaults))
}

/// The process-wide artifact bundle, assembled on first success.
///
/// Artifacts load independently: if only one of the three fails, the
/// other two stay cached and just the failing file is re-read on the
/// next call.
pub fn shared(paths: &ArtifactPaths) -> PredictResult<ArtifactBundle<'static>> {
    BUNDLE
        .get_or_try_init(|| {
            Ok(ArtifactBundle::new(
                shared_model(paths)?,
                shared_encoders(paths)?,
                shared_defaults(paths)?,
            ))
        })
        .map(|bundle| *bundle)
}
