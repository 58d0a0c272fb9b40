//! Model artifact persistence.
//!
//! An artifact captures the full vocabulary, weighting configuration, and
//! class statistics of a trained model: enough to reconstruct an extractor +
//! classifier pair with prediction behavior identical to the original,
//! without access to the training corpus.
//!
//! # Format
//!
//! ```text
//! +-------+------------------+------------------+
//! | SNTR  | version (u32 LE) | bincode payload  |
//! +-------+------------------+------------------+
//! ```
//!
//! `load` refuses artifacts with a bad magic, an unrecognized version, or an
//! undecodable payload with [`SentiraError::CorruptArtifact`] rather than
//! producing a partially-usable model. The format is opaque to callers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classifier::{ClassStatistics, MultinomialNb};
use crate::error::{Result, SentiraError};
use crate::feature::{TfIdfVectorizer, WeightingConfig};
use crate::model::{ModelMetadata, SentimentModel};

/// Magic bytes identifying a sentira model artifact.
const MAGIC: [u8; 4] = *b"SNTR";

/// Current artifact schema version.
pub const ARTIFACT_VERSION: u32 = 1;

const HEADER_LEN: usize = MAGIC.len() + 4;

/// Serializable snapshot of a trained model.
#[derive(Serialize, Deserialize)]
struct ArtifactPayload {
    weighting: WeightingConfig,
    /// Vocabulary terms in index order.
    terms: Vec<String>,
    /// Inverse document frequency per vocabulary index.
    idf: Vec<f64>,
    /// Number of documents the extractor was fitted on.
    n_documents: usize,
    /// Classifier smoothing constant.
    alpha: f64,
    /// Per-label statistics in lexical label order.
    classes: Vec<ClassStatistics>,
    metadata: ModelMetadata,
}

/// Serialize a trained model into artifact bytes.
pub fn save(model: &SentimentModel) -> Result<Vec<u8>> {
    let vectorizer = model.vectorizer();
    let payload = ArtifactPayload {
        weighting: vectorizer.config().clone(),
        terms: vectorizer.vocabulary().terms().to_vec(),
        idf: vectorizer.idf().to_vec(),
        n_documents: vectorizer.n_documents(),
        alpha: model.classifier().alpha(),
        classes: model.classifier().classes().to_vec(),
        metadata: model.metadata().clone(),
    };

    let encoded = bincode::serialize(&payload)
        .map_err(|e| SentiraError::serialization(format!("Failed to encode artifact: {e}")))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + encoded.len());
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&ARTIFACT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&encoded);
    Ok(bytes)
}

/// Reconstruct a model from artifact bytes.
pub fn load(bytes: &[u8]) -> Result<SentimentModel> {
    if bytes.len() < HEADER_LEN {
        return Err(SentiraError::corrupt_artifact("artifact too short"));
    }
    if bytes[..MAGIC.len()] != MAGIC {
        return Err(SentiraError::corrupt_artifact("bad magic bytes"));
    }

    let mut version_bytes = [0u8; 4];
    version_bytes.copy_from_slice(&bytes[MAGIC.len()..HEADER_LEN]);
    let version = u32::from_le_bytes(version_bytes);
    if version != ARTIFACT_VERSION {
        return Err(SentiraError::corrupt_artifact(format!(
            "unsupported artifact version {version}, expected {ARTIFACT_VERSION}"
        )));
    }

    let payload: ArtifactPayload = bincode::deserialize(&bytes[HEADER_LEN..])
        .map_err(|e| SentiraError::corrupt_artifact(format!("undecodable payload: {e}")))?;

    // Structural validation before rebuilding anything
    if payload.terms.len() != payload.idf.len() {
        return Err(SentiraError::corrupt_artifact(
            "vocabulary and idf table sizes disagree",
        ));
    }
    if payload
        .classes
        .iter()
        .any(|class| class.feature_log_prob.len() != payload.terms.len())
    {
        return Err(SentiraError::corrupt_artifact(
            "class statistics do not match vocabulary size",
        ));
    }
    if payload.classes.is_empty() || payload.n_documents == 0 {
        return Err(SentiraError::corrupt_artifact(
            "artifact does not describe a trained model",
        ));
    }

    let vectorizer = TfIdfVectorizer::from_parts(
        payload.weighting,
        payload.terms,
        payload.idf,
        payload.n_documents,
    )?;
    let classifier = MultinomialNb::from_parts(payload.alpha, payload.classes);

    Ok(SentimentModel::new(vectorizer, classifier, payload.metadata))
}

/// Save a model artifact to a file.
///
/// The artifact is written to a sibling temporary file and renamed into
/// place, so a concurrent loader never observes a partially written artifact.
pub fn save_to_path<P: AsRef<Path>>(model: &SentimentModel, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = save(model)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| SentiraError::invalid_config("artifact path has no file name"))?;
    let mut temp_name = file_name.to_owned();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    std::fs::write(&temp_path, &bytes)?;
    std::fs::rename(&temp_path, path)?;
    Ok(())
}

/// Load a model artifact from a file.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<SentimentModel> {
    let bytes = std::fs::read(path)?;
    load(&bytes)
}
