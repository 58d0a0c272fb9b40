//! Error types for the Sentira library.
//!
//! All errors are represented by the [`SentiraError`] enum. Training-time
//! failures (empty corpora, unlabeled documents) propagate to the caller of
//! the training pipeline; the inference path is error-free for any string
//! input apart from the two structural failures, [`SentiraError::ModelNotTrained`]
//! and [`SentiraError::CorruptArtifact`].
//!
//! # Examples
//!
//! ```
//! use sentira::error::{Result, SentiraError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentiraError::EmptyCorpus)
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sentira operations.
#[derive(Error, Debug)]
pub enum SentiraError {
    /// The training corpus contained no documents.
    #[error("Empty corpus: training requires at least one document")]
    EmptyCorpus,

    /// The training data cannot support fitting a classifier.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Inference was attempted on an unfit extractor or classifier.
    #[error("Model not trained: fit must be called before inference")]
    ModelNotTrained,

    /// A model artifact was unreadable or carried an unrecognized version.
    #[error("Corrupt artifact: {0}")]
    CorruptArtifact(String),

    /// A feature vector did not match the trained vocabulary dimensionality.
    #[error("Invalid feature vector: {0}")]
    InvalidFeatureVector(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SentiraError.
pub type Result<T> = std::result::Result<T, SentiraError>;

impl SentiraError {
    /// Create a new insufficient-data error.
    pub fn insufficient_data<S: Into<String>>(msg: S) -> Self {
        SentiraError::InsufficientData(msg.into())
    }

    /// Create a new corrupt-artifact error.
    pub fn corrupt_artifact<S: Into<String>>(msg: S) -> Self {
        SentiraError::CorruptArtifact(msg.into())
    }

    /// Create a new invalid-feature-vector error.
    pub fn invalid_feature_vector<S: Into<String>>(msg: S) -> Self {
        SentiraError::InvalidFeatureVector(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentiraError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SentiraError::Config(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        SentiraError::Serialization(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SentiraError::insufficient_data("label negative has no examples");
        assert_eq!(
            error.to_string(),
            "Insufficient data: label negative has no examples"
        );

        let error = SentiraError::corrupt_artifact("bad magic");
        assert_eq!(error.to_string(), "Corrupt artifact: bad magic");

        let error = SentiraError::analysis("invalid pattern");
        assert_eq!(error.to_string(), "Analysis error: invalid pattern");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sentira_error = SentiraError::from(io_error);

        match sentira_error {
            SentiraError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
