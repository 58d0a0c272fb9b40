//! Feature extraction: vocabulary building and TF-IDF vectorization.
//!
//! The [`TfIdfVectorizer`] turns raw text into fixed-dimensionality numeric
//! vectors over a [`Vocabulary`] learned during fitting. Out-of-vocabulary
//! tokens never grow the vector; unrecognized text maps to the zero vector.

pub mod vectorizer;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

pub use vectorizer::TfIdfVectorizer;
pub use vocabulary::Vocabulary;

/// Default cap on vocabulary size.
pub const DEFAULT_MAX_TERMS: usize = 5000;

/// Configuration for the term-weighting scheme.
///
/// The configuration is part of the persisted model artifact: a reloaded
/// model rebuilds the same analysis pipeline from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightingConfig {
    /// Maximum number of vocabulary terms retained during fitting.
    pub max_terms: usize,
    /// Custom stop word list. `None` uses the default English list.
    pub stop_words: Option<Vec<String>>,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            max_terms: DEFAULT_MAX_TERMS,
            stop_words: None,
        }
    }
}
