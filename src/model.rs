//! The trained sentiment model.
//!
//! A [`SentimentModel`] bundles exactly one fitted vocabulary/weighting pair
//! and one set of per-label statistics. It is immutable after training:
//! retraining produces a new model, and reloads should swap an `Arc` to a
//! freshly constructed model rather than mutating a live one. `predict` is
//! pure and reentrant, so one model may be shared across arbitrarily many
//! concurrent callers without locking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::{MultinomialNb, Prediction};
use crate::error::Result;
use crate::feature::TfIdfVectorizer;
use crate::pipeline::metrics::EvaluationReport;

/// Metadata recorded when a model is trained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Training timestamp.
    pub trained_at: DateTime<Utc>,
    /// Number of training examples used.
    pub training_examples: usize,
    /// Number of held-out examples evaluated.
    pub evaluation_examples: usize,
    /// Evaluation metrics on the held-out partition.
    pub evaluation: EvaluationReport,
}

/// A trained sentiment model: fitted feature extractor + classifier.
pub struct SentimentModel {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNb,
    metadata: ModelMetadata,
}

impl SentimentModel {
    pub(crate) fn new(
        vectorizer: TfIdfVectorizer,
        classifier: MultinomialNb,
        metadata: ModelMetadata,
    ) -> Self {
        Self {
            vectorizer,
            classifier,
            metadata,
        }
    }

    /// Predict the sentiment label and confidence for a text.
    ///
    /// Never fails for ordinary string input: text with no recognized tokens
    /// maps to the zero vector and the majority-prior label wins.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let features = self.vectorizer.transform(text)?;
        self.classifier.predict(&features)
    }

    /// Compute the full probability distribution over labels for a text.
    pub fn predict_distribution(&self, text: &str) -> Result<Vec<(String, f64)>> {
        let features = self.vectorizer.transform(text)?;
        self.classifier.predict_distribution(&features)
    }

    /// Labels seen during training, in lexical order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classifier.labels()
    }

    /// Get the fitted feature extractor.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    /// Get the fitted classifier.
    pub fn classifier(&self) -> &MultinomialNb {
        &self.classifier
    }

    /// Get the training metadata.
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

impl std::fmt::Debug for SentimentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentModel")
            .field("vocabulary_size", &self.vectorizer.vocabulary_size())
            .field("labels", &self.classifier.labels().collect::<Vec<_>>())
            .field("trained_at", &self.metadata.trained_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::document::Document;
    use crate::pipeline::{TrainingConfig, train};

    fn trained_model() -> SentimentModel {
        let mut corpus = Vec::new();
        for _ in 0..5 {
            corpus.push(Document::labeled("great job", "positive"));
            corpus.push(Document::labeled("this is bad", "negative"));
        }
        train(&corpus, &TrainingConfig::default()).unwrap()
    }

    #[test]
    fn test_predict_known_text() {
        let model = trained_model();
        let prediction = model.predict("great job today").unwrap();
        assert_eq!(prediction.label, "positive");
        assert!(prediction.confidence > 0.5);
    }

    #[test]
    fn test_predict_unrecognized_text_uses_prior() {
        let model = trained_model();
        // Digits and punctuation only: zero feature vector, still a valid pair
        let prediction = model.predict("12345 !!!").unwrap();
        assert!(model.labels().any(|l| l == prediction.label));
        assert!(prediction.confidence >= 0.0 && prediction.confidence <= 1.0);
    }

    #[test]
    fn test_labels_lexical_order() {
        let model = trained_model();
        let labels: Vec<&str> = model.labels().collect();
        assert_eq!(labels, vec!["negative", "positive"]);
    }

    #[test]
    fn test_model_shared_across_threads() {
        let model = Arc::new(trained_model());
        let mut handles = Vec::new();

        for _ in 0..4 {
            let model = Arc::clone(&model);
            handles.push(std::thread::spawn(move || {
                model.predict("great job").unwrap().label
            }));
        }

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "positive");
        }
    }
}
