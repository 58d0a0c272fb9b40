//! End-to-end training pipeline.
//!
//! [`train`] orchestrates corpus splitting, feature-extractor fitting,
//! classifier fitting, and evaluation:
//!
//! ```text
//! Corpus → split (seeded, stratified)
//!        → TfIdfVectorizer::fit (training partition only)
//!        → MultinomialNb::fit (transformed training partition)
//!        → evaluate (held-out partition, reporting only)
//!        → SentimentModel
//! ```
//!
//! The extractor is never fitted on evaluation data: evaluation measures
//! generalization, not memorized vocabulary.
//!
//! # Examples
//!
//! ```
//! use sentira::document::Document;
//! use sentira::pipeline::{TrainingConfig, train};
//!
//! # fn main() -> sentira::error::Result<()> {
//! let corpus = vec![
//!     Document::labeled("great job on the project", "positive"),
//!     Document::labeled("really impressed with your work", "positive"),
//!     Document::labeled("frustrated with the delays", "negative"),
//!     Document::labeled("the workload is overwhelming", "negative"),
//! ];
//!
//! let model = train(&corpus, &TrainingConfig::default())?;
//! let prediction = model.predict("impressed with the project")?;
//! assert!(prediction.confidence >= 0.0 && prediction.confidence <= 1.0);
//! # Ok(())
//! # }
//! ```

pub mod metrics;
mod split;

use serde::{Deserialize, Serialize};

use crate::classifier::{DEFAULT_ALPHA, MultinomialNb};
use crate::document::Document;
use crate::error::{Result, SentiraError};
use crate::feature::{TfIdfVectorizer, WeightingConfig};
use crate::model::{ModelMetadata, SentimentModel};

pub use metrics::{EvaluationReport, LabelMetrics};

/// Default fraction of the corpus held out for evaluation.
pub const DEFAULT_EVAL_RATIO: f64 = 0.2;

/// Default seed for the train/evaluation split.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Fraction of each label's examples held out for evaluation.
    pub eval_ratio: f64,
    /// Seed for the deterministic split.
    pub seed: u64,
    /// Additive smoothing constant for the classifier.
    pub alpha: f64,
    /// Term-weighting configuration for the feature extractor.
    pub weighting: WeightingConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            eval_ratio: DEFAULT_EVAL_RATIO,
            seed: DEFAULT_SEED,
            alpha: DEFAULT_ALPHA,
            weighting: WeightingConfig::default(),
        }
    }
}

/// Train a sentiment model on a labeled corpus.
///
/// Fails with [`SentiraError::EmptyCorpus`] on an empty corpus and
/// [`SentiraError::InsufficientData`] when a document is unlabeled. Errors
/// are never swallowed: a bad corpus fails the whole run.
///
/// Re-running with the same corpus and configuration produces the same split
/// and therefore the same model.
pub fn train(corpus: &[Document], config: &TrainingConfig) -> Result<SentimentModel> {
    if corpus.is_empty() {
        return Err(SentiraError::EmptyCorpus);
    }

    let (training, held_out) = split::stratified_split(corpus, config.eval_ratio, config.seed)?;

    // Fit the extractor on the training partition only
    let training_docs: Vec<Document> = training.iter().map(|d| (*d).clone()).collect();
    let mut vectorizer = TfIdfVectorizer::new(config.weighting.clone())?;
    vectorizer.fit(&training_docs)?;

    let features = training_docs
        .iter()
        .map(|doc| vectorizer.transform(doc.content()))
        .collect::<Result<Vec<_>>>()?;
    let labels: Vec<String> = training_docs
        .iter()
        .map(|doc| {
            doc.label()
                .map(str::to_string)
                .ok_or_else(|| SentiraError::insufficient_data("unlabeled training document"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut classifier = MultinomialNb::new(config.alpha);
    classifier.fit(&features, &labels)?;

    // Reporting only; never fed back into the model
    let evaluation = metrics::evaluate(&vectorizer, &classifier, &held_out)?;

    let metadata = ModelMetadata {
        trained_at: chrono::Utc::now(),
        training_examples: training_docs.len(),
        evaluation_examples: held_out.len(),
        evaluation,
    };

    Ok(SentimentModel::new(vectorizer, classifier, metadata))
}
