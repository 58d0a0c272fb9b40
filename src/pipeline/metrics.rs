//! Evaluation metrics for the training pipeline.
//!
//! Metrics are computed on the held-out partition with the already-fitted
//! extractor and classifier. They are reporting only and never alter the
//! trained model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classifier::MultinomialNb;
use crate::document::Document;
use crate::error::Result;
use crate::feature::TfIdfVectorizer;

/// Precision/recall for a single label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics {
    /// Fraction of predictions of this label that were correct.
    pub precision: f64,
    /// Fraction of actual examples of this label that were found.
    pub recall: f64,
    /// Number of held-out examples with this actual label.
    pub support: usize,
}

/// Evaluation results for a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Overall fraction of correct predictions on the held-out partition.
    pub accuracy: f64,
    /// Number of held-out examples evaluated.
    pub evaluated: usize,
    /// Per-label precision/recall, keyed by label.
    pub per_label: BTreeMap<String, LabelMetrics>,
}

impl EvaluationReport {
    /// An empty report, used when the held-out partition has no examples.
    pub(crate) fn empty() -> Self {
        Self {
            accuracy: 0.0,
            evaluated: 0,
            per_label: BTreeMap::new(),
        }
    }

    /// Check whether any examples were evaluated.
    pub fn is_empty(&self) -> bool {
        self.evaluated == 0
    }
}

impl std::fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "no held-out examples evaluated");
        }

        writeln!(
            f,
            "accuracy: {:.3} ({} examples)",
            self.accuracy, self.evaluated
        )?;
        writeln!(f, "{:<12} {:>9} {:>9} {:>8}", "label", "precision", "recall", "support")?;
        for (label, metrics) in &self.per_label {
            writeln!(
                f,
                "{:<12} {:>9.3} {:>9.3} {:>8}",
                label, metrics.precision, metrics.recall, metrics.support
            )?;
        }
        Ok(())
    }
}

/// Evaluate a fitted extractor/classifier pair on held-out documents.
pub(crate) fn evaluate(
    vectorizer: &TfIdfVectorizer,
    classifier: &MultinomialNb,
    held_out: &[&Document],
) -> Result<EvaluationReport> {
    if held_out.is_empty() {
        return Ok(EvaluationReport::empty());
    }

    let mut correct = 0usize;
    // Per label: (true positives, predicted count, actual count)
    let mut counts: BTreeMap<String, (usize, usize, usize)> = BTreeMap::new();
    for label in classifier.labels() {
        counts.insert(label.to_string(), (0, 0, 0));
    }

    for doc in held_out {
        let actual = doc.label().unwrap_or_default().to_string();
        let features = vectorizer.transform(doc.content())?;
        let prediction = classifier.predict(&features)?;

        if prediction.label == actual {
            correct += 1;
            if let Some(entry) = counts.get_mut(&actual) {
                entry.0 += 1;
            }
        }
        if let Some(entry) = counts.get_mut(&prediction.label) {
            entry.1 += 1;
        }
        if let Some(entry) = counts.get_mut(&actual) {
            entry.2 += 1;
        }
    }

    let per_label = counts
        .into_iter()
        .map(|(label, (tp, predicted, actual))| {
            let precision = if predicted > 0 {
                tp as f64 / predicted as f64
            } else {
                0.0
            };
            let recall = if actual > 0 { tp as f64 / actual as f64 } else { 0.0 };
            (
                label,
                LabelMetrics {
                    precision,
                    recall,
                    support: actual,
                },
            )
        })
        .collect();

    Ok(EvaluationReport {
        accuracy: correct as f64 / held_out.len() as f64,
        evaluated: held_out.len(),
        per_label,
    })
}
