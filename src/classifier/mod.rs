//! Multinomial naive Bayes classification over TF-IDF feature vectors.
//!
//! The classifier learns, per label, a prior probability and a smoothed
//! log-likelihood per vocabulary position. Additive smoothing keeps every
//! likelihood strictly positive, so a feature never seen for a label cannot
//! collapse a posterior to zero.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentiraError};

/// Default additive smoothing constant.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// The result of a single prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted sentiment label.
    pub label: String,
    /// Probability mass assigned to the predicted label, in `[0, 1]`.
    pub confidence: f64,
}

/// Learned statistics for a single label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStatistics {
    /// The label these statistics describe.
    pub label: String,
    /// Prior probability of the label (label frequency / total examples).
    pub prior: f64,
    /// Smoothed log-likelihood per vocabulary position.
    pub feature_log_prob: Vec<f64>,
}

/// Multinomial naive Bayes classifier.
///
/// Labels are stored in lexical order, which makes the argmax tie-break
/// deterministic: a strict comparison keeps the lexicographically smaller
/// label on exact ties.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    /// Additive smoothing constant, strictly positive.
    alpha: f64,
    /// Per-label statistics in lexical label order. Empty until fitted.
    classes: Vec<ClassStatistics>,
}

impl MultinomialNb {
    /// Create a new untrained classifier with the given smoothing constant.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            classes: Vec::new(),
        }
    }

    /// Reconstruct a trained classifier from persisted statistics.
    pub(crate) fn from_parts(alpha: f64, classes: Vec<ClassStatistics>) -> Self {
        Self { alpha, classes }
    }

    /// Check whether the classifier has been fitted.
    pub fn is_trained(&self) -> bool {
        !self.classes.is_empty()
    }

    /// Get the smoothing constant.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Per-label statistics in lexical label order.
    pub fn classes(&self) -> &[ClassStatistics] {
        &self.classes
    }

    /// Labels seen during training, in lexical order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|class| class.label.as_str())
    }

    /// Fit the classifier on feature vectors and their labels.
    ///
    /// Requires `features.len() == labels.len()` and a non-empty training
    /// set. Per-label statistics are independent, so they are computed in
    /// parallel; correctness does not depend on ordering across labels.
    pub fn fit(&mut self, features: &[Vec<f64>], labels: &[String]) -> Result<()> {
        if self.alpha <= 0.0 {
            return Err(SentiraError::invalid_config(
                "smoothing constant alpha must be strictly positive",
            ));
        }
        if features.len() != labels.len() {
            return Err(SentiraError::insufficient_data(format!(
                "feature/label count mismatch: {} features, {} labels",
                features.len(),
                labels.len()
            )));
        }
        if features.is_empty() {
            return Err(SentiraError::EmptyCorpus);
        }

        let n_features = features[0].len();
        if features.iter().any(|f| f.len() != n_features) {
            return Err(SentiraError::invalid_feature_vector(
                "training vectors have inconsistent dimensionality",
            ));
        }

        // Group example indices by label, lexically ordered
        let mut groups: std::collections::BTreeMap<&str, Vec<usize>> =
            std::collections::BTreeMap::new();
        for (index, label) in labels.iter().enumerate() {
            groups.entry(label.as_str()).or_default().push(index);
        }

        let total = features.len() as f64;
        let alpha = self.alpha;

        let classes: Vec<ClassStatistics> = groups
            .into_iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(label, indices)| {
                let prior = indices.len() as f64 / total;

                // Per-position feature mass for this label
                let mut feature_mass = vec![0.0; n_features];
                for &index in &indices {
                    for (position, value) in features[index].iter().enumerate() {
                        feature_mass[position] += value;
                    }
                }

                let total_mass: f64 = feature_mass.iter().sum();
                let denominator = total_mass + alpha * n_features as f64;
                let feature_log_prob = feature_mass
                    .iter()
                    .map(|mass| ((mass + alpha) / denominator).ln())
                    .collect();

                ClassStatistics {
                    label: label.to_string(),
                    prior,
                    feature_log_prob,
                }
            })
            .collect();

        self.classes = classes;
        Ok(())
    }

    /// Compute the probability distribution over labels for a feature vector.
    ///
    /// Scores are computed in log space and normalized with the max log-score
    /// subtracted before exponentiating, so large vocabularies cannot
    /// overflow. The result is a proper distribution: non-negative entries
    /// summing to 1 within floating-point tolerance, in lexical label order.
    pub fn predict_distribution(&self, features: &[f64]) -> Result<Vec<(String, f64)>> {
        if !self.is_trained() {
            return Err(SentiraError::ModelNotTrained);
        }

        let n_features = self.classes[0].feature_log_prob.len();
        if features.len() != n_features {
            return Err(SentiraError::invalid_feature_vector(format!(
                "expected {} features, got {}",
                n_features,
                features.len()
            )));
        }

        let log_scores: Vec<f64> = self
            .classes
            .iter()
            .map(|class| {
                let likelihood: f64 = features
                    .iter()
                    .zip(class.feature_log_prob.iter())
                    .filter(|(value, _)| **value != 0.0)
                    .map(|(value, log_prob)| value * log_prob)
                    .sum();
                class.prior.ln() + likelihood
            })
            .collect();

        // Stabilized softmax
        let max_score = log_scores
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let exp_scores: Vec<f64> = log_scores.iter().map(|s| (s - max_score).exp()).collect();
        let sum: f64 = exp_scores.iter().sum();

        Ok(self
            .classes
            .iter()
            .zip(exp_scores)
            .map(|(class, score)| (class.label.clone(), score / sum))
            .collect())
    }

    /// Predict the most probable label and its confidence.
    ///
    /// On exact probability ties the lexicographically smaller label wins.
    pub fn predict(&self, features: &[f64]) -> Result<Prediction> {
        let distribution = self.predict_distribution(features)?;

        // Classes are lexically ordered and the comparison is strict, so the
        // first of any tied pair is kept.
        let mut best = 0;
        for (index, (_, probability)) in distribution.iter().enumerate().skip(1) {
            if *probability > distribution[best].1 {
                best = index;
            }
        }

        let (label, confidence) = distribution.into_iter().nth(best).ok_or_else(|| {
            SentiraError::invalid_feature_vector("empty prediction distribution")
        })?;

        Ok(Prediction { label, confidence })
    }
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn fitted_classifier() -> MultinomialNb {
        let features = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.8, 0.2, 0.0],
            vec![0.0, 0.1, 0.9],
            vec![0.0, 0.0, 1.0],
        ];
        let mut nb = MultinomialNb::default();
        nb.fit(&features, &labels(&["positive", "positive", "negative", "negative"]))
            .unwrap();
        nb
    }

    #[test]
    fn test_priors_sum_to_one() {
        let nb = fitted_classifier();
        let sum: f64 = nb.classes().iter().map(|c| c.prior).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_likelihoods_strictly_positive() {
        let nb = fitted_classifier();
        for class in nb.classes() {
            // Log-likelihoods are finite, so probabilities never collapse to zero
            assert!(class.feature_log_prob.iter().all(|p| p.is_finite()));
        }
    }

    #[test]
    fn test_classes_lexically_ordered() {
        let nb = fitted_classifier();
        let ordered: Vec<&str> = nb.labels().collect();
        assert_eq!(ordered, vec!["negative", "positive"]);
    }

    #[test]
    fn test_distribution_is_proper() {
        let nb = fitted_classifier();
        let distribution = nb.predict_distribution(&[0.5, 0.0, 0.1]).unwrap();

        let sum: f64 = distribution.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(distribution.iter().all(|(_, p)| *p >= 0.0 && *p <= 1.0));
    }

    #[test]
    fn test_predict_picks_argmax() {
        let nb = fitted_classifier();

        let prediction = nb.predict(&[1.0, 0.0, 0.0]).unwrap();
        assert_eq!(prediction.label, "positive");
        assert!(prediction.confidence > 0.5);

        let prediction = nb.predict(&[0.0, 0.0, 1.0]).unwrap();
        assert_eq!(prediction.label, "negative");
        assert!(prediction.confidence > 0.5);
    }

    #[test]
    fn test_predict_before_fit() {
        let nb = MultinomialNb::default();
        let result = nb.predict_distribution(&[1.0]);
        assert!(matches!(result, Err(SentiraError::ModelNotTrained)));
    }

    #[test]
    fn test_fit_length_mismatch() {
        let mut nb = MultinomialNb::default();
        let result = nb.fit(&[vec![1.0]], &labels(&["positive", "negative"]));
        assert!(matches!(result, Err(SentiraError::InsufficientData(_))));
    }

    #[test]
    fn test_fit_empty() {
        let mut nb = MultinomialNb::default();
        let result = nb.fit(&[], &[]);
        assert!(matches!(result, Err(SentiraError::EmptyCorpus)));
    }

    #[test]
    fn test_fit_inconsistent_dimensions() {
        let mut nb = MultinomialNb::default();
        let result = nb.fit(
            &[vec![1.0, 0.0], vec![1.0]],
            &labels(&["positive", "negative"]),
        );
        assert!(matches!(result, Err(SentiraError::InvalidFeatureVector(_))));
    }

    #[test]
    fn test_fit_invalid_alpha() {
        let mut nb = MultinomialNb::new(0.0);
        let result = nb.fit(&[vec![1.0]], &labels(&["positive"]));
        assert!(matches!(result, Err(SentiraError::Config(_))));
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let nb = fitted_classifier();
        let result = nb.predict_distribution(&[1.0]);
        assert!(matches!(result, Err(SentiraError::InvalidFeatureVector(_))));
    }

    #[test]
    fn test_zero_vector_falls_back_to_priors() {
        let features = vec![
            vec![1.0, 0.0],
            vec![0.9, 0.1],
            vec![0.7, 0.3],
            vec![0.0, 1.0],
        ];
        let mut nb = MultinomialNb::default();
        nb.fit(&features, &labels(&["positive", "positive", "positive", "negative"]))
            .unwrap();

        // A zero vector carries no evidence; the majority prior decides
        let prediction = nb.predict(&[0.0, 0.0]).unwrap();
        assert_eq!(prediction.label, "positive");
        assert!(prediction.confidence >= 0.5 && prediction.confidence <= 1.0);
    }

    #[test]
    fn test_tie_breaks_lexicographically() {
        // Perfectly symmetric training data, zero-vector query: exact tie
        let features = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let mut nb = MultinomialNb::default();
        nb.fit(&features, &labels(&["zeta", "alpha"])).unwrap();

        let prediction = nb.predict(&[0.0, 0.0]).unwrap();
        assert_eq!(prediction.label, "alpha");
    }
}
