//! TF-IDF vectorizer for text feature extraction.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::document::Document;
use crate::error::{Result, SentiraError};
use crate::feature::WeightingConfig;
use crate::feature::vocabulary::Vocabulary;

/// TF-IDF vectorizer for text feature extraction.
///
/// `fit` builds a capped vocabulary with inverse document frequencies from a
/// training corpus; `transform` maps any text onto that fixed vocabulary.
/// `transform` is a pure function of the fitted state and the input text.
pub struct TfIdfVectorizer {
    /// Weighting configuration (vocabulary cap, stop words).
    config: WeightingConfig,
    /// Learned vocabulary: term -> index mapping.
    vocabulary: Vocabulary,
    /// Inverse document frequency per vocabulary index.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

fn build_analyzer(config: &WeightingConfig) -> Result<Arc<dyn Analyzer>> {
    let analyzer = match &config.stop_words {
        Some(words) => StandardAnalyzer::with_stop_words(words.iter().cloned())?,
        None => StandardAnalyzer::new()?,
    };
    Ok(Arc::new(analyzer))
}

impl TfIdfVectorizer {
    /// Create a new unfitted TF-IDF vectorizer.
    pub fn new(config: WeightingConfig) -> Result<Self> {
        let analyzer = build_analyzer(&config)?;
        Ok(Self {
            config,
            vocabulary: Vocabulary::default(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        })
    }

    /// Reconstruct a fitted vectorizer from persisted state.
    pub(crate) fn from_parts(
        config: WeightingConfig,
        terms: Vec<String>,
        idf: Vec<f64>,
        n_documents: usize,
    ) -> Result<Self> {
        let analyzer = build_analyzer(&config)?;
        Ok(Self {
            config,
            vocabulary: Vocabulary::from_terms(terms),
            idf,
            n_documents,
            analyzer,
        })
    }

    /// Fit the vectorizer on a training corpus.
    ///
    /// Builds the vocabulary in first-seen order, capped at
    /// `config.max_terms`. When truncation is needed, terms are selected by
    /// document frequency with ties broken by first-seen order, so retraining
    /// on identical input order reproduces the same vocabulary.
    pub fn fit(&mut self, documents: &[Document]) -> Result<()> {
        if documents.is_empty() {
            return Err(SentiraError::EmptyCorpus);
        }

        let mut first_seen: Vec<String> = Vec::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        // Build candidate terms and count document frequencies. Tokens are
        // visited in document order so first-seen ordering is reproducible.
        for doc in documents {
            let tokens = self.tokenize(doc.content())?;
            let mut seen_in_doc: HashSet<String> = HashSet::new();

            for token in tokens {
                if !seen_in_doc.insert(token.clone()) {
                    continue;
                }
                match document_frequency.get_mut(&token) {
                    Some(count) => *count += 1,
                    None => {
                        first_seen.push(token.clone());
                        document_frequency.insert(token, 1);
                    }
                }
            }
        }

        let mut selected = first_seen;
        if selected.len() > self.config.max_terms {
            // Stable sort keeps first-seen order for equal frequencies
            selected.sort_by(|a, b| document_frequency[b].cmp(&document_frequency[a]));
            selected.truncate(self.config.max_terms);
        }

        let vocabulary = Vocabulary::from_terms(selected);

        // IDF = log((N + 1) / (df + 1)) + 1
        let n_documents = documents.len();
        let mut idf = vec![0.0; vocabulary.len()];
        for (index, term) in vocabulary.terms().iter().enumerate() {
            let df = document_frequency.get(term).copied().unwrap_or(0);
            idf[index] = ((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = n_documents;

        Ok(())
    }

    /// Transform text into a TF-IDF feature vector.
    ///
    /// Tokens absent from the vocabulary contribute no weight. Text with no
    /// recognized tokens yields the all-zero vector, which is a valid,
    /// non-error result.
    pub fn transform(&self, text: &str) -> Result<Vec<f64>> {
        if !self.is_fitted() {
            return Err(SentiraError::ModelNotTrained);
        }

        let tokens = self.tokenize(text)?;
        let mut weights = vec![0.0; self.vocabulary.len()];

        // Count term frequencies for in-vocabulary tokens
        for token in &tokens {
            if let Some(index) = self.vocabulary.get(token) {
                weights[index] += 1.0;
            }
        }

        // Normalize by document length
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for weight in &mut weights {
                *weight /= doc_length;
            }
        }

        // Apply IDF
        for (index, weight) in weights.iter_mut().enumerate() {
            *weight *= self.idf[index];
        }

        Ok(weights)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens)
    }

    /// Check whether the vectorizer has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.n_documents > 0
    }

    /// Get the learned vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the inverse document frequency table, indexed by vocabulary index.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Total number of documents seen during fitting.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Get the weighting configuration.
    pub fn config(&self) -> &WeightingConfig {
        &self.config
    }
}
