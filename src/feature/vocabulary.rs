//! Vocabulary: the fixed set of terms the feature extractor recognizes.

use std::collections::HashMap;

/// A mapping from normalized term to a dense vector index.
///
/// Indices are dense in `[0, len)` with no duplicate terms. The ordering is
/// fixed at build time, so retraining on identical input order reproduces an
/// identical vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Term -> index mapping.
    index: HashMap<String, usize>,
    /// Terms in index order.
    terms: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from terms in index order.
    ///
    /// Duplicate terms keep their first index; later occurrences are ignored.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Vocabulary::default();
        for term in terms {
            vocabulary.insert(term.into());
        }
        vocabulary
    }

    fn insert(&mut self, term: String) {
        if !self.index.contains_key(&term) {
            self.index.insert(term.clone(), self.terms.len());
            self.terms.push(term);
        }
    }

    /// Get the index for a term, if it is in the vocabulary.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Check whether a term is in the vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Get the term at the given index.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Terms in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms in the vocabulary.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
