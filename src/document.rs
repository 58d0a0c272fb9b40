//! Document types and corpus loading.
//!
//! A [`Document`] is a single free-text submission, optionally carrying the
//! sentiment label used for training. Documents are immutable once created.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A raw text document with an optional sentiment label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Raw input text.
    #[serde(rename = "text")]
    content: String,
    /// Sentiment label, present for training documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Document {
    /// Create a new unlabeled document.
    pub fn new<S: Into<String>>(content: S) -> Self {
        Document {
            content: content.into(),
            label: None,
        }
    }

    /// Create a new labeled training document.
    pub fn labeled<S: Into<String>, L: Into<String>>(content: S, label: L) -> Self {
        Document {
            content: content.into(),
            label: Some(label.into()),
        }
    }

    /// Get the raw text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the sentiment label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Load a training corpus from a JSON file.
///
/// The file must contain a JSON array of `{"text": ..., "label": ...}`
/// records.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let content = std::fs::read_to_string(path)?;
    let documents: Vec<Document> = serde_json::from_str(&content)?;
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::labeled("great job", "positive");
        assert_eq!(doc.content(), "great job");
        assert_eq!(doc.label(), Some("positive"));

        let doc = Document::new("how do I submit feedback?");
        assert!(doc.label().is_none());
    }

    #[test]
    fn test_document_json_shape() {
        let doc: Document =
            serde_json::from_str(r#"{"text": "this is bad", "label": "negative"}"#).unwrap();
        assert_eq!(doc.content(), "this is bad");
        assert_eq!(doc.label(), Some("negative"));

        // Label is optional
        let doc: Document = serde_json::from_str(r#"{"text": "unlabeled"}"#).unwrap();
        assert!(doc.label().is_none());
    }

    #[test]
    fn test_load_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        std::fs::write(
            &path,
            r#"[
                {"text": "great job", "label": "positive"},
                {"text": "this is bad", "label": "negative"}
            ]"#,
        )
        .unwrap();

        let corpus = load_corpus(&path).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].label(), Some("positive"));
        assert_eq!(corpus[1].content(), "this is bad");
    }

    #[test]
    fn test_load_corpus_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load_corpus(&path).is_err());
    }
}
