//! Text analysis pipeline for feature extraction.
//!
//! Raw text flows through a tokenizer and a chain of token filters before it
//! reaches the vectorizer:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! The [`StandardAnalyzer`] bundles the default pipeline for sentiment
//! classification: word tokenization, lowercasing, and stop word removal.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter, StopFilter};
pub use tokenizer::{Tokenizer, WordTokenizer};
