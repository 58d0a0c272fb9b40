//! # Sentira
//!
//! A text sentiment classification engine for short free-text feedback.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - TF-IDF feature extraction with a configurable analysis pipeline
//! - Multinomial naive Bayes classification with additive smoothing
//! - Deterministic, seeded train/evaluation splitting
//! - Versioned, atomically published model artifacts

pub mod analysis;
pub mod artifact;
pub mod classifier;
pub mod cli;
pub mod document;
pub mod error;
pub mod feature;
pub mod model;
pub mod pipeline;

pub use classifier::Prediction;
pub use document::Document;
pub use model::SentimentModel;
pub use pipeline::{TrainingConfig, train};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
