//! Command line argument parsing for the sentira CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::classifier::DEFAULT_ALPHA;
use crate::feature::DEFAULT_MAX_TERMS;
use crate::pipeline::{DEFAULT_EVAL_RATIO, DEFAULT_SEED};

/// Sentira - a text sentiment classification engine
#[derive(Parser, Debug, Clone)]
#[command(name = "sentira")]
#[command(about = "A text sentiment classification engine for short free-text feedback")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentiraArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentiraArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a sentiment model from a labeled corpus
    Train(TrainArgs),

    /// Predict the sentiment of a text with a trained model
    Predict(PredictArgs),
}

/// Arguments for training a model
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Corpus file path (JSON array of {"text", "label"} records)
    #[arg(short, long, value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// Output path for the model artifact
    #[arg(short, long, value_name = "MODEL_FILE")]
    pub output: PathBuf,

    /// Fraction of each label's examples held out for evaluation
    #[arg(long, default_value_t = DEFAULT_EVAL_RATIO)]
    pub eval_ratio: f64,

    /// Seed for the deterministic train/evaluation split
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Additive smoothing constant for the classifier
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f64,

    /// Maximum vocabulary size
    #[arg(long, default_value_t = DEFAULT_MAX_TERMS)]
    pub max_terms: usize,
}

/// Arguments for predicting with a trained model
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Model artifact path
    #[arg(short, long, value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// Text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,
}
