//! Command implementations for the sentira CLI.

use serde_json::json;

use crate::artifact;
use crate::cli::args::{Command, OutputFormat, PredictArgs, SentiraArgs, TrainArgs};
use crate::document;
use crate::error::Result;
use crate::feature::WeightingConfig;
use crate::pipeline::{self, TrainingConfig};

/// Execute a CLI command.
pub fn execute_command(args: SentiraArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train_model(train_args.clone(), &args),
        Command::Predict(predict_args) => predict_text(predict_args.clone(), &args),
    }
}

/// Train a model from a corpus file and save the artifact.
fn train_model(args: TrainArgs, cli_args: &SentiraArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Loading corpus from: {}", args.corpus.display());
    }

    let corpus = document::load_corpus(&args.corpus)?;
    if cli_args.verbosity() > 1 {
        println!("Loaded {} documents", corpus.len());
    }

    let config = TrainingConfig {
        eval_ratio: args.eval_ratio,
        seed: args.seed,
        alpha: args.alpha,
        weighting: WeightingConfig {
            max_terms: args.max_terms,
            stop_words: None,
        },
    };

    let model = pipeline::train(&corpus, &config)?;
    artifact::save_to_path(&model, &args.output)?;

    match cli_args.output_format {
        OutputFormat::Human => {
            if cli_args.verbosity() > 0 {
                println!("{}", model.metadata().evaluation);
                println!("Model saved to: {}", args.output.display());
            }
        }
        OutputFormat::Json => {
            let result = json!({
                "output": args.output.display().to_string(),
                "training_examples": model.metadata().training_examples,
                "evaluation": &model.metadata().evaluation,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

/// Load a model artifact and classify a text.
fn predict_text(args: PredictArgs, cli_args: &SentiraArgs) -> Result<()> {
    let model = artifact::load_from_path(&args.model)?;
    let prediction = model.predict(&args.text)?;

    match cli_args.output_format {
        OutputFormat::Human => {
            println!(
                "{} (confidence: {:.2})",
                prediction.label, prediction.confidence
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&prediction)?);
        }
    }

    Ok(())
}
