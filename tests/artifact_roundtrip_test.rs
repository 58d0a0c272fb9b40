//! Model artifact persistence scenarios.

use sentira::artifact;
use sentira::document::Document;
use sentira::error::SentiraError;
use sentira::model::SentimentModel;
use sentira::pipeline::{TrainingConfig, train};
use tempfile::TempDir;

fn trained_model() -> SentimentModel {
    let mut corpus = Vec::new();
    for _ in 0..5 {
        corpus.push(Document::labeled("great job on the project", "positive"));
        corpus.push(Document::labeled("frustrated with the delays", "negative"));
    }
    train(&corpus, &TrainingConfig::default()).unwrap()
}

#[test]
fn round_trip_preserves_prediction_behavior() {
    let model = trained_model();
    let bytes = artifact::save(&model).unwrap();
    let reloaded = artifact::load(&bytes).unwrap();

    for text in [
        "great job today",
        "the delays are frustrating",
        "something entirely different",
        "",
    ] {
        let original = model.predict(text).unwrap();
        let restored = reloaded.predict(text).unwrap();
        assert_eq!(original.label, restored.label);
        assert_eq!(original.confidence.to_bits(), restored.confidence.to_bits());
    }
}

#[test]
fn round_trip_preserves_metadata() {
    let model = trained_model();
    let reloaded = artifact::load(&artifact::save(&model).unwrap()).unwrap();

    assert_eq!(
        reloaded.metadata().training_examples,
        model.metadata().training_examples
    );
    assert_eq!(reloaded.metadata().evaluation, model.metadata().evaluation);
    assert_eq!(reloaded.metadata().trained_at, model.metadata().trained_at);
}

#[test]
fn file_round_trip_through_temp_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sentiment_model.sntr");

    let model = trained_model();
    artifact::save_to_path(&model, &path).unwrap();
    assert!(path.exists());

    let reloaded = artifact::load_from_path(&path).unwrap();
    assert_eq!(
        reloaded.predict("great job").unwrap().label,
        model.predict("great job").unwrap().label
    );
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("model.sntr");

    artifact::save_to_path(&trained_model(), &path).unwrap();

    let names: Vec<String> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["model.sntr".to_string()]);
}

#[test]
fn save_overwrites_existing_artifact_atomically() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("model.sntr");

    let model = trained_model();
    artifact::save_to_path(&model, &path).unwrap();
    artifact::save_to_path(&model, &path).unwrap();

    let reloaded = artifact::load_from_path(&path).unwrap();
    assert_eq!(
        reloaded.predict("great job").unwrap().label,
        model.predict("great job").unwrap().label
    );
}

#[test]
fn corrupt_bytes_are_rejected() {
    let mut bytes = artifact::save(&trained_model()).unwrap();

    // Garble the payload
    let mid = bytes.len() / 2;
    for byte in &mut bytes[mid..] {
        *byte = byte.wrapping_add(1);
    }
    // Truncate so the payload cannot decode by accident
    bytes.truncate(mid + 3);

    let result = artifact::load(&bytes);
    assert!(matches!(result, Err(SentiraError::CorruptArtifact(_))));
}

#[test]
fn unknown_version_is_refused() {
    let mut bytes = artifact::save(&trained_model()).unwrap();
    bytes[4..8].copy_from_slice(&2u32.to_le_bytes());

    match artifact::load(&bytes) {
        Err(SentiraError::CorruptArtifact(message)) => {
            assert!(message.contains("version"));
        }
        other => panic!("expected CorruptArtifact, got {other:?}"),
    }
}

#[test]
fn random_garbage_is_refused() {
    let result = artifact::load(b"definitely not a model artifact");
    assert!(matches!(result, Err(SentiraError::CorruptArtifact(_))));
}
