//! Deterministic train/evaluation corpus splitting.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::document::Document;
use crate::error::{Result, SentiraError};

/// Split a labeled corpus into training and evaluation partitions.
///
/// The split is stratified: documents are grouped per label (labels visited
/// in lexical order), each group is shuffled with a single seeded generator,
/// and `floor(group_size * eval_ratio)` documents are held out, capped so
/// every label keeps at least one training example. The same corpus and seed
/// always produce the same partitions.
pub(crate) fn stratified_split<'a>(
    corpus: &'a [Document],
    eval_ratio: f64,
    seed: u64,
) -> Result<(Vec<&'a Document>, Vec<&'a Document>)> {
    if !(0.0..1.0).contains(&eval_ratio) {
        return Err(SentiraError::invalid_config(format!(
            "eval_ratio must be in [0, 1), got {eval_ratio}"
        )));
    }

    let mut groups: BTreeMap<&str, Vec<&Document>> = BTreeMap::new();
    for doc in corpus {
        let label = doc.label().ok_or_else(|| {
            SentiraError::insufficient_data("training corpus contains an unlabeled document")
        })?;
        groups.entry(label).or_default().push(doc);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut training = Vec::new();
    let mut evaluation = Vec::new();

    for (_, mut docs) in groups {
        docs.shuffle(&mut rng);

        let mut held_out = (docs.len() as f64 * eval_ratio).floor() as usize;
        if held_out >= docs.len() {
            held_out = docs.len() - 1;
        }

        evaluation.extend_from_slice(&docs[..held_out]);
        training.extend_from_slice(&docs[held_out..]);
    }

    Ok((training, evaluation))
}
