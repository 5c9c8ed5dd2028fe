use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::dataset::LabeledSample;
use crate::error::{EngineError, Result};

/// A train/test partition of a labeled dataset.
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Vec<LabeledSample>,
    pub test: Vec<LabeledSample>,
}

/// Split `samples` so each label keeps roughly its share in both halves.
///
/// Every label with at least two samples contributes at least one test
/// sample and keeps at least one training sample. Labels with a single
/// sample go entirely to training. The same `seed` always yields the same
/// split.
pub fn stratified_split(samples: &[LabeledSample], test_size: f64, seed: u64) -> Result<Split> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(EngineError::Training(format!(
            "test_size must be within (0, 1), got {test_size}"
        )));
    }

    let mut by_label: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, sample) in samples.iter().enumerate() {
        by_label.entry(sample.label.as_str()).or_default().push(index);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_indices = Vec::new();
    let mut test_indices = Vec::new();

    for indices in by_label.values_mut() {
        indices.shuffle(&mut rng);
        let total = indices.len();
        let n_test = if total < 2 {
            0
        } else {
            ((total as f64 * test_size).round() as usize).clamp(1, total - 1)
        };
        test_indices.extend_from_slice(&indices[..n_test]);
        train_indices.extend_from_slice(&indices[n_test..]);
    }

    train_indices.shuffle(&mut rng);
    test_indices.shuffle(&mut rng);

    let pick = |indices: &[usize]| -> Vec<LabeledSample> {
        indices.iter().map(|&i| samples[i].clone()).collect()
    };

    Ok(Split {
        train: pick(&train_indices),
        test: pick(&test_indices),
    })
}
