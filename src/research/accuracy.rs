//! Accuracy of `FastGentleBoost` as a function of the number of rules,
//! estimated by group-aware cross-validation.
use super::cross_validation::CrossValidation;
use crate::{
    Sample,
    common::constants::{HALF_SPLIT_REPEATS, FINE_SPLIT_FOLDS},
    error::Result,
};

use std::hash::Hash;


/// Cross-validated accuracy curves.
/// The `r`-th entry of each curve is the accuracy of the model
/// made of the first `r + 1` rules.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyCurves {
    /// Mean accuracy of ten repetitions of 2-fold cross-validation,
    /// i.e., training on 50% of the groups.
    pub fifty_percent: Vec<f64>,
    /// Accuracy of 20-fold cross-validation,
    /// i.e., training on 95% of the groups.
    pub ninety_five_percent: Vec<f64>,
    /// Accuracy of a uniform random guess, `1 / K`.
    pub chance: f64,
}


impl AccuracyCurves {
    /// Compute both curves for `1..=n_rounds` rules.
    /// The `r`-th 2-fold repetition is shuffled with `seed + r`.
    pub fn compute<G>(
        sample: &Sample,
        n_rounds: usize,
        groups: &[G],
        seed: u64,
    ) -> Result<Self>
        where G: Eq + Hash,
    {
        Self::compute_with_progress(sample, n_rounds, groups, seed, |_| {})
    }


    /// Same as [`AccuracyCurves::compute`],
    /// reporting the overall fraction of work done after every fold.
    pub fn compute_with_progress<G, F>(
        sample: &Sample,
        n_rounds: usize,
        groups: &[G],
        seed: u64,
        mut progress: F,
    ) -> Result<Self>
        where G: Eq + Hash,
              F: FnMut(f64),
    {
        let n_sample = sample.shape().0 as f64;
        let accuracy = |misclassified: Vec<usize>| {
            misclassified.into_iter()
                .map(|m| 1f64 - m as f64 / n_sample)
                .collect::<Vec<_>>()
        };

        // Cost of a run is proportional to `n_folds * (1 - 1 / n_folds)`.
        let half_cost = 2f64 * (1f64 - 1f64 / 2f64);
        let fine_cost = FINE_SPLIT_FOLDS as f64
            * (1f64 - 1f64 / FINE_SPLIT_FOLDS as f64);
        let total = HALF_SPLIT_REPEATS as f64 * half_cost + fine_cost;

        let mut fifty_percent = vec![0f64; n_rounds];
        for r in 0..HALF_SPLIT_REPEATS {
            let offset = r as f64 * half_cost / total;
            let misclassified = CrossValidation::new(sample, groups)?
                .n_folds(2)
                .seed(seed.wrapping_add(r as u64))
                .progress(|p| progress(offset + p * half_cost / total))
                .run(n_rounds)?;

            fifty_percent.iter_mut()
                .zip(accuracy(misclassified))
                .for_each(|(acc, a)| {
                    *acc += a / HALF_SPLIT_REPEATS as f64;
                });
        }

        let offset = HALF_SPLIT_REPEATS as f64 * half_cost / total;
        let misclassified = CrossValidation::new(sample, groups)?
            .n_folds(FINE_SPLIT_FOLDS)
            .seed(seed)
            .progress(|p| progress(offset + p * fine_cost / total))
            .run(n_rounds)?;
        let ninety_five_percent = accuracy(misclassified);

        let chance = 1f64 / sample.n_class() as f64;

        Ok(Self { fifty_percent, ninety_five_percent, chance })
    }
}
