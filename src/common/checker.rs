//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::common::constants::SIMPLEX_TOLERANCE;
use crate::error::{BoostError, Result};


/// Check whether the label matrix and the values have the same height.
#[inline(always)]
pub(crate) fn shape(n_labels: usize, n_values: usize) -> Result<()> {
    if n_labels != n_values {
        return Err(BoostError::ShapeMismatch {
            labels: n_labels,
            values: n_values,
        });
    }
    Ok(())
}


/// Check whether two feature tables have the same width.
#[inline(always)]
pub(crate) fn feature_count(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(BoostError::FeatureCount { expected, got });
    }
    Ok(())
}


/// Check whether there is one group key per example.
#[inline(always)]
pub(crate) fn group_count(n_sample: usize, n_groups: usize) -> Result<()> {
    if n_sample != n_groups {
        return Err(BoostError::GroupCount {
            expected: n_sample,
            got: n_groups,
        });
    }
    Ok(())
}


/// Check the number of folds.
#[inline(always)]
pub(crate) fn n_folds(n_folds: usize) {
    assert!(n_folds > 0, "the number of folds must be positive. got {n_folds}.");
}


/// Check that the weights form a distribution.
/// Only called in debug builds.
#[inline(always)]
pub(crate) fn simplex_condition(slice: &[f64]) {
    let sum = slice.iter().sum::<f64>();
    debug_assert!(
        (sum - 1f64).abs() < SIMPLEX_TOLERANCE,
        "sum(weights[..]) = {sum}"
    );
    debug_assert!(
        slice.iter().all(|w| *w >= 0f64),
        "weights must be non-negative"
    );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_success() {
        assert!(shape(3, 3).is_ok());
    }

    #[test]
    fn test_shape_failure() {
        let err = shape(3, 4).unwrap_err();
        assert!(matches!(
            err, BoostError::ShapeMismatch { labels: 3, values: 4 }
        ));
    }

    #[test]
    fn test_group_count_failure() {
        assert!(group_count(5, 4).is_err());
    }

    #[test]
    #[should_panic]
    fn test_n_folds_failure() {
        n_folds(0);
    }
}
