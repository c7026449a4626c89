//! The exhaustive single-feature threshold learner
//! used by `FastGentleBoost`.
use rayon::prelude::*;

use super::core::WeakLearner;
use super::threshold_search::{self, Split};
use crate::common::Matrix;
use crate::Sample;


/// A single-feature threshold rule with one output per class.
/// For the example `x`, the output of class `k` is
/// `alpha[k]` if `x[feature] > threshold` and `beta[k]` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Stump {
    /// Column index of the feature.
    pub feature: usize,
    /// Decision threshold. A value present in the training column.
    pub threshold: f64,
    /// Weighted squared error on the training sample.
    pub error: f64,
    /// Outputs above the threshold.
    pub alpha: Vec<f64>,
    /// Outputs at or below the threshold.
    pub beta: Vec<f64>,
}


impl Stump {
    fn from_split(feature: usize, split: Split) -> Self {
        let Split { threshold, error, alpha, beta } = split;
        Self { feature, threshold, error, alpha, beta }
    }


    /// Returns the per-class outputs for a value of the feature.
    #[inline]
    pub fn output(&self, value: f64) -> &[f64] {
        if value > self.threshold { &self.alpha[..] } else { &self.beta[..] }
    }
}


/// `GentleStump` scans every feature column with
/// [`threshold_search`] and keeps the split of least error.
/// Ties between features go to the lowest column index.
///
/// The sorted order of every column does not depend on the weights,
/// so it is computed once in [`GentleStump::init`].
///
/// # Example
/// ```no_run
/// use gentleboost::prelude::*;
///
/// # let features: Features = unimplemented!();
/// # let labels: LabelMatrix = unimplemented!();
/// let sample = Sample::new(features, labels).unwrap();
/// let weak_learner = GentleStump::init(&sample)
///     .parallel(true);
/// let mut booster = FastGentleBoost::init(&sample)
///     .n_rounds(10);
/// let model = booster.run(&weak_learner);
/// ```
pub struct GentleStump {
    orders: Vec<Vec<usize>>,
    parallel: bool,
}


impl GentleStump {
    /// Sort every column of `sample`.
    pub fn init(sample: &Sample) -> Self {
        let features = sample.features();
        let n_feature = features.shape().1;
        let orders = (0..n_feature).into_par_iter()
            .map(|j| threshold_search::sorted_order(features.column(j)))
            .collect::<Vec<_>>();

        Self { orders, parallel: true }
    }


    /// Search the columns in parallel.
    /// Default value is `true`.
    /// The selected rule is the same either way.
    pub fn parallel(mut self, flag: bool) -> Self {
        self.parallel = flag;
        self
    }


    fn split_of(
        &self,
        sample: &Sample,
        weights: &Matrix,
        j: usize,
    ) -> Option<Split>
    {
        let labels = sample.labels().signs();
        let column = sample.features().column(j);
        let order = &self.orders[j];
        // A weak learner built for another sample sorts on the fly.
        if order.len() != column.len() {
            return threshold_search::search(labels, weights, column);
        }
        threshold_search::search_sorted(labels, weights, column, order)
    }
}


impl WeakLearner for GentleStump {
    type Hypothesis = Stump;


    fn name(&self) -> &str {
        "Gentle Stump"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of features", format!("{}", self.orders.len())),
            ("Parallel", format!("{}", self.parallel)),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample, weights: &Matrix) -> Option<Stump> {
        let n_feature = sample.shape().1;
        debug_assert_eq!(weights.shape(), sample.labels().signs().shape());

        let splits = if self.parallel {
            (0..n_feature).into_par_iter()
                .map(|j| self.split_of(sample, weights, j))
                .collect::<Vec<_>>()
        } else {
            (0..n_feature)
                .map(|j| self.split_of(sample, weights, j))
                .collect::<Vec<_>>()
        };

        let mut best: Option<Stump> = None;
        for (j, split) in splits.into_iter().enumerate() {
            let Some(split) = split else { continue; };
            let improves = best.as_ref()
                .map_or(true, |stump| split.error < stump.error);
            if improves {
                best = Some(Stump::from_split(j, split));
            }
        }
        best
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Features, LabelMatrix};

    fn sample() -> Sample {
        // Column `b` separates the classes, column `a` does not.
        let rows = vec![
            vec![0.0, 1.0],
            vec![1.0, 2.0],
            vec![0.0, 3.0],
            vec![1.0, 4.0],
        ];
        let features = Features::from_rows(&["a", "b"], &rows).unwrap();
        let labels = LabelMatrix::from_classes(&[0, 0, 1, 1], 2).unwrap();
        Sample::new(features, labels).unwrap()
    }

    #[test]
    fn picks_the_separating_column() {
        let sample = sample();
        let weights = Matrix::filled(4, 2, 0.125);
        let stump = GentleStump::init(&sample)
            .produce(&sample, &weights)
            .unwrap();
        assert_eq!(stump.feature, 1);
        assert_eq!(stump.threshold, 2.0);
        assert_eq!(stump.error, 0.0);
        assert_eq!(stump.output(3.0), &[-1.0, 1.0]);
        assert_eq!(stump.output(2.0), &[1.0, -1.0]);
    }

    #[test]
    fn serial_and_parallel_agree() {
        let sample = sample();
        let weights = Matrix::filled(4, 2, 0.125);
        let serial = GentleStump::init(&sample)
            .parallel(false)
            .produce(&sample, &weights);
        let parallel = GentleStump::init(&sample)
            .produce(&sample, &weights);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn ties_go_to_the_first_column() {
        let rows = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let features = Features::from_rows(&["a", "b"], &rows).unwrap();
        let labels = LabelMatrix::from_classes(&[0, 1], 2).unwrap();
        let sample = Sample::new(features, labels).unwrap();
        let weights = Matrix::filled(2, 2, 0.25);
        let stump = GentleStump::init(&sample)
            .produce(&sample, &weights)
            .unwrap();
        assert_eq!(stump.feature, 0);
    }

    #[test]
    fn no_feature_no_stump() {
        let rows = vec![vec![], vec![]];
        let features = Features::from_rows::<&str>(&[], &rows).unwrap();
        let labels = LabelMatrix::from_classes(&[0, 1], 2).unwrap();
        let sample = Sample::new(features, labels).unwrap();
        let weights = Matrix::filled(2, 2, 0.25);
        assert!(GentleStump::init(&sample).produce(&sample, &weights).is_none());
    }
}
