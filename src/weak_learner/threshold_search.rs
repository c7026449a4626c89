//! Optimal two-level threshold rule on a single feature column.
//!
//! For a multiclass training set with `K` classes and `N` examples,
//! finds the threshold and the per-class outputs minimizing
//! the weighted squared error
//! ```txt
//! J = sum_i sum_k w[i,k] (y[i,k] - f_k(x[i]))^2,
//! f_k(x) = a[k] if x > threshold else b[k],
//! ```
//! in `O(N log N + N K)` time.
//! This is Eq. 7 of Torralba et al., *Sharing visual features for
//! multiclass and multiview object detection*, IEEE PAMI 2007, except that
//! the outputs are not shared between classes and every example is used
//! for every class.
use crate::common::{Matrix, utils};


/// The best split of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// A value of the column. Examples strictly greater are "above".
    pub threshold: f64,
    /// Weighted squared error of the split.
    pub error: f64,
    /// Output for the examples above the threshold, one per class.
    pub alpha: Vec<f64>,
    /// Output for the examples at or below the threshold, one per class.
    pub beta: Vec<f64>,
}


/// Running weight mass of one class on one side of a split.
#[derive(Debug, Clone, Copy, Default)]
struct Mass {
    weighted_label: f64,
    weight: f64,
    positive: f64,
    negative: f64,
}


impl Mass {
    #[inline(always)]
    fn add(&mut self, y: f64, w: f64) {
        self.weighted_label += w * y;
        self.weight += w;
        if y > 0f64 {
            self.positive += w;
        } else if y < 0f64 {
            self.negative += w;
        }
    }


    /// The weighted mean label, i.e., the optimal constant output.
    #[inline(always)]
    fn output(&self) -> f64 {
        let denom = if self.weight <= 0f64 { 1f64 } else { self.weight };
        self.weighted_label / denom
    }


    /// Weighted squared error of the optimal constant output.
    #[inline(always)]
    fn residual(&self) -> f64 {
        let c = self.output();
        self.negative * (-1f64 - c).powi(2)
            + self.positive * (1f64 - c).powi(2)
    }
}


#[inline(always)]
fn accumulate(masses: &mut [Mass], labels: &[f64], weights: &[f64]) {
    masses.iter_mut()
        .zip(labels.iter().zip(weights))
        .for_each(|(m, (&y, &w))| m.add(y, w));
}


/// Returns the indices of `column` sorted by value.
/// The sort is stable, so ties keep their original order.
pub fn sorted_order(column: &[f64]) -> Vec<usize> {
    let mut order = (0..column.len()).collect::<Vec<_>>();
    order.sort_by(|&i, &j| column[i].total_cmp(&column[j]));
    order
}


/// Finds the optimal threshold on `column`.
/// `labels` and `weights` are `N × K`, `column` has length `N`.
/// Returns `None` only for an empty column.
pub fn search(labels: &Matrix, weights: &Matrix, column: &[f64])
    -> Option<Split>
{
    let order = sorted_order(column);
    search_sorted(labels, weights, column, &order)
}


/// Same as [`search`], with the sorted order of `column` precomputed.
pub(crate) fn search_sorted(
    labels: &Matrix,
    weights: &Matrix,
    column: &[f64],
    order: &[usize],
) -> Option<Split>
{
    let n_sample = order.len();
    if n_sample == 0 { return None; }
    let n_class = labels.shape().1;

    // Residual of the examples at or below each sorted position.
    let mut below = vec![Mass::default(); n_class];
    let mut error = Vec::with_capacity(n_sample);
    for &i in order {
        accumulate(&mut below, labels.row(i), weights.row(i));
        error.push(below.iter().map(Mass::residual).sum::<f64>());
    }

    // Residual of the examples strictly above each sorted position.
    // The suffix is accumulated on its own so that a pure side
    // yields outputs of exactly `±1`.
    let mut above = vec![Mass::default(); n_class];
    for (p, &i) in order.iter().enumerate().rev() {
        error[p] += above.iter().map(Mass::residual).sum::<f64>();
        accumulate(&mut above, labels.row(i), weights.row(i));
    }

    let mut idx = utils::argmin(&error[..]);

    // make sure we're at the top of this threshold
    while idx + 1 < n_sample && column[order[idx]] == column[order[idx + 1]] {
        idx += 1;
    }

    let (at_or_below, strictly_above) = order.split_at(idx + 1);

    let mut below = vec![Mass::default(); n_class];
    for &i in at_or_below {
        accumulate(&mut below, labels.row(i), weights.row(i));
    }
    let mut above = vec![Mass::default(); n_class];
    for &i in strictly_above.iter().rev() {
        accumulate(&mut above, labels.row(i), weights.row(i));
    }

    Some(Split {
        threshold: column[order[idx]],
        error: error[idx],
        alpha: above.iter().map(Mass::output).collect(),
        beta: below.iter().map(Mass::output).collect(),
    })
}
