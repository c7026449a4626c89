use crate::common::Matrix;


/// Running "expected worst margin" of the training sample.
///
/// For each example and each wrong class, the per-round score gap
/// `output[true] - output[wrong]` is added to `correct` when positive
/// and its negation to `incorrect` otherwise.
/// The relative margin of a pair is `correct / (correct + incorrect)`;
/// each example keeps its worst wrong class,
/// and the examples are averaged with their balancing weight.
pub(super) struct WorstMargin {
    correct: Matrix,
    incorrect: Matrix,
    weights: Vec<f64>,
}


impl WorstMargin {
    /// `weights` holds one balancing weight per example.
    pub(super) fn new(weights: Vec<f64>, n_class: usize) -> Self {
        let n_sample = weights.len();
        let n_wrong = n_class.saturating_sub(1);
        Self {
            correct: Matrix::zeros(n_sample, n_wrong),
            incorrect: Matrix::zeros(n_sample, n_wrong),
            weights,
        }
    }


    /// Add one round of outputs and return the new expected worst margin.
    /// Returns `None` when it is undefined:
    /// a single class, or a pair that never got a non-zero gap.
    pub(super) fn update<'b, I>(&mut self, classes: &[usize], outputs: I)
        -> Option<f64>
        where I: Iterator<Item = &'b [f64]>
    {
        if self.correct.shape().1 == 0 { return None; }

        let mut numer = 0f64;
        let mut denom = 0f64;
        for (i, (output, &class)) in outputs.zip(classes).enumerate() {
            let on_class = output[class];
            let wrong = output.iter()
                .enumerate()
                .filter_map(|(k, &o)| (k != class).then_some(o));

            let correct = self.correct.row_mut(i);
            let incorrect = self.incorrect.row_mut(i);

            let mut worst = f64::INFINITY;
            for ((c, w), o) in correct.iter_mut().zip(incorrect).zip(wrong) {
                let gap = on_class - o;
                if gap > 0f64 {
                    *c += gap;
                } else {
                    *w -= gap;
                }
                let ratio = *c / (*c + *w);
                worst = if worst.is_nan() || ratio.is_nan() {
                    f64::NAN
                } else {
                    worst.min(ratio)
                };
            }

            numer += self.weights[i] * worst;
            denom += self.weights[i];
        }

        let margin = numer / denom;
        margin.is_finite().then_some(margin)
    }
}
