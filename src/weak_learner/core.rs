//! Provides `WeakLearner` trait.
use crate::common::Matrix;
use crate::Sample;


/// An interface for weak learners.
/// Given a training sample and an `N × K` weight matrix
/// (one weight per example and per class),
/// a weak learner returns a hypothesis
/// that has low weighted squared error on the sample.
pub trait WeakLearner {
    /// The hypothesis returned by this weak learner.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Produce a hypothesis minimizing the weighted error
    /// with respect to `weights`.
    /// Returns `None` if `sample` has no example or no feature.
    fn produce(&self, sample: &Sample, weights: &Matrix)
        -> Option<Self::Hypothesis>;
}
