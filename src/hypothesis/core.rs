//! Provides `Classifier` trait.
use crate::common::{Matrix, utils};
use crate::error::Result;
use crate::Features;


/// A multiclass scoring function over feature tables.
pub trait Classifier {
    /// Returns the number of classes.
    fn n_class(&self) -> usize;


    /// Returns the `N × K` score matrix of `features`.
    fn scores(&self, features: &Features) -> Result<Matrix>;


    /// Predicts the class of every row,
    /// i.e., the first class of maximal score.
    fn predict_all(&self, features: &Features) -> Result<Vec<usize>> {
        let scores = self.scores(features)?;
        let predictions = scores.rows()
            .map(utils::argmax)
            .collect();
        Ok(predictions)
    }
}
