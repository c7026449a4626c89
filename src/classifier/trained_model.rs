//! The model held by a trained classifier.
use serde::{Serialize, Deserialize};

use crate::{
    Features,
    common::Matrix,
    error::Result,
    hypothesis::{Classifier, Model},
    hypothesis::{render_model, render_one_vs_all},
};


/// How a [`GentleBoostClassifier`](super::GentleBoostClassifier)
/// turns a multiclass sample into models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// One model scoring all classes.
    Multiclass,
    /// The multiclass model followed by one binary model per class.
    OneVsAll,
}


impl Strategy {
    /// Returns the name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Multiclass => "multiclass",
            Self::OneVsAll => "one-vs-all",
        }
    }
}


/// A trained model of either strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrainedModel {
    /// A single `K`-class model.
    Multiclass(Model),
    /// `K + 1` models: the `K`-class model,
    /// then the binary model of class `k` at index `k + 1`.
    /// Column `0` of a binary model is its class.
    OneVsAll(Vec<Model>),
}


impl TrainedModel {
    /// Returns the strategy this model was built with.
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Multiclass(_) => Strategy::Multiclass,
            Self::OneVsAll(_) => Strategy::OneVsAll,
        }
    }


    /// Returns the underlying models.
    pub fn models(&self) -> &[Model] {
        match self {
            Self::Multiclass(model) => std::slice::from_ref(model),
            Self::OneVsAll(models) => &models[..],
        }
    }


    /// Render the text format.
    pub fn render(&self) -> String {
        match self {
            Self::Multiclass(model) => render_model(model),
            Self::OneVsAll(models) => render_one_vs_all(models),
        }
    }
}


impl Classifier for TrainedModel {
    fn n_class(&self) -> usize {
        match self {
            Self::Multiclass(model) => model.n_class(),
            Self::OneVsAll(models) => models.len().saturating_sub(1),
        }
    }


    /// For one-vs-all, the score of class `k` is
    /// the positive-column score of its binary model.
    fn scores(&self, features: &Features) -> Result<Matrix> {
        let models = match self {
            Self::Multiclass(model) => { return model.scores(features); },
            Self::OneVsAll(models) => models,
        };

        let n_sample = features.shape().0;
        let n_class = self.n_class();
        let mut scores = Matrix::zeros(n_sample, n_class);
        for (k, model) in models.iter().skip(1).enumerate() {
            let binary = model.scores(features)?;
            for i in 0..n_sample {
                scores[(i, k)] = binary.row(i).first().copied().unwrap_or(0f64);
            }
        }
        Ok(scores)
    }
}
