//! Provides [`GentleBoostClassifier`].
use serde::{Serialize, Deserialize};

use super::trained_model::{Strategy, TrainedModel};
use crate::{
    Booster,
    CrossValidation,
    FastGentleBoost,
    Features,
    GentleStump,
    Sample,

    common::checker,
    common::constants::DEFAULT_SEED,
    error::{BoostError, Result},
    hypothesis::{Classifier, Model, parse_model, parse_one_vs_all},
};

use std::collections::HashMap;
use std::hash::Hash;
use std::io::{Read, Write};


/// The pair written by [`GentleBoostClassifier::save`].
#[derive(Serialize, Deserialize)]
struct PersistedModel {
    model: TrainedModel,
    bin_labels: Vec<String>,
}


/// A `FastGentleBoost` classifier with a fixed [`Strategy`],
/// holding at most one trained model
/// and the names of the classes ("bins") it predicts.
///
/// # Example
/// ```no_run
/// use gentleboost::prelude::*;
///
/// # let sample: Sample = unimplemented!();
/// let mut classifier = GentleBoostClassifier::new(Strategy::OneVsAll);
/// classifier.train(&sample, 20);
///
/// let text = classifier.show_model().unwrap();
/// let mut other = GentleBoostClassifier::new(Strategy::OneVsAll);
/// other.parse_model(&text).unwrap();
///
/// let positives = other.filter_class(0, sample.features()).unwrap();
/// println!("{} objects in {}", positives.len(), other.bin_labels()[0]);
/// ```
#[derive(Debug, Clone)]
pub struct GentleBoostClassifier {
    strategy: Strategy,
    model: Option<TrainedModel>,
    bin_labels: Vec<String>,
}


impl GentleBoostClassifier {
    /// Construct an untrained classifier.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy, model: None, bin_labels: Vec::new() }
    }


    /// Returns the strategy of this classifier.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }


    /// Returns `true` if the classifier holds a model.
    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }


    /// Drop the model and the class names.
    pub fn clear(&mut self) {
        self.model = None;
        self.bin_labels = Vec::new();
    }


    /// Returns the model, if any.
    pub fn model(&self) -> Option<&TrainedModel> {
        self.model.as_ref()
    }


    /// Returns the class names.
    pub fn bin_labels(&self) -> &[String] {
        &self.bin_labels[..]
    }


    /// Replace the class names.
    pub fn set_bin_labels(&mut self, bin_labels: Vec<String>) {
        self.bin_labels = bin_labels;
    }


    /// Train a new model with at most `n_rounds` rules per model.
    /// The class names are taken from `sample`.
    /// Returns `None` if `sample` has no example or no feature;
    /// the classifier is then untrained.
    pub fn train(&mut self, sample: &Sample, n_rounds: usize)
        -> Option<&TrainedModel>
    {
        self.train_with_progress(sample, n_rounds, |_| {})
    }


    /// Same as [`GentleBoostClassifier::train`],
    /// reporting the fraction of work done after every round.
    pub fn train_with_progress<F>(
        &mut self,
        sample: &Sample,
        n_rounds: usize,
        mut progress: F,
    ) -> Option<&TrainedModel>
        where F: FnMut(f64),
    {
        self.bin_labels = sample.class_names().to_vec();

        let model = match self.strategy {
            Strategy::Multiclass => {
                fit(sample, n_rounds, &mut progress)
                    .map(TrainedModel::Multiclass)
            },
            Strategy::OneVsAll => {
                let binaries = sample.one_vs_all();
                let n_runs = (binaries.len() + 1) as f64;

                let mut models = Vec::with_capacity(binaries.len() + 1);
                let samples = std::iter::once(sample).chain(&binaries);
                for (r, s) in samples.enumerate() {
                    let mut scaled = |p: f64| progress((r as f64 + p) / n_runs);
                    match fit(s, n_rounds, &mut scaled) {
                        Some(model) => models.push(model),
                        None => { models.clear(); break; },
                    }
                }
                (!models.is_empty()).then_some(TrainedModel::OneVsAll(models))
            },
        };

        self.model = model;
        self.model.as_ref()
    }


    /// Render the model in the text format.
    /// One-vs-all models are separated by a `----` line.
    /// Returns `None` when there is no model or the model has no rule.
    pub fn show_model(&self) -> Option<String> {
        self.model.as_ref()
            .filter(|model| model.models().iter().any(|m| !m.is_empty()))
            .map(TrainedModel::render)
    }


    /// Replace the model by the one written in `text`.
    /// On failure, the current model is kept.
    pub fn parse_model(&mut self, text: &str) -> Result<&TrainedModel> {
        let model = match self.strategy {
            Strategy::Multiclass => TrainedModel::Multiclass(parse_model(text)?),
            Strategy::OneVsAll => TrainedModel::OneVsAll(parse_one_vs_all(text)?),
        };
        Ok(&*self.model.insert(model))
    }


    /// Predict the class of every row of `features`.
    pub fn predict_all(&self, features: &Features) -> Result<Vec<usize>> {
        self.trained()?.predict_all(features)
    }


    /// Returns the rows of `features` that belong to `class`.
    /// One-vs-all uses the binary model of `class` only.
    pub fn filter_class(&self, class: usize, features: &Features)
        -> Result<Vec<usize>>
    {
        let model = self.trained()?;
        let n_class = model.n_class();
        if class >= n_class {
            return Err(BoostError::UnknownClass { class, n_class });
        }

        let (predictions, positive) = match model {
            TrainedModel::Multiclass(model) => {
                (model.predict_all(features)?, class)
            },
            TrainedModel::OneVsAll(models) => {
                (models[class + 1].predict_all(features)?, 0)
            },
        };

        let rows = predictions.into_iter()
            .enumerate()
            .filter_map(|(i, p)| (p == positive).then_some(i))
            .collect();
        Ok(rows)
    }


    /// Count the predicted classes of `features` per group
    /// (e.g. per image).
    /// Groups are listed in order of first appearance.
    pub fn per_group_counts<G>(&self, features: &Features, groups: &[G])
        -> Result<Vec<(G, Vec<usize>)>>
        where G: Eq + Hash + Clone,
    {
        checker::group_count(features.shape().0, groups.len())?;
        let model = self.trained()?;
        let n_class = model.n_class();
        let predictions = model.predict_all(features)?;

        let mut index = HashMap::new();
        let mut counts: Vec<(G, Vec<usize>)> = Vec::new();
        for (group, class) in groups.iter().zip(predictions) {
            let k = *index.entry(group).or_insert_with(|| {
                counts.push((group.clone(), vec![0usize; n_class]));
                counts.len() - 1
            });
            // an empty model predicts class `0` of no class
            if let Some(count) = counts[k].1.get_mut(class) {
                *count += 1;
            }
        }
        Ok(counts)
    }


    /// Group-aware cross-validation of a multiclass model.
    /// See [`CrossValidation::run`].
    pub fn xvalidate<G, F>(
        &self,
        sample: &Sample,
        n_rounds: usize,
        n_folds: usize,
        groups: &[G],
        progress: F,
    ) -> Result<Vec<usize>>
        where G: Eq + Hash,
              F: FnMut(f64),
    {
        CrossValidation::new(sample, groups)?
            .n_folds(n_folds)
            .seed(DEFAULT_SEED)
            .progress(progress)
            .run(n_rounds)
    }


    /// Write the model and the class names as JSON.
    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        let model = self.trained()?.clone();
        let persisted = PersistedModel {
            model,
            bin_labels: self.bin_labels.clone(),
        };
        serde_json::to_writer(writer, &persisted)?;
        Ok(())
    }


    /// Read a model written by [`GentleBoostClassifier::save`].
    /// On failure, the classifier is cleared.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<()> {
        self.clear();
        let persisted: PersistedModel = serde_json::from_reader(reader)?;

        let found = persisted.model.strategy();
        if found != self.strategy {
            return Err(BoostError::StrategyMismatch {
                expected: self.strategy.name(),
                found: found.name(),
            });
        }

        self.model = Some(persisted.model);
        self.bin_labels = persisted.bin_labels;
        Ok(())
    }


    fn trained(&self) -> Result<&TrainedModel> {
        self.model.as_ref().ok_or(BoostError::NotTrained)
    }
}


fn fit<F>(sample: &Sample, n_rounds: usize, progress: &mut F) -> Option<Model>
    where F: FnMut(f64),
{
    let weak_learner = GentleStump::init(sample);
    FastGentleBoost::init(sample)
        .n_rounds(n_rounds)
        .progress(|p| progress(p))
        .run(&weak_learner)
}
