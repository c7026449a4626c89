//! Provides [`FastGentleBoost`].
use rayon::prelude::*;
use colored::Colorize;

use super::worst_margin::WorstMargin;
use crate::{
    Booster,
    WeakLearner,
    Features,
    Sample,

    common::{checker, utils, Matrix},
    common::constants::{DEFAULT_N_ROUNDS, PRINT_WIDTH},
    error::Result,
    hypothesis::{Model, Rule},
    weak_learner::Stump,
};

use std::ops::ControlFlow;


const WIDTH: usize = PRINT_WIDTH;


/// Defines `FastGentleBoost`.
///
/// Every round, the weak learner returns the threshold rule
/// minimizing the weighted squared error
/// `sum_{i,k} w[i,k] (y[i,k] - f_k(x[i]))^2`,
/// the rule outputs are added to the class scores `F`,
/// and the weights are updated as
/// `w[i,k] ∝ balancing[i,k] * exp(-F[i,k] y[i,k])`.
/// The balancing weights give every class the same total mass,
/// whatever its number of examples.
///
/// The run stops after `n_rounds` rounds,
/// or right after a rule of zero weighted error.
///
/// # Example
/// ```no_run
/// use gentleboost::prelude::*;
///
/// let names = ["area", "intensity"];
/// let rows = vec![
///     vec![0.0, 0.5], vec![0.1, 0.5],
///     vec![1.0, 0.0], vec![1.3, 0.1],
///     vec![1.1, 1.0], vec![1.2, 1.1],
/// ];
/// let features = Features::from_rows(&names, &rows).unwrap();
/// let labels = LabelMatrix::from_classes(&[0, 0, 1, 1, 2, 2], 3).unwrap();
/// let sample = Sample::new(features, labels).unwrap();
///
/// let weak_learner = GentleStump::init(&sample);
/// let mut booster = FastGentleBoost::init(&sample)
///     .n_rounds(2)
///     .verbose(true);
///
/// let model = booster.run(&weak_learner).unwrap();
/// println!("{model}");
///
/// let predictions = model.predict_all(sample.features()).unwrap();
/// assert_eq!(predictions, vec![0, 0, 1, 1, 2, 2]);
/// ```
pub struct FastGentleBoost<'a> {
    // Training sample
    sample: &'a Sample,

    // Optional rows scored after every round.
    held_out: Option<&'a Features>,

    // Maximal number of rounds.
    n_rounds: usize,

    // Called with `round / n_rounds` after every round.
    progress: Option<Box<dyn FnMut(f64) + 'a>>,

    verbose: bool,

    // Weights on (example, class) pairs.
    weights: Matrix,

    // Initial weights. Fixed during a run.
    balancing: Matrix,

    // Accumulated outputs of the rules on the training sample.
    scores: Matrix,

    // Accumulated outputs of the rules on `held_out`.
    held_out_scores: Matrix,

    worst_margin: WorstMargin,

    rules: Vec<Rule>,
    errors: Vec<f64>,
    held_out_predictions: Vec<Vec<usize>>,

    // Number of rounds run.
    terminated: usize,
}


impl<'a> FastGentleBoost<'a> {
    /// Initialize the `FastGentleBoost`.
    /// The default number of rounds is `20`.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,
            held_out: None,
            n_rounds: DEFAULT_N_ROUNDS,
            progress: None,
            verbose: false,

            weights: Matrix::zeros(0, 0),
            balancing: Matrix::zeros(0, 0),
            scores: Matrix::zeros(0, 0),
            held_out_scores: Matrix::zeros(0, 0),
            worst_margin: WorstMargin::new(Vec::new(), 0),

            rules: Vec::new(),
            errors: Vec::new(),
            held_out_predictions: Vec::new(),

            terminated: 0,
        }
    }


    /// Set the maximal number of rounds.
    pub fn n_rounds(mut self, n_rounds: usize) -> Self {
        self.n_rounds = n_rounds;
        self
    }


    /// Score `features` with the rules found so far after every round.
    /// See [`FastGentleBoost::held_out_predictions`].
    /// The columns of `features` must be
    /// the columns of the training sample, in the same order.
    pub fn held_out(mut self, features: &'a Features) -> Result<Self> {
        checker::feature_count(self.sample.shape().1, features.shape().1)?;
        self.held_out = Some(features);
        Ok(self)
    }


    /// Register a function called after every round
    /// with the fraction of rounds done.
    pub fn progress<F>(mut self, progress: F) -> Self
        where F: FnMut(f64) + 'a
    {
        self.progress = Some(Box::new(progress));
        self
    }


    /// Print one line per round.
    /// Default value is `false`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the weighted squared error of the rule of each round.
    pub fn errors(&self) -> &[f64] {
        &self.errors[..]
    }


    /// Returns, for each round, the predicted class of every
    /// held-out row under the rules found up to that round.
    /// Empty if no held-out rows were given.
    pub fn held_out_predictions(&self) -> &[Vec<usize>] {
        &self.held_out_predictions[..]
    }


    /// Returns the number of rounds run.
    pub fn terminated(&self) -> usize {
        self.terminated
    }


    fn is_degenerate(&self) -> bool {
        let (n_sample, n_feature) = self.sample.shape();
        n_sample == 0 || n_feature == 0 || self.sample.n_class() == 0
    }


    /// Returns the weights after adding the latest rule.
    fn reweight(&self) -> Matrix {
        let signs = self.sample.labels().signs();

        let mut weights = self.balancing.clone();
        weights.as_mut_slice()
            .par_iter_mut()
            .zip(self.scores.as_slice())
            .zip(signs.as_slice())
            .for_each(|((w, f), y)| { *w *= (-f * y).exp(); });

        utils::normalize(weights.as_mut_slice());
        checker::simplex_condition(weights.as_slice());
        weights
    }


    fn print_header(&self) {
        println!(
            "{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "ROUND".bold().red(),
            "FEATURE".bold().blue(),
            "THRESHOLD".bold().green(),
            "ERROR".bold().yellow(),
            "MARGIN".bold().cyan(),
        );
    }


    fn print_round(&self, iteration: usize, rule: &Rule, error: f64) {
        let margin = rule.margin
            .map(|m| format!("{m:.5}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            format!("{iteration}").red(),
            rule.feature.as_str().blue(),
            format!("{:.5}", rule.threshold).green(),
            format!("{error:.5}").yellow(),
            margin.cyan(),
        );
    }
}


impl<'a> Booster<Stump> for FastGentleBoost<'a> {
    type Output = Option<Model>;


    fn name(&self) -> &str {
        "FastGentleBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let held_out = self.held_out
            .map(|f| format!("{}", f.shape().0))
            .unwrap_or_else(|| "-".to_string());
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("# of classes", format!("{}", self.sample.n_class())),
            ("Max rounds", format!("{}", self.n_rounds)),
            ("Held-out rows", held_out),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        let (n_sample, _) = self.sample.shape();
        let n_class = self.sample.n_class();
        let labels = self.sample.labels();

        self.rules = Vec::new();
        self.errors = Vec::new();
        self.held_out_predictions = Vec::new();
        self.terminated = 0;

        // Every class gets the same total weight.
        let counts = labels.class_counts();
        let mut weights = Matrix::zeros(n_sample, n_class);
        for i in 0..n_sample {
            let w = 1f64 / counts[labels.class_of(i)] as f64;
            weights.row_mut(i).fill(w);
        }
        utils::normalize(weights.as_mut_slice());

        self.balancing = weights.clone();
        self.weights = weights;
        self.scores = Matrix::zeros(n_sample, n_class);

        let n_held_out = self.held_out.map(|f| f.shape().0).unwrap_or(0);
        self.held_out_scores = Matrix::zeros(n_held_out, n_class);

        let class_weights = (0..n_sample)
            .map(|i| self.balancing[(i, 0)])
            .collect();
        self.worst_margin = WorstMargin::new(class_weights, n_class);

        if self.verbose && !self.is_degenerate() {
            self.print_header();
        }
    }


    fn boost<W>(&mut self, weak_learner: &W, iteration: usize)
        -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = Stump>,
    {
        if self.is_degenerate() || iteration > self.n_rounds {
            return ControlFlow::Break(self.terminated);
        }

        let sample = self.sample;
        let Some(stump) = weak_learner.produce(sample, &self.weights) else {
            return ControlFlow::Break(self.terminated);
        };

        let column = sample.features().column(stump.feature);
        for (i, &value) in column.iter().enumerate() {
            self.scores.row_mut(i)
                .iter_mut()
                .zip(stump.output(value))
                .for_each(|(f, o)| { *f += o; });
        }

        let margin = self.worst_margin.update(
            sample.labels().classes(),
            column.iter().map(|&value| stump.output(value)),
        );

        let reweights = self.reweight();

        if let Some(held_out) = self.held_out {
            let column = held_out.column(stump.feature);
            for (i, &value) in column.iter().enumerate() {
                self.held_out_scores.row_mut(i)
                    .iter_mut()
                    .zip(stump.output(value))
                    .for_each(|(f, o)| { *f += o; });
            }
            let predictions = self.held_out_scores.rows()
                .map(utils::argmax)
                .collect::<Vec<_>>();
            self.held_out_predictions.push(predictions);
        }

        let feature = sample.features().features()[stump.feature].name();
        let rule = Rule::new(feature, stump.threshold, stump.alpha, stump.beta)
            .with_margin(margin);

        if self.verbose {
            self.print_round(iteration, &rule, stump.error);
        }

        self.rules.push(rule);
        self.errors.push(stump.error);
        self.terminated = iteration;

        if let Some(progress) = self.progress.as_mut() {
            progress(iteration as f64 / self.n_rounds as f64);
        }

        if stump.error == 0f64 {
            return ControlFlow::Break(iteration);
        }

        self.weights = reweights;

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Self::Output {
        if self.is_degenerate() { return None; }
        Some(Model::from_rules(self.rules.clone()))
    }
}
