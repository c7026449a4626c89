//! The additive model built by `FastGentleBoost`.
use serde::{Serialize, Deserialize};

use super::core::Classifier;
use super::rule::Rule;
use super::text_format;
use crate::common::Matrix;
use crate::error::{BoostError, ParseError, Result};
use crate::Features;

use std::fmt;
use std::str::FromStr;


/// An ordered sequence of [`Rule`]s.
/// The score of class `k` is the sum of the `k`-th outputs of all rules,
/// so the order of rules only matters for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    rules: Vec<Rule>,
}


impl Model {
    /// Construct an empty model.
    pub fn new() -> Self {
        Self::default()
    }


    /// Construct a model from rules.
    /// All rules must have the same number of classes.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        if let Some(first) = rules.first() {
            let n_class = first.n_class();
            assert!(
                rules.iter().all(|rule| rule.n_class() == n_class),
                "all rules must have the same number of classes"
            );
        }
        Self { rules }
    }


    /// Append a rule.
    pub fn push(&mut self, rule: Rule) {
        if let Some(first) = self.rules.first() {
            assert_eq!(
                first.n_class(), rule.n_class(),
                "all rules must have the same number of classes"
            );
        }
        self.rules.push(rule);
    }


    /// Returns the rules in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules[..]
    }


    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }


    /// Returns `true` if the model has no rule.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }


    /// Returns the model made of the first `n` rules.
    pub fn truncated(&self, n: usize) -> Self {
        let rules = self.rules.iter()
            .take(n)
            .cloned()
            .collect();
        Self { rules }
    }
}


impl Classifier for Model {
    /// `0` for an empty model.
    fn n_class(&self) -> usize {
        self.rules.first()
            .map(Rule::n_class)
            .unwrap_or(0)
    }


    fn scores(&self, features: &Features) -> Result<Matrix> {
        let n_sample = features.shape().0;
        let mut scores = Matrix::zeros(n_sample, self.n_class());
        for rule in &self.rules {
            let j = features.index_of(&rule.feature)
                .ok_or_else(|| BoostError::UnknownFeature(rule.feature.clone()))?;
            let column = features.column(j);
            for (i, &value) in column.iter().enumerate() {
                scores.row_mut(i)
                    .iter_mut()
                    .zip(rule.output(value))
                    .for_each(|(s, o)| { *s += o; });
            }
        }
        Ok(scores)
    }
}


impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", text_format::render_model(self))
    }
}


impl FromStr for Model {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        text_format::parse_model(s)
    }
}
