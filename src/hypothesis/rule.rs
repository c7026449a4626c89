//! A single threshold rule of a boosted model.
use serde::{Serialize, Deserialize};

use std::fmt;


/// The weak hypothesis stored in a [`Model`](super::Model).
/// For an example whose value of `feature` is `v`,
/// the rule adds `alpha` to the class scores if `v > threshold`
/// and `beta` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Name of the feature the rule reads.
    pub feature: String,
    /// Decision threshold.
    pub threshold: f64,
    /// Class outputs above the threshold.
    pub alpha: Vec<f64>,
    /// Class outputs at or below the threshold.
    pub beta: Vec<f64>,
    /// Expected worst margin of the training sample
    /// after this rule was added.
    /// Diagnostic only. Not stored in the text format.
    pub margin: Option<f64>,
}


impl Rule {
    /// Construct a new rule without margin.
    ///
    /// # Panics
    /// Panics if `alpha` and `beta` have different lengths.
    /// Text input is checked by [`parse_model`](super::parse_model),
    /// which reports [`ParseError::Cardinality`](crate::ParseError::Cardinality) instead.
    pub fn new<T: ToString>(
        feature: T,
        threshold: f64,
        alpha: Vec<f64>,
        beta: Vec<f64>,
    ) -> Self
    {
        assert_eq!(
            alpha.len(), beta.len(),
            "alpha and beta must have the same length"
        );
        Self {
            feature: feature.to_string(),
            threshold,
            alpha,
            beta,
            margin: None,
        }
    }


    /// Attach the expected worst margin.
    pub fn with_margin(mut self, margin: Option<f64>) -> Self {
        self.margin = margin;
        self
    }


    /// Returns the number of classes.
    pub fn n_class(&self) -> usize {
        self.alpha.len()
    }


    /// Returns the class outputs for a value of the feature.
    #[inline]
    pub fn output(&self, value: f64) -> &[f64] {
        if value > self.threshold { &self.alpha[..] } else { &self.beta[..] }
    }
}


struct Vector<'a>(&'a [f64]);


impl fmt::Display for Vector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, v) in self.0.iter().enumerate() {
            if k > 0 { write!(f, ", ")?; }
            write!(f, "{v:?}")?;
        }
        write!(f, "]")
    }
}


/// Writes `IF (<feature> > <threshold>, [<alpha>, ...], [<beta>, ...])`.
/// Numbers use the shortest representation that reads back exactly.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IF ({} > {:?}, {}, {})",
            self.feature,
            self.threshold,
            Vector(&self.alpha),
            Vector(&self.beta),
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_one_rule() {
        let rule = Rule::new("Intensity", 0.5, vec![-1.0, 0.25], vec![1.0, -0.25]);
        assert_eq!(
            rule.to_string(),
            "IF (Intensity > 0.5, [-1.0, 0.25], [1.0, -0.25])"
        );
    }

    #[test]
    fn output_is_strictly_above() {
        let rule = Rule::new("x", 1.0, vec![1.0], vec![-1.0]);
        assert_eq!(rule.output(1.0), &[-1.0]);
        assert_eq!(rule.output(1.5), &[1.0]);
    }

    #[test]
    #[should_panic(expected = "alpha and beta must have the same length")]
    fn mismatched_outputs_panic() {
        let _ = Rule::new("x", 1.0, vec![1.0, -1.0, 0.0], vec![1.0, -1.0]);
    }
}
