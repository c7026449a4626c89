use polars::prelude::{DataFrame, DataType};

use super::feature::Features;
use super::label_matrix::LabelMatrix;
use crate::common::checker;
use crate::error::Result;

use std::collections::HashMap;


/// Struct `Sample` holds a labeled training set:
/// an `N × J` table of measurements,
/// the `N × K` signed label matrix,
/// and one display name per class.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) features: Features,
    pub(super) labels: LabelMatrix,
    pub(super) class_names: Vec<String>,
}


impl Sample {
    /// Pair measurements with labels.
    /// Classes are named `"1"`, `"2"`, ... until
    /// [`Sample::with_class_names`] is called.
    pub fn new(features: Features, labels: LabelMatrix) -> Result<Self> {
        checker::shape(labels.n_sample(), features.shape().0)?;

        let class_names = (1..=labels.n_class())
            .map(|k| k.to_string())
            .collect();

        Ok(Self { features, labels, class_names })
    }


    /// Replace the class names.
    /// This method panics when the number of names is
    /// not equal to the number of classes.
    pub fn with_class_names<S: ToString>(mut self, names: &[S]) -> Self {
        assert_eq!(
            names.len(), self.n_class(),
            "The number of class names is not equal to the number of classes"
        );
        self.class_names = names.iter()
            .map(|name| name.to_string())
            .collect();
        self
    }


    /// Convert `polars::DataFrame` into `Sample`.
    /// The column named `target` holds the class of each row;
    /// its distinct values become the classes,
    /// numbered in order of first appearance.
    /// All other columns are cast to `f64`.
    pub fn from_dataframe<S>(mut data: DataFrame, target: S) -> Result<Self>
        where S: AsRef<str>,
    {
        let target = data.drop_in_place(target.as_ref())?
            .cast(&DataType::Utf8)?;

        let mut class_names: Vec<String> = Vec::new();
        let mut name_to_class = HashMap::new();
        let mut classes = Vec::with_capacity(target.len());
        for value in target.utf8()?.into_iter() {
            let name = value.unwrap_or("None");
            let class = match name_to_class.get(name) {
                Some(&class) => class,
                None => {
                    let class = class_names.len();
                    name_to_class.insert(name.to_string(), class);
                    class_names.push(name.to_string());
                    class
                },
            };
            classes.push(class);
        }

        let features = Features::from_dataframe(&data)?;
        let labels = LabelMatrix::from_classes(&classes, class_names.len())?;

        Ok(Self::new(features, labels)?.with_class_names(&class_names))
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        self.features.shape()
    }


    /// Returns the number of classes.
    pub fn n_class(&self) -> usize {
        self.labels.n_class()
    }


    /// Returns the measurements.
    pub fn features(&self) -> &Features {
        &self.features
    }


    /// Returns the signed labels.
    pub fn labels(&self) -> &LabelMatrix {
        &self.labels
    }


    /// Returns the class names.
    pub fn class_names(&self) -> &[String] {
        &self.class_names[..]
    }


    /// Returns the sub-sample made of the given rows, in the given order.
    pub fn select(&self, rows: &[usize]) -> Self {
        Self {
            features: self.features.select_rows(rows),
            labels: self.labels.select_rows(rows),
            class_names: self.class_names.clone(),
        }
    }


    /// Returns one binary sample per class.
    /// In the `k`-th sample, column `0` marks class `k`
    /// and column `1` marks every other class.
    pub fn one_vs_all(&self) -> Vec<Self> {
        (0..self.n_class()).map(|k| {
                let name = &self.class_names[k];
                Self {
                    features: self.features.clone(),
                    labels: self.labels.one_vs_all(k),
                    class_names: vec![name.clone(), format!("not {name}")],
                }
            })
            .collect()
    }
}
