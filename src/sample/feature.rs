//! Named numeric feature columns.
use polars::prelude::{DataFrame, DataType};

use crate::common::checker;
use crate::error::{BoostError, Result};

use std::collections::HashMap;
use std::ops::Index;


/// A single named column of measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature name
    pub(crate) name: String,
    /// Feature values, one per example.
    pub(crate) values: Vec<f64>,
}


impl Feature {
    /// Construct a new feature column.
    pub fn new<T: ToString>(name: T, values: Vec<f64>) -> Self {
        Self { name: name.to_string(), values }
    }


    /// Returns the name of this feature.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the values of this feature.
    pub fn values(&self) -> &[f64] {
        &self.values[..]
    }


    /// Returns the number of examples.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if the column has no example.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.values[idx]
    }
}


/// An `N × J` table of measurements stored column by column.
/// Column `j` is named `names()[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    name_to_index: HashMap<String, usize>,
    features: Vec<Feature>,
    n_sample: usize,
}


impl Features {
    /// Construct a table from named columns.
    pub fn from_columns<S>(names: &[S], columns: Vec<Vec<f64>>) -> Result<Self>
        where S: ToString,
    {
        checker::feature_count(names.len(), columns.len())?;

        let features = names.iter()
            .zip(columns)
            .map(|(name, values)| Feature::new(name.to_string(), values))
            .collect::<Vec<_>>();

        Self::from_features(features)
    }


    /// Construct a table from rows of measurements.
    /// Every row must have one value per name.
    pub fn from_rows<S>(names: &[S], rows: &[Vec<f64>]) -> Result<Self>
        where S: ToString,
    {
        let n_feature = names.len();
        let mut columns = vec![Vec::with_capacity(rows.len()); n_feature];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_feature {
                return Err(BoostError::RaggedRows {
                    row: i,
                    expected: n_feature,
                    got: row.len(),
                });
            }
            for (column, x) in columns.iter_mut().zip(row) {
                column.push(*x);
            }
        }

        let mut features = Self::from_columns(names, columns)?;
        features.n_sample = rows.len();
        Ok(features)
    }


    /// Construct a table from already built columns.
    /// Names must be distinct, non-empty and free of whitespace.
    pub fn from_features(features: Vec<Feature>) -> Result<Self> {
        let n_sample = features.first()
            .map(Feature::len)
            .unwrap_or(0);

        if let Some(feat) = features.iter().find(|f| f.len() != n_sample) {
            return Err(BoostError::RaggedColumns {
                name: feat.name.clone(),
                expected: n_sample,
                got: feat.len(),
            });
        }

        let mut name_to_index = HashMap::with_capacity(features.len());
        for (i, feat) in features.iter().enumerate() {
            let name = feat.name();
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(BoostError::InvalidFeatureName(name.to_string()));
            }
            if name_to_index.insert(name.to_string(), i).is_some() {
                return Err(BoostError::DuplicateFeature(name.to_string()));
            }
        }

        Ok(Self { name_to_index, features, n_sample })
    }


    /// Convert every column of a `polars::DataFrame` to `f64`.
    /// Missing entries are read as `0`.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self> {
        let mut features = Vec::with_capacity(data.width());
        for series in data.get_columns() {
            let values = series.cast(&DataType::Float64)?
                .f64()?
                .into_iter()
                .map(|x| x.unwrap_or(0f64))
                .collect::<Vec<_>>();
            features.push(Feature::new(series.name(), values));
        }

        let mut table = Self::from_features(features)?;
        table.n_sample = data.height();
        Ok(table)
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.features.len())
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature names in column order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.features.iter().map(Feature::name)
    }


    /// Returns the `j`-th column.
    pub fn column(&self, j: usize) -> &[f64] {
        self.features[j].values()
    }


    /// Returns the column index of the feature named `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }


    /// Returns the `i`-th row.
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.features.iter()
            .map(|feat| feat[i])
            .collect()
    }


    /// Returns the sub-table made of the given rows, in the given order.
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| {
                let values = rows.iter()
                    .map(|&i| feat[i])
                    .collect::<Vec<_>>();
                Feature::new(feat.name(), values)
            })
            .collect::<Vec<_>>();

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            n_sample: rows.len(),
        }
    }
}


impl<S> Index<S> for Features
    where S: AsRef<str>
{
    type Output = Feature;

    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = self.index_of(name)
            .unwrap_or_else(|| panic!("The feature named `{name}` does not exist"));
        &self.features[k]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_become_columns() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let table = Features::from_rows(&["a", "b"], &rows).unwrap();
        assert_eq!(table.shape(), (3, 2));
        assert_eq!(table.column(1), &[2.0, 4.0, 6.0]);
        assert_eq!(table.index_of("b"), Some(1));
        assert_eq!(table["a"][2], 5.0);
        assert_eq!(table.row(1), vec![3.0, 4.0]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = Features::from_rows(&["a", "b"], &rows).unwrap_err();
        assert!(matches!(err, BoostError::RaggedRows { row: 1, .. }));
    }

    #[test]
    fn names_must_match_columns() {
        let err = Features::from_columns(&["a"], vec![vec![1.0], vec![2.0]])
            .unwrap_err();
        assert!(matches!(
            err, BoostError::FeatureCount { expected: 1, got: 2 }
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Features::from_columns(
            &["x", "x"],
            vec![vec![0.0, 1.0, 2.0, 3.0], vec![5.0; 4]],
        ).unwrap_err();
        assert!(matches!(err, BoostError::DuplicateFeature(name) if name == "x"));
    }

    #[test]
    fn names_must_be_single_tokens() {
        let err = Features::from_rows(&["Nuclei Area"], &[vec![1.0]])
            .unwrap_err();
        assert!(matches!(
            err, BoostError::InvalidFeatureName(name) if name == "Nuclei Area"
        ));
        assert!(Features::from_rows(&[""], &[vec![1.0]]).is_err());
        assert!(Features::from_rows(&["Nuclei.Area"], &[vec![1.0]]).is_ok());
    }

    #[test]
    fn rows_without_columns_keep_their_count() {
        let rows = vec![vec![], vec![]];
        let table = Features::from_rows::<&str>(&[], &rows).unwrap();
        assert_eq!(table.shape(), (2, 0));
    }
}
