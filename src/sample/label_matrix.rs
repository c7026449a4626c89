//! Signed multiclass labels.
use crate::common::Matrix;
use crate::error::{BoostError, Result};


/// An `N × K` matrix whose rows hold exactly one `+1`
/// (the class of the example) and `-1` elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMatrix {
    signs: Matrix,
    classes: Vec<usize>,
}


impl LabelMatrix {
    /// Build the signed matrix from 0-based class indices.
    pub fn from_classes(classes: &[usize], n_class: usize) -> Result<Self> {
        if let Some(&class) = classes.iter().find(|&&c| c >= n_class) {
            return Err(BoostError::UnknownClass { class, n_class });
        }

        let rows = classes.iter()
            .map(|&c| {
                (0..n_class).map(|k| if k == c { 1f64 } else { -1f64 })
                    .collect::<Vec<_>>()
            });
        let signs = Matrix::from_rows(n_class, rows);

        Ok(Self { signs, classes: classes.to_vec() })
    }


    /// Build the matrix from signed rows.
    /// Each row must have length `n_class`,
    /// exactly one `+1` and `-1` everywhere else.
    pub fn from_signs(n_class: usize, rows: Vec<Vec<f64>>) -> Result<Self> {
        let mut classes = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let n_pos = row.iter().filter(|&&y| y == 1f64).count();
            let n_neg = row.iter().filter(|&&y| y == -1f64).count();
            if row.len() != n_class || n_pos != 1 || n_pos + n_neg != n_class {
                return Err(BoostError::InvalidLabelRow { row: i });
            }
            let class = row.iter()
                .position(|&y| y == 1f64)
                .ok_or(BoostError::InvalidLabelRow { row: i })?;
            classes.push(class);
        }
        let signs = Matrix::from_rows(n_class, rows);

        Ok(Self { signs, classes })
    }


    /// Returns the number of examples.
    pub fn n_sample(&self) -> usize {
        self.classes.len()
    }


    /// Returns the number of classes `K`.
    pub fn n_class(&self) -> usize {
        self.signs.shape().1
    }


    /// Returns the signed `N × K` matrix.
    pub fn signs(&self) -> &Matrix {
        &self.signs
    }


    /// Returns the 0-based class of every example.
    pub fn classes(&self) -> &[usize] {
        &self.classes[..]
    }


    /// Returns the 0-based class of the `i`-th example.
    pub fn class_of(&self, i: usize) -> usize {
        self.classes[i]
    }


    /// Returns the number of examples of each class.
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_class()];
        self.classes.iter()
            .for_each(|&c| { counts[c] += 1; });
        counts
    }


    /// Relabel class `k` as the positive column `0`
    /// and every other class as column `1`.
    pub fn one_vs_all(&self, k: usize) -> Self {
        let classes = self.classes.iter()
            .map(|&c| if c == k { 0 } else { 1 })
            .collect::<Vec<_>>();
        let rows = classes.iter()
            .map(|&c| if c == 0 { vec![1f64, -1f64] } else { vec![-1f64, 1f64] });
        let signs = Matrix::from_rows(2, rows);

        Self { signs, classes }
    }


    /// Returns the labels of the given rows, in the given order.
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        let signs = self.signs.select_rows(rows);
        let classes = rows.iter()
            .map(|&i| self.classes[i])
            .collect();
        Self { signs, classes }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_to_signs() {
        let labels = LabelMatrix::from_classes(&[0, 2, 1], 3).unwrap();
        assert_eq!(labels.signs().row(1), &[-1.0, -1.0, 1.0]);
        assert_eq!(labels.class_counts(), vec![1, 1, 1]);
        assert_eq!(labels.class_of(2), 1);
    }

    #[test]
    fn signs_to_classes() {
        let rows = vec![vec![-1.0, 1.0], vec![1.0, -1.0]];
        let labels = LabelMatrix::from_signs(2, rows).unwrap();
        assert_eq!(labels.classes(), &[1, 0]);
    }

    #[test]
    fn two_positive_entries_are_rejected() {
        let rows = vec![vec![1.0, -1.0], vec![1.0, 1.0]];
        let err = LabelMatrix::from_signs(2, rows).unwrap_err();
        assert!(matches!(err, BoostError::InvalidLabelRow { row: 1 }));
    }

    #[test]
    fn out_of_range_class_is_rejected() {
        assert!(LabelMatrix::from_classes(&[0, 3], 3).is_err());
    }

    #[test]
    fn one_vs_all_puts_the_class_first() {
        let labels = LabelMatrix::from_classes(&[0, 1, 2, 1], 3).unwrap();
        let binary = labels.one_vs_all(1);
        assert_eq!(binary.n_class(), 2);
        assert_eq!(binary.classes(), &[1, 0, 1, 0]);
        assert_eq!(binary.signs().row(1), &[1.0, -1.0]);
    }
}
