//! A dense, row-major matrix of `f64`.
//!
//! Every N×K quantity of the boosting loop
//! (signed labels, weights, accumulated scores)
//! is stored in a [`Matrix`].
use serde::{Serialize, Deserialize};
use std::ops::{Index, IndexMut};


/// Dense row-major matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}


impl Matrix {
    /// Construct an `n_rows × n_cols` matrix filled with `value`.
    pub fn filled(n_rows: usize, n_cols: usize, value: f64) -> Self {
        Self { n_rows, n_cols, data: vec![value; n_rows * n_cols] }
    }


    /// Construct an `n_rows × n_cols` zero matrix.
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self::filled(n_rows, n_cols, 0f64)
    }


    /// Construct a matrix from its rows.
    /// All rows must have length `n_cols`.
    pub(crate) fn from_rows<I>(n_cols: usize, rows: I) -> Self
        where I: IntoIterator<Item = Vec<f64>>,
    {
        let mut data = Vec::new();
        let mut n_rows = 0;
        for row in rows {
            debug_assert_eq!(row.len(), n_cols);
            data.extend(row);
            n_rows += 1;
        }
        Self { n_rows, n_cols, data }
    }


    /// Returns the pair `(n_rows, n_cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }


    /// Returns the `i`-th row.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }


    /// Returns the `i`-th row as a mutable slice.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }


    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.n_rows).map(move |i| self.row(i))
    }


    /// Returns the `k`-th column as a new vector.
    pub fn column(&self, k: usize) -> Vec<f64> {
        self.rows().map(|row| row[k]).collect()
    }


    /// Sum of all entries.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum::<f64>()
    }


    /// Returns the sub-matrix made of the given rows, in the given order.
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        let data = rows.iter()
            .flat_map(|&i| self.row(i).iter().copied())
            .collect::<Vec<_>>();
        Self { n_rows: rows.len(), n_cols: self.n_cols, data }
    }


    /// All entries in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data[..]
    }


    /// All entries in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data[..]
    }
}


impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    #[inline]
    fn index(&self, (i, k): (usize, usize)) -> &Self::Output {
        &self.data[i * self.n_cols + k]
    }
}


impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, k): (usize, usize)) -> &mut Self::Output {
        &mut self.data[i * self.n_cols + k]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_and_columns() {
        let m = Matrix::from_rows(2, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.column(0), vec![1.0, 3.0]);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m.sum(), 10.0);
    }

    #[test]
    fn select_rows_keeps_order() {
        let m = Matrix::from_rows(1, vec![vec![1.0], vec![2.0], vec![3.0]]);
        let s = m.select_rows(&[2, 0]);
        assert_eq!(s.as_slice(), &[3.0, 1.0]);
    }

    #[test]
    fn zero_width_rows() {
        let m = Matrix::zeros(3, 0);
        assert_eq!(m.rows().count(), 3);
        assert!(m.row(2).is_empty());
    }
}
