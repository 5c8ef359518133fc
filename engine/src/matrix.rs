//! Dense row-major matrix of `f64`
//!
//! Just enough linear-algebra surface for the tableau: construction,
//! scalar shift, row/column concatenation and indexed access. Storage is a
//! single flat `Vec<f64>` so a tableau pivot walks contiguous memory.

use serde::Serialize;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::MatrixError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// An `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// An `rows × cols` matrix with every entry set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Matrix { rows, cols, data: vec![value; rows * cols] }
    }

    /// Build from nested rows.
    ///
    /// Rejects an empty matrix (no rows, or a first row with no entries),
    /// rows of differing length, and NaN or infinite entries.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let first = rows.first().ok_or(MatrixError::Empty)?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(MatrixError::Empty);
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::Ragged { row: i, expected: cols, found: row.len() });
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(MatrixError::NonFinite { row: i, col: j });
                }
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix { rows: rows.len(), cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Write a single entry. Panics when out of bounds, like slice indexing.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self[(row, col)] = value;
    }

    /// Borrow row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over column `j` top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(j < self.cols, "column {} out of bounds for {} columns", j, self.cols);
        self.data.iter().skip(j).step_by(self.cols).copied()
    }

    /// Smallest entry.
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Elementwise `self + value`, as a new matrix.
    pub fn add_scalar(&self, value: f64) -> Self {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| x + value).collect(),
        }
    }

    /// Column concatenation: `[self | other]`.
    pub fn hstack(&self, other: &Matrix) -> Result<Self, MatrixError> {
        if self.rows != other.rows {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for i in 0..self.rows {
            data.extend_from_slice(self.row(i));
            data.extend_from_slice(other.row(i));
        }
        Ok(Matrix { rows: self.rows, cols, data })
    }

    /// Row concatenation: `self` on top of `other`.
    pub fn vstack(&self, other: &Matrix) -> Result<Self, MatrixError> {
        if self.cols != other.cols {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Ok(Matrix { rows: self.rows + other.rows, cols: self.cols, data })
    }

    /// Largest absolute elementwise difference; `INFINITY` on shape mismatch.
    pub fn max_abs_diff(&self, other: &Matrix) -> f64 {
        if self.shape() != other.shape() {
            return f64::INFINITY;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.rows && col < self.cols, "index ({}, {}) out of bounds", row, col);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.rows && col < self.cols, "index ({}, {}) out of bounds", row, col);
        &mut self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            let cells: Vec<String> = self.row(i).iter().map(|x| format!("{:>10.4}", x)).collect();
            writeln!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}
