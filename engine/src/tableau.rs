//! Simplex tableau for the game LP
//!
//! Layout of an `m × n` game's `(m+1) × (n+1)` tableau:
//!
//! ```text
//!   rows 0..m, cols 0..n : payoffs + shift
//!   rows 0..m, col n     : right-hand side, starts at 1
//!   row m,     cols 0..n : objective coefficients, start at 1
//!   row m,     col n     : objective value cell, starts at 0
//! ```
//!
//! The shape never changes; pivots rewrite entries in place.

use serde::Serialize;

use crate::error::{SolveError, SolveResult};
use crate::matrix::Matrix;

/// A tableau cell coordinate: `row` in `0..m`, `column` in `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pivot {
    pub row: usize,
    pub column: usize,
}

impl Pivot {
    pub fn new(row: usize, column: usize) -> Self {
        Pivot { row, column }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tableau {
    m: usize,
    n: usize,
    cells: Matrix,
}

impl Tableau {
    /// Build the initial tableau for `payoffs + shift`.
    ///
    /// The shift is not checked; with a shift too small to make every entry
    /// positive the run may end unbounded.
    pub fn new(payoffs: &Matrix, shift: f64) -> Self {
        let (m, n) = payoffs.shape();
        let top = payoffs
            .add_scalar(shift)
            .hstack(&Matrix::filled(m, 1, 1.0))
            .expect("rhs column has m rows");
        let mut objective = Matrix::filled(1, n + 1, 1.0);
        objective[(0, n)] = 0.0;
        let cells = top.vstack(&objective).expect("objective row has n+1 columns");
        Tableau { m, n, cells }
    }

    /// Wrap an arbitrary `(m+1) × (n+1)` matrix as a tableau.
    pub fn from_cells(cells: Matrix) -> Self {
        let (rows, cols) = cells.shape();
        assert!(rows >= 2 && cols >= 2, "tableau needs at least one constraint and one column");
        Tableau { m: rows - 1, n: cols - 1, cells }
    }

    /// Number of constraint rows (row player's pure strategies).
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of variable columns (column player's pure strategies).
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn cells(&self) -> &Matrix {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[(row, col)]
    }

    /// Right-hand side of constraint row `i`.
    pub fn rhs(&self, i: usize) -> f64 {
        self.cells[(i, self.n)]
    }

    /// Objective-row coefficient of column `j`.
    pub fn objective(&self, j: usize) -> f64 {
        self.cells[(self.m, j)]
    }

    /// The bottom-right cell.
    pub fn value_cell(&self) -> f64 {
        self.cells[(self.m, self.n)]
    }

    /// Every right-hand side is nonnegative.
    pub fn is_feasible(&self, tolerance: f64) -> bool {
        (0..self.m).all(|i| self.rhs(i) >= -tolerance)
    }

    /// No objective coefficient is positive.
    pub fn is_optimal(&self, tolerance: f64) -> bool {
        (0..self.n).all(|j| self.objective(j) <= tolerance)
    }

    /// First column with a positive objective coefficient and no positive
    /// entry above it, if any. `tolerance` applies to the objective row only;
    /// column entries are compared against zero exactly.
    pub fn unbounded_column(&self, tolerance: f64) -> Option<usize> {
        (0..self.n).find(|&j| {
            self.objective(j) > tolerance && (0..self.m).all(|i| self.get(i, j) <= 0.0)
        })
    }

    pub fn is_unbounded(&self, tolerance: f64) -> bool {
        self.unbounded_column(tolerance).is_some()
    }

    /// Columns eligible to enter the basis.
    pub fn entering_candidates(&self, tolerance: f64) -> Vec<usize> {
        (0..self.n).filter(|&j| self.objective(j) > tolerance).collect()
    }

    /// Minimum-ratio test over the strictly positive entries of column `l`.
    /// Ties go to the lowest row index.
    pub fn leaving_row(&self, l: usize) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut min_ratio = f64::INFINITY;
        for i in 0..self.m {
            let entry = self.get(i, l);
            if entry > 0.0 {
                let ratio = self.rhs(i) / entry;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    best = Some(i);
                }
            }
        }
        best
    }

    /// Gauss-Jordan exchange on `pivot`, in place.
    ///
    /// Off-pivot cells are updated first since they read the old pivot row
    /// and column. Nothing is touched when the pivot element is within
    /// `pivot_tolerance` of zero.
    pub fn pivot(&mut self, pivot: Pivot, pivot_tolerance: f64) -> SolveResult<()> {
        let Pivot { row: k, column: l } = pivot;
        let p = self.cells[(k, l)];
        if !(p.abs() > pivot_tolerance) {
            return Err(SolveError::DegeneratePivot { row: k, column: l, value: p });
        }
        let rows = self.m + 1;
        let cols = self.n + 1;

        for i in (0..rows).filter(|&i| i != k) {
            let t_il = self.cells[(i, l)];
            for j in (0..cols).filter(|&j| j != l) {
                let t_kj = self.cells[(k, j)];
                let cell = &mut self.cells[(i, j)];
                *cell = (*cell * p - t_il * t_kj) / p;
            }
        }
        for i in (0..rows).filter(|&i| i != k) {
            self.cells[(i, l)] = -self.cells[(i, l)] / p;
        }
        for j in (0..cols).filter(|&j| j != l) {
            self.cells[(k, j)] /= p;
        }
        self.cells[(k, l)] = 1.0 / p;
        Ok(())
    }

    /// Pure variant of [`Tableau::pivot`]: returns the pivoted tableau and
    /// leaves `self` unchanged.
    pub fn pivoted(&self, pivot: Pivot, pivot_tolerance: f64) -> SolveResult<Tableau> {
        let mut next = self.clone();
        next.pivot(pivot, pivot_tolerance)?;
        Ok(next)
    }
}
