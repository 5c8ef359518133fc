//! Error types for matrix construction and solving
//!
//! Terminal classifications of a run (infeasible, unbounded, iteration limit)
//! are not errors; they are variants of [`crate::solver::Outcome`]. Only input
//! that cannot be turned into a tableau, and pivots that would divide by
//! (nearly) zero, are reported here.

use std::fmt;

/// Result type for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// Reasons a payoff matrix cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// No rows, or rows with no entries.
    Empty,
    /// Row `row` has `found` entries where `expected` were required.
    Ragged { row: usize, expected: usize, found: usize },
    /// NaN or infinite entry at `(row, col)`.
    NonFinite { row: usize, col: usize },
    /// Concatenation of matrices whose shapes do not line up.
    ShapeMismatch { left: (usize, usize), right: (usize, usize) },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "payoff matrix is empty"),
            Self::Ragged { row, expected, found } => write!(
                f,
                "ragged matrix: row {} has {} entries, expected {}",
                row, found, expected
            ),
            Self::NonFinite { row, col } => {
                write!(f, "non-finite payoff at row {}, column {}", row, col)
            }
            Self::ShapeMismatch { left, right } => write!(
                f,
                "cannot concatenate {}x{} with {}x{}",
                left.0, left.1, right.0, right.1
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Errors that abort a solve attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The payoff matrix was rejected.
    InvalidMatrix(MatrixError),
    /// The shift constant is NaN or infinite.
    InvalidShift(f64),
    /// The selected pivot element is too close to zero to divide by.
    DegeneratePivot { row: usize, column: usize, value: f64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMatrix(e) => write!(f, "invalid payoff matrix: {}", e),
            Self::InvalidShift(c) => write!(f, "shift constant must be finite, got {}", c),
            Self::DegeneratePivot { row, column, value } => write!(
                f,
                "degenerate pivot at ({}, {}): |{:e}| is below tolerance",
                row, column, value
            ),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidMatrix(e) => Some(e),
            Self::InvalidShift(_) | Self::DegeneratePivot { .. } => None,
        }
    }
}

impl From<MatrixError> for SolveError {
    fn from(e: MatrixError) -> Self {
        SolveError::InvalidMatrix(e)
    }
}
