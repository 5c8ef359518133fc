//! minimax Engine - Matrix game solver
//!
//! Solves two-player zero-sum matrix games by running the simplex method on
//! an explicit tableau. Primal and dual labels ride along with every pivot so
//! both players' equilibrium strategies can be read off the final tableau.
//!
//! ```
//! use minimax_engine::{solve, Matrix, SolverConfig};
//!
//! let pennies = Matrix::from_rows(&[[1.0, -1.0], [-1.0, 1.0]]).unwrap();
//! let report = solve(&pennies, 2.0, SolverConfig::default()).unwrap();
//! let solution = report.outcome.solution().unwrap();
//! assert!(solution.value.abs() < 1e-9);
//! ```
//!
//! The engine does no I/O; it reports progress through the `log` facade only.

pub mod config;
pub mod error;
pub mod labels;
pub mod matrix;
pub mod pivot;
pub mod solver;
pub mod strategy;
pub mod tableau;
pub mod test_games;

pub use config::SolverConfig;
pub use error::{MatrixError, SolveError, SolveResult};
pub use labels::{Labels, Variable};
pub use matrix::Matrix;
pub use pivot::{EnteringRule, PivotSelector};
pub use solver::{solve, Outcome, PivotStep, Report, Solver};
pub use strategy::Solution;
pub use tableau::{Pivot, Tableau};
