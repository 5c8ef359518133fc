//! Solver configuration

use serde::Serialize;

use crate::pivot::EnteringRule;

/// Knobs for a single solve.
#[derive(Debug, Clone, Serialize)]
pub struct SolverConfig {
    /// Pivots allowed before the run is abandoned as `IterationLimit`.
    pub max_iterations: u64,
    /// Sign tests treat values within this distance of zero as zero.
    pub tolerance: f64,
    /// Pivot elements at or below this magnitude are degenerate.
    pub pivot_tolerance: f64,
    /// Seed for the entering-column random source.
    pub seed: u64,
    pub entering: EnteringRule,
    /// Record a [`crate::solver::PivotStep`] per pivot.
    pub trace: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_iterations: 10_000,
            tolerance: 1e-9,
            pivot_tolerance: 1e-12,
            seed: 0,
            entering: EnteringRule::Random,
            trace: false,
        }
    }
}

impl SolverConfig {
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_entering(mut self, entering: EnteringRule) -> Self {
        self.entering = entering;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
