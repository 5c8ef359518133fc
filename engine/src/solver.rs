//! Simplex solve loop for matrix games
//!
//! The solver owns the tableau, its labels and the pivot selector. Each
//! [`Solver::step`] performs one state transition:
//!
//! ```text
//!   Start ──infeasible──▶ Finished(Infeasible)
//!     │
//!     └─feasible─▶ Iterating ──optimal──────▶ Finished(Optimal)
//!                     │  ▲     ──cap reached──▶ Finished(IterationLimit)
//!                     │  │     ──unbounded────▶ Finished(Unbounded)
//!                     └──┘ pivot
//! ```
//!
//! Labels and tableau are pivoted together in [`Solver::apply_pivot`]; the
//! tableau rejects a degenerate pivot before either is modified.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::SolverConfig;
use crate::error::{MatrixError, SolveError, SolveResult};
use crate::labels::Labels;
use crate::matrix::Matrix;
use crate::pivot::PivotSelector;
use crate::strategy::{self, Solution};
use crate::tableau::{Pivot, Tableau};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Outcome {
    Optimal(Solution),
    /// The starting basis has a negative right-hand side.
    Infeasible,
    /// `column` can enter the basis without bound.
    Unbounded { column: usize },
    /// Gave up after `iterations` pivots without reaching optimality.
    IterationLimit { iterations: u64 },
}

impl Outcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Optimal(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_optimal(&self) -> bool {
        matches!(self, Outcome::Optimal(_))
    }

    /// Short lowercase classification.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Optimal(_) => "optimal",
            Outcome::Infeasible => "infeasible",
            Outcome::Unbounded { .. } => "unbounded",
            Outcome::IterationLimit { .. } => "iteration limit",
        }
    }
}

/// One recorded pivot, taken after the tableau and labels were updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotStep {
    pub iteration: u64,
    pub pivot: Pivot,
    pub labels: Labels,
    pub tableau: Matrix,
}

/// Outcome of [`solve`] together with the pivot log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub outcome: Outcome,
    pub iterations: u64,
    pub trace: Vec<PivotStep>,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Start,
    Iterating,
    Finished(Outcome),
}

/// Tableau simplex solver for one payoff matrix.
pub struct Solver<R = SmallRng> {
    payoffs: Matrix,
    shift: f64,
    config: SolverConfig,
    tableau: Tableau,
    labels: Labels,
    selector: PivotSelector<R>,
    state: State,
    iteration: u64,
    trace: Vec<PivotStep>,
}

impl Solver<SmallRng> {
    /// Solver whose random source is seeded from `config.seed`.
    pub fn new(payoffs: Matrix, shift: f64, config: SolverConfig) -> SolveResult<Self> {
        let rng = SmallRng::seed_from_u64(config.seed);
        Self::with_rng(payoffs, shift, config, rng)
    }
}

impl<R: Rng> Solver<R> {
    /// Solver drawing entering columns from `rng`.
    pub fn with_rng(
        payoffs: Matrix,
        shift: f64,
        config: SolverConfig,
        rng: R,
    ) -> SolveResult<Self> {
        validate(&payoffs, shift)?;
        let (m, n) = payoffs.shape();
        let tableau = Tableau::new(&payoffs, shift);
        let selector = PivotSelector::new(config.entering, config.tolerance, rng);
        Ok(Solver {
            payoffs,
            shift,
            config,
            tableau,
            labels: Labels::new(m, n),
            selector,
            state: State::Start,
            iteration: 0,
            trace: Vec::new(),
        })
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn shift(&self) -> f64 {
        self.shift
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Pivots performed so far.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Pivots recorded so far (empty unless tracing is on).
    pub fn trace(&self) -> &[PivotStep] {
        &self.trace
    }

    /// Terminal outcome, once reached.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.state {
            State::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Advance by one transition. Returns the outcome once the run is
    /// finished; calling again after that is a no-op.
    pub fn step(&mut self) -> SolveResult<Option<&Outcome>> {
        match self.state {
            State::Finished(_) => {}
            State::Start => {
                if self.tableau.is_feasible(self.config.tolerance) {
                    self.state = State::Iterating;
                } else {
                    self.finish(Outcome::Infeasible);
                }
            }
            State::Iterating => self.iterate()?,
        }
        Ok(self.outcome())
    }

    /// Step until a terminal outcome.
    pub fn run(&mut self) -> SolveResult<&Outcome> {
        loop {
            if let State::Finished(_) = self.state {
                break;
            }
            self.step()?;
        }
        match &self.state {
            State::Finished(outcome) => Ok(outcome),
            _ => unreachable!("loop exits only when finished"),
        }
    }

    fn iterate(&mut self) -> SolveResult<()> {
        let tolerance = self.config.tolerance;
        if self.tableau.is_optimal(tolerance) {
            let solution =
                strategy::extract(&self.tableau, &self.labels, &self.payoffs, self.shift);
            self.finish(Outcome::Optimal(solution));
            return Ok(());
        }
        if self.iteration >= self.config.max_iterations {
            log::warn!("no optimum after {} pivots", self.iteration);
            self.finish(Outcome::IterationLimit { iterations: self.iteration });
            return Ok(());
        }
        if let Some(column) = self.tableau.unbounded_column(tolerance) {
            self.finish(Outcome::Unbounded { column });
            return Ok(());
        }
        let Some(column) = self.selector.entering(&self.tableau) else {
            unreachable!("non-optimal tableau has an entering column");
        };
        match self.tableau.leaving_row(column) {
            Some(row) => self.apply_pivot(Pivot::new(row, column)),
            None => {
                self.finish(Outcome::Unbounded { column });
                Ok(())
            }
        }
    }

    fn apply_pivot(&mut self, pivot: Pivot) -> SolveResult<()> {
        self.tableau.pivot(pivot, self.config.pivot_tolerance)?;
        self.labels.pivot(pivot.row, pivot.column);
        self.iteration += 1;
        log::debug!(
            "pivot {:>4} at ({}, {})  basic {}",
            self.iteration,
            pivot.row,
            pivot.column,
            render(&self.labels.primal_basic),
        );
        if self.config.trace {
            self.trace.push(PivotStep {
                iteration: self.iteration,
                pivot,
                labels: self.labels.clone(),
                tableau: self.tableau.cells().clone(),
            });
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        log::info!("{} after {} pivots", outcome.label(), self.iteration);
        self.state = State::Finished(outcome);
    }

    /// Consume the solver into a [`Report`]. Runs to completion first.
    pub fn into_report(mut self) -> SolveResult<Report> {
        self.run()?;
        let State::Finished(outcome) = self.state else {
            unreachable!("run returns only when finished");
        };
        Ok(Report { outcome, iterations: self.iteration, trace: self.trace })
    }
}

/// Solve `payoffs` with `shift` added to every entry.
pub fn solve(payoffs: &Matrix, shift: f64, config: SolverConfig) -> SolveResult<Report> {
    Solver::new(payoffs.clone(), shift, config)?.into_report()
}

fn validate(payoffs: &Matrix, shift: f64) -> SolveResult<()> {
    let (m, n) = payoffs.shape();
    if m == 0 || n == 0 {
        return Err(SolveError::InvalidMatrix(MatrixError::Empty));
    }
    for i in 0..m {
        if let Some(j) = payoffs.row(i).iter().position(|x| !x.is_finite()) {
            return Err(SolveError::InvalidMatrix(MatrixError::NonFinite { row: i, col: j }));
        }
    }
    if !shift.is_finite() {
        return Err(SolveError::InvalidShift(shift));
    }
    Ok(())
}

fn render(vars: &[crate::labels::Variable]) -> String {
    let names: Vec<String> = vars.iter().map(|v| v.to_string()).collect();
    format!("[{}]", names.join(", "))
}
