//! Reading equilibrium strategies off an optimal tableau
//!
//! With `v = -1 / T[m, n]`, the row player's weight on pure strategy `i` is
//! `-v · T[m, p]` when `y_i` labels column `p`, and the column player's weight
//! on `j` is `v · T[p, n]` when `x_j` labels row `p`. Unlabelled strategies get
//! zero weight. `v` is the value of the shifted game, so the shift is
//! subtracted to get the value of the original one.

use serde::Serialize;

use crate::labels::Labels;
use crate::matrix::Matrix;
use crate::tableau::Tableau;

/// Equilibrium of a matrix game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Game value for the row player, shift removed.
    pub value: f64,
    /// Row player's mixed strategy `p`.
    pub row_strategy: Vec<f64>,
    /// Column player's mixed strategy `q`.
    pub column_strategy: Vec<f64>,
    /// `min_j Σ_i p_i A[i,j]`: what `p` guarantees the row player.
    pub row_guarantee: f64,
    /// `max_i Σ_j A[i,j] q_j`: the most `q` can concede.
    pub column_guarantee: f64,
}

impl Solution {
    /// Gap between the two guarantees; zero at an exact equilibrium.
    pub fn exploitability(&self) -> f64 {
        (self.column_guarantee - self.row_guarantee).max(0.0)
    }

    /// Pure strategies played with probability above `tolerance`, per player.
    pub fn support(&self, tolerance: f64) -> (Vec<usize>, Vec<usize>) {
        let support = |s: &[f64]| -> Vec<usize> {
            s.iter().enumerate().filter(|(_, &p)| p > tolerance).map(|(i, _)| i).collect()
        };
        (support(&self.row_strategy), support(&self.column_strategy))
    }
}

/// Raw LP value `v` encoded in the objective cell.
pub fn lp_value(tableau: &Tableau) -> f64 {
    -1.0 / tableau.value_cell()
}

/// Row player's strategy from the objective row.
pub fn row_strategy(tableau: &Tableau, labels: &Labels) -> Vec<f64> {
    let v = lp_value(tableau);
    (0..tableau.m())
        .map(|i| match labels.dual_column(i) {
            Some(p) => -v * tableau.objective(p),
            None => 0.0,
        })
        .collect()
}

/// Column player's strategy from the right-hand side.
pub fn column_strategy(tableau: &Tableau, labels: &Labels) -> Vec<f64> {
    let v = lp_value(tableau);
    (0..tableau.n())
        .map(|j| match labels.primal_row(j) {
            Some(p) => v * tableau.rhs(p),
            None => 0.0,
        })
        .collect()
}

/// Expected payoff each pure column earns against `p`, minimised.
pub fn row_guarantee(payoffs: &Matrix, p: &[f64]) -> f64 {
    (0..payoffs.cols())
        .map(|j| payoffs.column(j).zip(p).map(|(a, &pi)| a * pi).sum::<f64>())
        .fold(f64::INFINITY, f64::min)
}

/// Expected payoff each pure row earns against `q`, maximised.
pub fn column_guarantee(payoffs: &Matrix, q: &[f64]) -> f64 {
    (0..payoffs.rows())
        .map(|i| payoffs.row(i).iter().zip(q).map(|(a, qj)| a * qj).sum::<f64>())
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Build the [`Solution`] from an optimal tableau.
pub fn extract(tableau: &Tableau, labels: &Labels, payoffs: &Matrix, shift: f64) -> Solution {
    let row_strategy = row_strategy(tableau, labels);
    let column_strategy = column_strategy(tableau, labels);
    Solution {
        value: lp_value(tableau) - shift,
        row_guarantee: row_guarantee(payoffs, &row_strategy),
        column_guarantee: column_guarantee(payoffs, &column_strategy),
        row_strategy,
        column_strategy,
    }
}
