//! Primal/dual variable labels for the tableau
//!
//! Each tableau row carries one primal basic variable and one dual nonbasic
//! variable; each column carries one primal nonbasic and one dual basic
//! variable. A pivot on `(k, l)` swaps exactly the labels at row `k` and
//! column `l`, so at the end of a run the labels tell which tableau entry
//! holds which player's probability.

use serde::Serialize;
use std::fmt;

/// An LP variable. Indices are 0-based; display is 1-based (`x_1`, `y_1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Variable {
    /// Primal variable `x_{index+1}`; the first `n` belong to the column player.
    Primal(usize),
    /// Dual variable `y_{index+1}`; the first `m` belong to the row player.
    Dual(usize),
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Primal(i) => write!(f, "x_{}", i + 1),
            Variable::Dual(i) => write!(f, "y_{}", i + 1),
        }
    }
}

/// The four label sequences of an `m × n` game.
///
/// `primal_basic[i]` and `dual_nonbasic[i]` label row `i`;
/// `primal_nonbasic[j]` and `dual_basic[j]` label column `j`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub primal_basic: Vec<Variable>,
    pub primal_nonbasic: Vec<Variable>,
    pub dual_basic: Vec<Variable>,
    pub dual_nonbasic: Vec<Variable>,
}

impl Labels {
    /// Initial labelling: slack variables basic, strategy variables nonbasic.
    pub fn new(m: usize, n: usize) -> Self {
        Labels {
            primal_nonbasic: (0..n).map(Variable::Primal).collect(),
            primal_basic: (n..m + n).map(Variable::Primal).collect(),
            dual_nonbasic: (0..m).map(Variable::Dual).collect(),
            dual_basic: (m..m + n).map(Variable::Dual).collect(),
        }
    }

    /// Swap the labels of row `k` and column `l`.
    pub fn pivot(&mut self, k: usize, l: usize) {
        std::mem::swap(&mut self.dual_nonbasic[k], &mut self.dual_basic[l]);
        std::mem::swap(&mut self.primal_nonbasic[l], &mut self.primal_basic[k]);
    }

    /// Row holding primal variable `x_{j+1}` when it is basic.
    pub fn primal_row(&self, j: usize) -> Option<usize> {
        self.primal_basic.iter().position(|&v| v == Variable::Primal(j))
    }

    /// Column holding dual variable `y_{i+1}` when it is basic.
    pub fn dual_column(&self, i: usize) -> Option<usize> {
        self.dual_basic.iter().position(|&v| v == Variable::Dual(i))
    }
}
