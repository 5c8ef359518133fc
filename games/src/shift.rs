//! Choosing a shift constant

use minimax_engine::Matrix;

/// Smallest nonnegative whole number that lifts every payoff to at least 1.
pub fn auto_shift(payoffs: &Matrix) -> f64 {
    let min = payoffs.min();
    if min >= 1.0 {
        0.0
    } else {
        (1.0 - min).ceil()
    }
}
