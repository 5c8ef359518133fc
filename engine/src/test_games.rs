//! Hardcoded payoff matrices for solver validation and benches
//!
//! Known equilibria (row player's payoffs, no shift applied):
//!
//! | game                 | value | row strategy         | column strategy   |
//! |----------------------|-------|----------------------|-------------------|
//! | rock_paper_scissors  | 0     | (1/3, 1/3, 1/3)      | (1/3, 1/3, 1/3)   |
//! | matching_pennies     | 0     | (1/2, 1/2)           | (1/2, 1/2)        |
//! | saddle_point         | 3     | pure row 1           | pure column 1     |
//! | dominated_row        | 2     | (1/2, 1/2, 0)        | (1/2, 1/2)        |
//! | weakly_dominated_row | 1     | (1/2, 1/2, 0)        | (1/2, 1/2)        |
//! | allocation           | 40    | mixed, not unique    | (1/3, 1/3, 1/3)   |

use crate::matrix::Matrix;

fn matrix<const N: usize>(rows: &[[f64; N]]) -> Matrix {
    Matrix::from_rows(rows).expect("hardcoded matrix is well formed")
}

/// Rows and columns ordered rock, paper, scissors.
pub fn rock_paper_scissors() -> Matrix {
    matrix(&[
        [0.0, -1.0, 1.0],
        [1.0, 0.0, -1.0],
        [-1.0, 1.0, 0.0],
    ])
}

pub fn matching_pennies() -> Matrix {
    matrix(&[[1.0, -1.0], [-1.0, 1.0]])
}

/// Pure equilibrium at `(1, 1)`: the minimum of row 1 and maximum of column 1.
pub fn saddle_point() -> Matrix {
    matrix(&[
        [1.0, 2.0, 4.0],
        [4.0, 3.0, 5.0],
        [2.0, 1.0, 6.0],
    ])
}

/// Row 2 is strictly dominated by both other rows.
pub fn dominated_row() -> Matrix {
    matrix(&[[3.0, 1.0], [1.0, 3.0], [0.5, 0.5]])
}

/// Row 2 is no better than row 0 anywhere and worse against column 0.
pub fn weakly_dominated_row() -> Matrix {
    matrix(&[[2.0, 0.0], [0.0, 2.0], [1.0, 0.0]])
}

/// Ten splits of 120 units over three fronts; every row sums to 120.
pub fn allocation() -> Matrix {
    matrix(&[
        [40.0, 70.0, 10.0],
        [10.0, 40.0, 70.0],
        [70.0, 10.0, 40.0],
        [20.0, 50.0, 50.0],
        [60.0, 30.0, 30.0],
        [30.0, 60.0, 30.0],
        [50.0, 20.0, 50.0],
        [50.0, 50.0, 20.0],
        [30.0, 30.0, 60.0],
        [40.0, 40.0, 40.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        assert_eq!(rock_paper_scissors().shape(), (3, 3));
        assert_eq!(matching_pennies().shape(), (2, 2));
        assert_eq!(saddle_point().shape(), (3, 3));
        assert_eq!(dominated_row().shape(), (3, 2));
        assert_eq!(weakly_dominated_row().shape(), (3, 2));
        assert_eq!(allocation().shape(), (10, 3));
    }

    #[test]
    fn test_weak_dominance() {
        let m = weakly_dominated_row();
        let (top, low) = (m.row(0), m.row(2));
        assert!(top.iter().zip(low).all(|(a, b)| a >= b));
        assert!(top.iter().zip(low).any(|(a, b)| a > b));
        assert!(top.iter().zip(low).any(|(a, b)| a == b));
    }

    #[test]
    fn test_zero_sum_games_are_antisymmetric() {
        let m = rock_paper_scissors();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], -m[(j, i)]);
            }
        }
    }
}
