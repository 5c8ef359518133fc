//! Named games and parameterized payoff generators
//!
//! Every game is described by its row player's payoffs. The generated games
//! (Blotto, Morra, cyclic) are symmetric, so their value is zero and both
//! players share the same strategy names.

use minimax_engine::{test_games, Matrix};

use crate::error::GameError;

/// Pure strategies per player beyond which a generated game is refused.
pub const MAX_STRATEGIES: usize = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    RockPaperScissors,
    MatchingPennies,
    /// The 10×3 allocation game.
    Allocation,
    /// Split `soldiers` over `fields`; each field goes to the larger force.
    Blotto { soldiers: usize, fields: usize },
    /// Show 1..=`fingers` and guess the opponent's count; a lone correct
    /// guess wins the total shown.
    Morra { fingers: usize },
    /// Each of `n` strategies beats its successor and loses to its predecessor.
    Cyclic { n: usize },
}

/// Catalog names with a one-line description and parameter hint.
pub const CATALOG: [(&str, &str); 6] = [
    ("rps", "rock, paper, scissors"),
    ("pennies", "matching pennies"),
    ("allocation", "10x3 allocation game"),
    ("blotto", "Colonel Blotto [soldiers=5] [fields=3]"),
    ("morra", "Morra [fingers=2]"),
    ("cyclic", "generalized rock-paper-scissors [n=5]"),
];

impl Game {
    /// Resolve a catalog name. Missing parameters take their defaults; extra
    /// ones are ignored.
    pub fn lookup(name: &str, params: &[usize]) -> Result<Game, GameError> {
        let param = |i: usize, default: usize| params.get(i).copied().unwrap_or(default);
        let game = match name.to_ascii_lowercase().as_str() {
            "rps" | "rock-paper-scissors" => Game::RockPaperScissors,
            "pennies" | "matching-pennies" => Game::MatchingPennies,
            "allocation" => Game::Allocation,
            "blotto" => Game::Blotto { soldiers: param(0, 5), fields: param(1, 3) },
            "morra" => Game::Morra { fingers: param(0, 2) },
            "cyclic" => Game::Cyclic { n: param(0, 5) },
            other => return Err(GameError::UnknownGame(other.to_string())),
        };
        game.validate()?;
        Ok(game)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Game::RockPaperScissors => "rps",
            Game::MatchingPennies => "pennies",
            Game::Allocation => "allocation",
            Game::Blotto { .. } => "blotto",
            Game::Morra { .. } => "morra",
            Game::Cyclic { .. } => "cyclic",
        }
    }

    fn validate(&self) -> Result<(), GameError> {
        let at_least = |name: &'static str, value: usize, min: usize| {
            if value < min {
                Err(GameError::ParameterTooSmall { name, value, min })
            } else {
                Ok(())
            }
        };
        let strategies = match *self {
            Game::Blotto { soldiers, fields } => {
                at_least("soldiers", soldiers, 1)?;
                at_least("fields", fields, 1)?;
                composition_count(soldiers, fields)
            }
            Game::Morra { fingers } => {
                at_least("fingers", fingers, 1)?;
                fingers.saturating_mul(fingers)
            }
            Game::Cyclic { n } => {
                at_least("n", n, 3)?;
                n
            }
            _ => 0,
        };
        if strategies > MAX_STRATEGIES {
            return Err(GameError::TooLarge { strategies, limit: MAX_STRATEGIES });
        }
        Ok(())
    }

    /// Row player's payoff matrix.
    pub fn payoffs(&self) -> Result<Matrix, GameError> {
        self.validate()?;
        let matrix = match *self {
            Game::RockPaperScissors => test_games::rock_paper_scissors(),
            Game::MatchingPennies => test_games::matching_pennies(),
            Game::Allocation => test_games::allocation(),
            Game::Blotto { soldiers, fields } => blotto(soldiers, fields),
            Game::Morra { fingers } => morra(fingers),
            Game::Cyclic { n } => cyclic(n),
        };
        log::debug!("built {} with {}x{} payoffs", self.name(), matrix.rows(), matrix.cols());
        Ok(matrix)
    }

    pub fn row_names(&self) -> Vec<String> {
        match *self {
            Game::RockPaperScissors => vec!["rock".into(), "paper".into(), "scissors".into()],
            Game::MatchingPennies => vec!["heads".into(), "tails".into()],
            Game::Allocation => (1..=10).map(|i| format!("split {}", i)).collect(),
            Game::Blotto { soldiers, fields } => compositions(soldiers, fields)
                .iter()
                .map(|c| format!("{:?}", c))
                .collect(),
            Game::Morra { fingers } => morra_strategies(fingers)
                .map(|(show, guess)| format!("show {} guess {}", show, guess))
                .collect(),
            Game::Cyclic { n } => (1..=n).map(|i| format!("s{}", i)).collect(),
        }
    }

    pub fn column_names(&self) -> Vec<String> {
        match *self {
            Game::Allocation => (1..=3).map(|j| format!("front {}", j)).collect(),
            _ => self.row_names(),
        }
    }
}

fn composition_count(soldiers: usize, fields: usize) -> usize {
    // C(soldiers + fields - 1, fields - 1), saturating
    let k = fields - 1;
    let mut count: usize = 1;
    for i in 0..k {
        count = match count.checked_mul(soldiers + k - i) {
            Some(c) => c / (i + 1),
            None => return usize::MAX,
        };
    }
    count
}

/// All ways to place `soldiers` over `fields`, lexicographically descending.
pub fn compositions(soldiers: usize, fields: usize) -> Vec<Vec<usize>> {
    if fields == 1 {
        return vec![vec![soldiers]];
    }
    let mut out = Vec::new();
    for first in (0..=soldiers).rev() {
        for mut rest in compositions(soldiers - first, fields - 1) {
            rest.insert(0, first);
            out.push(rest);
        }
    }
    out
}

pub fn blotto(soldiers: usize, fields: usize) -> Matrix {
    let strategies = compositions(soldiers, fields);
    let rows: Vec<Vec<f64>> = strategies
        .iter()
        .map(|a| {
            strategies
                .iter()
                .map(|b| a.iter().zip(b).map(|(x, y)| sign(*x as f64 - *y as f64)).sum())
                .collect()
        })
        .collect();
    Matrix::from_rows(&rows).expect("at least one composition")
}

fn morra_strategies(fingers: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..=fingers).flat_map(move |show| (1..=fingers).map(move |guess| (show, guess)))
}

pub fn morra(fingers: usize) -> Matrix {
    let strategies: Vec<(usize, usize)> = morra_strategies(fingers).collect();
    let rows: Vec<Vec<f64>> = strategies
        .iter()
        .map(|&(show_a, guess_a)| {
            strategies
                .iter()
                .map(|&(show_b, guess_b)| {
                    let total = (show_a + show_b) as f64;
                    match (guess_a == show_b, guess_b == show_a) {
                        (true, false) => total,
                        (false, true) => -total,
                        _ => 0.0,
                    }
                })
                .collect()
        })
        .collect();
    Matrix::from_rows(&rows).expect("at least one strategy")
}

pub fn cyclic(n: usize) -> Matrix {
    let mut m = Matrix::zeros(n, n);
    for i in 0..n {
        m[(i, (i + 1) % n)] = 1.0;
        m[((i + 1) % n, i)] = -1.0;
    }
    m
}

fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_defaults() {
        assert_eq!(Game::lookup("blotto", &[]), Ok(Game::Blotto { soldiers: 5, fields: 3 }));
        assert_eq!(Game::lookup("Morra", &[3]), Ok(Game::Morra { fingers: 3 }));
        assert_eq!(Game::lookup("rps", &[9, 9]), Ok(Game::RockPaperScissors));
    }

    #[test]
    fn test_lookup_errors() {
        assert_eq!(Game::lookup("chess", &[]), Err(GameError::UnknownGame("chess".into())));
        assert_eq!(
            Game::lookup("cyclic", &[2]),
            Err(GameError::ParameterTooSmall { name: "n", value: 2, min: 3 })
        );
        assert!(matches!(Game::lookup("blotto", &[100, 10]), Err(GameError::TooLarge { .. })));
    }

    #[test]
    fn test_catalog_names_resolve() {
        for (name, _) in CATALOG {
            let game = Game::lookup(name, &[]).unwrap();
            assert_eq!(game.name(), name);
            let m = game.payoffs().unwrap();
            assert_eq!(m.rows(), game.row_names().len());
            assert_eq!(m.cols(), game.column_names().len());
        }
    }

    #[test]
    fn test_compositions() {
        let c = compositions(2, 2);
        assert_eq!(c, vec![vec![2, 0], vec![1, 1], vec![0, 2]]);
        assert_eq!(compositions(5, 3).len(), composition_count(5, 3));
        assert_eq!(composition_count(5, 3), 21);
        assert_eq!(composition_count(4, 1), 1);
    }

    #[test]
    fn test_blotto_payoffs() {
        let m = blotto(2, 2);
        // (2,0) vs (1,1): wins field 1, loses field 2
        assert_eq!(m[(0, 1)], 0.0);
        // (2,0) vs (0,2): wins field 1, loses field 2
        assert_eq!(m[(0, 2)], 0.0);
        let m = blotto(3, 2);
        // (2,1) vs (3,0): loses field 1, wins field 2
        assert_eq!(m[(1, 0)], 0.0);
        // (2,1) vs (1,2)
        assert_eq!(m[(1, 2)], 0.0);
        let m = blotto(4, 3);
        let a = compositions(4, 3).iter().position(|c| c == &vec![2, 1, 1]).unwrap();
        let b = compositions(4, 3).iter().position(|c| c == &vec![4, 0, 0]).unwrap();
        assert_eq!(m[(a, b)], 1.0);
    }

    #[test]
    fn test_morra_two_fingers() {
        let m = morra(2);
        // strategies: (1,1) (1,2) (2,1) (2,2)
        // (1,2) vs (2,1): both guess right
        assert_eq!(m[(1, 2)], 0.0);
        // (1,2) vs (2,2): row guesses right, column does not
        assert_eq!(m[(1, 3)], 3.0);
        assert_eq!(m[(3, 1)], -3.0);
    }

    #[test]
    fn test_generated_games_are_antisymmetric() {
        for m in [blotto(4, 3), morra(3), cyclic(5)] {
            for i in 0..m.rows() {
                for j in 0..m.cols() {
                    assert_eq!(m[(i, j)], -m[(j, i)]);
                }
            }
        }
    }

    #[test]
    fn test_cyclic() {
        let m = cyclic(3);
        assert_eq!(m.row(0), &[0.0, 1.0, -1.0]);
        assert_eq!(m.row(1), &[-1.0, 0.0, 1.0]);
    }
}
