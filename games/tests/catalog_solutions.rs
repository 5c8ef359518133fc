//! Solve every catalog game and check the known equilibria

use minimax_games::{auto_shift, parse_matrix, Game, CATALOG};
use minimax_engine::{solve, EnteringRule, Outcome, Solution, SolverConfig};

fn solve_game(game: Game, rule: EnteringRule) -> Solution {
    let payoffs = game.payoffs().unwrap();
    let config = SolverConfig::default().with_entering(rule).with_seed(3);
    match solve(&payoffs, auto_shift(&payoffs), config).unwrap().outcome {
        Outcome::Optimal(s) => s,
        other => panic!("{} ended {:?}", game.name(), other),
    }
}

#[test]
fn test_symmetric_games_have_zero_value() {
    let games = [
        Game::RockPaperScissors,
        Game::MatchingPennies,
        Game::Blotto { soldiers: 4, fields: 3 },
        Game::Morra { fingers: 2 },
        Game::Cyclic { n: 5 },
    ];
    for game in games {
        for rule in EnteringRule::ALL {
            let s = solve_game(game, rule);
            assert!(s.value.abs() < 1e-6, "{} ({}) value {}", game.name(), rule, s.value);
            assert!(s.exploitability() < 1e-6);
        }
    }
}

#[test]
fn test_every_catalog_game_solves() {
    for (name, _) in CATALOG {
        let s = solve_game(Game::lookup(name, &[]).unwrap(), EnteringRule::Random);
        let row: f64 = s.row_strategy.iter().sum();
        let col: f64 = s.column_strategy.iter().sum();
        assert!((row - 1.0).abs() < 1e-6, "{} row sum {}", name, row);
        assert!((col - 1.0).abs() < 1e-6, "{} column sum {}", name, col);
    }
}

#[test]
fn test_cyclic_five_is_uniform() {
    let s = solve_game(Game::Cyclic { n: 5 }, EnteringRule::Bland);
    for p in s.row_strategy.iter().chain(s.column_strategy.iter()) {
        assert!((p - 0.2).abs() < 1e-6, "probability {}", p);
    }
}

#[test]
fn test_parsed_matrix_solves() {
    let payoffs = parse_matrix("# dominated third row\n3 1\n1 3\n0.5 0.5\n").unwrap();
    let report = solve(&payoffs, auto_shift(&payoffs), SolverConfig::default()).unwrap();
    let s = report.outcome.solution().unwrap();
    assert!((s.value - 2.0).abs() < 1e-6);
    assert!(s.row_strategy[2].abs() < 1e-6);
}
