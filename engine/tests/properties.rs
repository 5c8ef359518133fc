//! Property tests over randomly generated games

use minimax_engine::strategy::{column_guarantee, row_guarantee};
use minimax_engine::{solve, EnteringRule, Matrix, Outcome, Pivot, SolverConfig, Tableau};
use proptest::prelude::*;

fn payoffs() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..6, 1usize..6).prop_flat_map(|(m, n)| {
        prop::collection::vec(prop::collection::vec(-10.0f64..10.0, n), m)
    })
}

fn entering_rule() -> impl Strategy<Value = EnteringRule> {
    prop_oneof![
        Just(EnteringRule::Random),
        Just(EnteringRule::Dantzig),
        Just(EnteringRule::Bland),
    ]
}

/// Shift that lifts every entry to at least 1.
fn shift_for(m: &Matrix) -> f64 {
    1.0 - m.min()
}

proptest! {
    #[test]
    fn initial_tableau_is_feasible(rows in payoffs()) {
        let m = Matrix::from_rows(&rows).unwrap();
        let t = Tableau::new(&m, shift_for(&m));
        for i in 0..t.m() {
            prop_assert_eq!(t.rhs(i), 1.0);
        }
        prop_assert!(t.is_feasible(0.0));
    }

    #[test]
    fn strategies_are_distributions(
        rows in payoffs(),
        rule in entering_rule(),
        seed in any::<u64>(),
    ) {
        let m = Matrix::from_rows(&rows).unwrap();
        let config = SolverConfig::default().with_entering(rule).with_seed(seed);
        let report = solve(&m, shift_for(&m), config).unwrap();
        let s = match report.outcome {
            Outcome::Optimal(s) => s,
            other => return Err(TestCaseError::fail(format!("not optimal: {:?}", other))),
        };
        for p in s.row_strategy.iter().chain(s.column_strategy.iter()) {
            prop_assert!(*p >= -1e-9, "negative probability {}", p);
        }
        prop_assert!((s.row_strategy.iter().sum::<f64>() - 1.0).abs() < 1e-6);
        prop_assert!((s.column_strategy.iter().sum::<f64>() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn both_players_agree_on_value(rows in payoffs(), seed in any::<u64>()) {
        let m = Matrix::from_rows(&rows).unwrap();
        let report = solve(&m, shift_for(&m), SolverConfig::default().with_seed(seed)).unwrap();
        let s = report.outcome.solution().cloned().unwrap();
        prop_assert!((row_guarantee(&m, &s.row_strategy) - s.value).abs() < 1e-6);
        prop_assert!((column_guarantee(&m, &s.column_strategy) - s.value).abs() < 1e-6);
        prop_assert!(s.exploitability() < 1e-6);
    }

    #[test]
    fn value_ignores_shift(rows in payoffs(), extra in 0.0f64..50.0) {
        let m = Matrix::from_rows(&rows).unwrap();
        let base = shift_for(&m);
        let a = solve(&m, base, SolverConfig::default()).unwrap();
        let b = solve(&m, base + extra, SolverConfig::default()).unwrap();
        let va = a.outcome.solution().unwrap().value;
        let vb = b.outcome.solution().unwrap().value;
        prop_assert!((va - vb).abs() < 1e-6, "{} vs {}", va, vb);
    }

    #[test]
    fn pivot_is_self_inverse(
        rows in payoffs(),
        k in any::<prop::sample::Index>(),
        l in any::<prop::sample::Index>(),
    ) {
        let m = Matrix::from_rows(&rows).unwrap();
        let original = Tableau::new(&m, shift_for(&m));
        let pivot = Pivot::new(k.index(original.m()), l.index(original.n()));
        let twice = original
            .pivoted(pivot, 1e-12)
            .and_then(|t| t.pivoted(pivot, 1e-12))
            .unwrap();
        prop_assert!(twice.cells().max_abs_diff(original.cells()) < 1e-9);
    }
}
