//! Trace properties that must hold for every recorded sweep.

use nalgebra::{DMatrix, DVector, dmatrix, dvector};
use seidel_core::{LinearSystem, textbook_example};
use seidel_solver::{GaussSeidelConfig, GaussSeidelResult, solve, solve_gauss_seidel};

fn dominant_system(size: usize) -> LinearSystem {
    let a = DMatrix::from_fn(size, size, |i, j| {
        if i == j {
            (size as f64) + 1.0
        } else {
            1.0 / ((i as f64 - j as f64).abs() + 1.0)
        }
    });
    let b = DVector::from_fn(size, |i, _| (i + 1) as f64);
    LinearSystem::new(a, b).unwrap()
}

fn sample_results() -> Vec<GaussSeidelResult> {
    vec![
        solve_gauss_seidel(&textbook_example(), &GaussSeidelConfig::default()),
        solve_gauss_seidel(&dominant_system(6), &GaussSeidelConfig::new(1e-12, 200)),
        solve(&dmatrix![1.0, 3.0; 2.0, 1.0], &dvector![4.0, 3.0], 1e-6, 8).unwrap(),
    ]
}

/// max_i |c_i - p_i|, with NaN taking precedence over any number.
fn infinity_norm_of_change(current: &[f64], previous: &[f64]) -> f64 {
    let diffs: Vec<f64> = current
        .iter()
        .zip(previous.iter())
        .map(|(c, p)| (c - p).abs())
        .collect();
    if diffs.iter().any(|d| d.is_nan()) {
        f64::NAN
    } else {
        diffs.into_iter().fold(0.0, f64::max)
    }
}

#[test]
fn error_is_infinity_norm_of_step() {
    for result in sample_results() {
        let mut previous = vec![0.0; result.solution.len()];
        let mut expected_errors = Vec::new();
        for record in &result.history {
            let current = record.values();
            let expected = infinity_norm_of_change(&current, &previous);
            assert_eq!(
                record.error, expected,
                "sweep {} error mismatch",
                record.iteration
            );
            expected_errors.push(expected);
            previous = current;
        }
        assert_eq!(result.error_history(), expected_errors);
    }
}

#[test]
fn overflowed_sweeps_report_nan_error() {
    let result = solve(&dmatrix![1.0, 3.0; 2.0, 1.0], &dvector![4.0, 3.0], 1e-6, 2000).unwrap();

    assert!(!result.converged);
    assert_eq!(result.iterations, 2000);

    let errors = result.error_history();
    assert_eq!(errors.len(), 2000);
    let first_nan = errors
        .iter()
        .position(|e| e.is_nan())
        .expect("iterates overflow well before the budget");

    // Once the step change is NaN it stays NaN, so no later sweep can pass the tolerance.
    assert!(errors[first_nan..].iter().all(|e| e.is_nan()));
    assert!(errors[..first_nan].iter().all(|e| *e > 1e-6));

    let mut previous = vec![0.0; 2];
    for record in &result.history {
        let current = record.values();
        let expected = infinity_norm_of_change(&current, &previous);
        assert!(
            record.error == expected || (record.error.is_nan() && expected.is_nan()),
            "sweep {}: {} vs {}",
            record.iteration,
            record.error,
            expected
        );
        previous = current;
    }
}

#[test]
fn is_new_flag_matches_column_order() {
    for result in sample_results() {
        for record in &result.history {
            for update in &record.updates {
                for term in &update.formula.contributions {
                    assert_ne!(term.column, update.index);
                    assert_eq!(term.is_new, term.column < update.index);
                }
            }
        }
    }
}

#[test]
fn values_used_come_from_current_or_previous_sweep() {
    for result in sample_results() {
        let mut previous = vec![0.0; result.solution.len()];
        for record in &result.history {
            let current = record.values();
            for update in &record.updates {
                for term in &update.formula.contributions {
                    let expected = if term.is_new {
                        current[term.column]
                    } else {
                        previous[term.column]
                    };
                    assert_eq!(term.value_used, expected);
                }
            }
            previous = current;
        }
    }
}

#[test]
fn formula_trace_reconstructs_value() {
    for result in sample_results() {
        for record in &result.history {
            for update in &record.updates {
                let rebuilt = update.formula.reconstruct();
                let scale = update.value.abs().max(1.0);
                assert!(
                    (rebuilt - update.value).abs() <= 1e-12 * scale,
                    "sweep {} x{}: {} vs {}",
                    record.iteration,
                    update.index + 1,
                    rebuilt,
                    update.value
                );
            }
        }
    }
}

#[test]
fn coefficients_are_raw_matrix_entries() {
    let system = textbook_example();
    let result = solve_gauss_seidel(&system, &GaussSeidelConfig::default());

    for record in &result.history {
        for update in &record.updates {
            let i = update.index;
            assert_eq!(update.formula.rhs, system.rhs()[i]);
            assert_eq!(update.formula.diagonal, system.diagonal(i));
            for term in &update.formula.contributions {
                assert_eq!(term.coefficient, system.coefficient(i, term.column));
            }
        }
    }
}

#[test]
fn textbook_example_matches_direct_solve() {
    let system = textbook_example();
    let direct = system
        .matrix()
        .clone()
        .lu()
        .solve(system.rhs())
        .expect("textbook matrix is non-singular");

    let result = solve(system.matrix(), system.rhs(), 1e-4, 100).unwrap();

    assert!(result.converged);
    assert!(result.iterations <= 100);
    for i in 0..3 {
        assert!(
            (result.solution[i] - direct[i]).abs() < 1e-3,
            "x{}: {} vs {}",
            i + 1,
            result.solution[i],
            direct[i]
        );
    }
}

#[test]
fn dominant_system_matches_direct_solve() {
    let system = dominant_system(20);
    assert!(system.is_diagonally_dominant());

    let direct = system.matrix().clone().lu().solve(system.rhs()).unwrap();
    let result = solve_gauss_seidel(&system, &GaussSeidelConfig::new(1e-12, 500));

    assert!(result.converged);
    for i in 0..20 {
        assert!((result.solution[i] - direct[i]).abs() < 1e-9);
    }
}

#[test]
fn zero_tolerance_exhausts_budget() {
    let result = solve(&dmatrix![4.0, 1.0; 1.0, 3.0], &dvector![1.0, 2.0], 0.0, 5).unwrap();

    // The step change shrinks geometrically but never hits exactly zero.
    assert!(!result.converged);
    assert_eq!(result.iterations, 5);
    assert_eq!(result.history.len(), 5);
    assert_eq!(
        result.history.iter().map(|r| r.iteration).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
}

#[test]
fn independent_solves_do_not_share_state() {
    let system = textbook_example();
    let config = GaussSeidelConfig::default();

    let first = solve_gauss_seidel(&system, &config);
    let second = solve_gauss_seidel(&system, &config);

    assert_eq!(first, second);
}

#[test]
fn result_serializes_to_json() {
    let result = solve(&dmatrix![2.0], &dvector![10.0], 1e-4, 10).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["converged"], true);
    assert_eq!(json["outcome"], "Converged");
    assert_eq!(json["history"][0]["updates"][0]["value"], 5.0);
    assert!(
        json["history"][0]["updates"][0]["formula"]["contributions"]
            .as_array()
            .unwrap()
            .is_empty()
    );
}
