//! Benchmarks for the traced Gauss-Seidel solver.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nalgebra::{DMatrix, DVector};
use seidel_core::LinearSystem;
use seidel_solver::{GaussSeidelConfig, solve_gauss_seidel};

fn bench_gauss_seidel(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_seidel");

    for size in [3, 10, 50, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &size,
            |bencher, &size| {
                // Diagonally dominant, so every size converges
                let a = DMatrix::from_fn(size, size, |i, j| {
                    if i == j {
                        (size as f64) + 1.0
                    } else {
                        1.0 / ((i as f64 - j as f64).abs() + 1.0)
                    }
                });
                let rhs = DVector::from_fn(size, |i, _| (i + 1) as f64);
                let system = LinearSystem::new(a, rhs).unwrap();
                let config = GaussSeidelConfig::new(1e-10, 200);

                bencher.iter(|| solve_gauss_seidel(black_box(&system), black_box(&config)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_gauss_seidel);
criterion_main!(benches);
