use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use subset_blocks::cs::combinatorial::subset::{SubsetSolver, ValueCountMap};

fn coin_tray(scale: usize) -> ValueCountMap {
    [(1, 5 * scale), (5, 2 * scale), (10, scale), (25, scale)]
        .into_iter()
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset_construction");
    for scale in [1, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            b.iter(|| SubsetSolver::new(black_box(coin_tray(scale))).unwrap());
        });
    }
    group.finish();
}

fn bench_solvers(c: &mut Criterion) {
    let solver = SubsetSolver::new(coin_tray(4)).unwrap();
    let (_, high) = solver.range();

    c.bench_function("least_number_solve", |b| {
        b.iter(|| {
            for target in 0..=high {
                black_box(solver.least_number_solve(black_box(target)));
            }
        })
    });

    c.bench_function("anilao_solve", |b| {
        b.iter(|| {
            for target in 0..=high {
                black_box(solver.anilao_solve(black_box(target)));
            }
        })
    });
}

criterion_group!(benches, bench_construction, bench_solvers);
criterion_main!(benches);
