//! Benchmarks for rope stepping at different stiffness settings.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tether::*;

fn bench_attached_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("attached_step_60_frames");
    for iterations in [8usize, 32, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(iterations), &iterations, |b, &it| {
            b.iter(|| {
                let mut rope: RopeController = RopeController::default();
                rope.set_iterations(it);
                rope.set_anchor(0.9, 0.1);
                rope.attach();
                for frame in 0..60 {
                    rope.set_anchor(0.9 - frame as f32 * 0.005, 0.1);
                    rope.step(16.0);
                }
                rope.positions_flat()
            });
        });
    }
    group.finish();
}

fn bench_build_long_rope(c: &mut Criterion) {
    c.bench_function("build_capped_rope", |b| {
        let builder = RopeBuilder::new(0.0001f32, 2000);
        b.iter(|| builder.build(black_box(Vec2::new(0.0, 0.0)), black_box(Vec2::new(1.0, 1.0))));
    });
}

fn bench_relax(c: &mut Criterion) {
    c.bench_function("relax_125_nodes_64_iterations", |b| {
        let chain = RopeBuilder::new(0.008f32, 2000)
            .build(Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.5))
            .expect("endpoints are apart");
        let solver = ConstraintSolver::new(0.008, 64).with_bounds(BoundsConstraint::unit());
        b.iter(|| {
            let mut chain = chain.clone();
            solver.relax(&mut chain, Vec2::new(0.8, 0.5), &mut NoOpStepObserver);
            chain
        });
    });
}

criterion_group!(benches, bench_attached_step, bench_build_long_rope, bench_relax);
criterion_main!(benches);
