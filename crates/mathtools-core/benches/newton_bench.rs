use criterion::{criterion_group, criterion_main, Criterion};
use mathtools_core::{arcsin, arctan, power, root, sqrt};
use std::hint::black_box;

fn bench_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt_newton");
    group.bench_function("sqrt_2", |b| b.iter(|| sqrt(black_box(2.0))));
    // Starting guess n/2 halves for ~500 steps before the quadratic phase.
    group.bench_function("sqrt_1e300", |b| b.iter(|| sqrt(black_box(1e300))));
    group.finish();
}

fn bench_inverse_trig(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_trig_newton");
    group.bench_function("arcsin_0.5", |b| b.iter(|| arcsin(black_box(0.5))));
    group.bench_function("arcsin_0.999", |b| b.iter(|| arcsin(black_box(0.999))));
    group.bench_function("arctan_0.7", |b| b.iter(|| arctan(black_box(0.7))));
    group.bench_function("arctan_50", |b| b.iter(|| arctan(black_box(50.0))));
    group.finish();
}

fn bench_power_root(c: &mut Criterion) {
    c.bench_function("power_real_exponent", |b| {
        b.iter(|| power(black_box(3.7), black_box(2.25)))
    });
    c.bench_function("root_cube", |b| b.iter(|| root(black_box(27.0), black_box(3))));
}

criterion_group!(benches, bench_sqrt, bench_inverse_trig, bench_power_root);
criterion_main!(benches);
