use criterion::{criterion_group, criterion_main, Criterion};
use mathtools_core::series::{cos, sin};
use mathtools_core::{exp, ln, tan};
use std::hint::black_box;

fn angles() -> Vec<f64> {
    (0..256).map(|i| (i as f64 - 128.0) * 0.0491).collect()
}

fn bench_sin_cos(c: &mut Criterion) {
    let xs = angles();
    let mut group = c.benchmark_group("series_trig_256");

    group.bench_function("sin", |b| {
        b.iter(|| {
            let acc: f64 = xs.iter().map(|&x| sin(black_box(x))).sum();
            black_box(acc);
        })
    });
    group.bench_function("cos", |b| {
        b.iter(|| {
            let acc: f64 = xs.iter().map(|&x| cos(black_box(x))).sum();
            black_box(acc);
        })
    });
    group.bench_function("tan", |b| {
        b.iter(|| {
            let acc: f64 = xs.iter().filter_map(|&x| tan(black_box(x)).ok()).sum();
            black_box(acc);
        })
    });
    group.bench_function("std_sin_baseline", |b| {
        b.iter(|| {
            let acc: f64 = xs.iter().map(|&x| black_box(x).sin()).sum();
            black_box(acc);
        })
    });

    group.finish();
}

fn bench_exp_ln(c: &mut Criterion) {
    c.bench_function("exp_series_10", |b| b.iter(|| exp(black_box(10.0))));
    c.bench_function("ln_series_1e10", |b| b.iter(|| ln(black_box(1e10))));
}

criterion_group!(benches, bench_sin_cos, bench_exp_ln);
criterion_main!(benches);
