use crate::common::samples::CURVES;
use criterion::{black_box, Criterion};
use rbezier::sweep;

pub fn construct(c: &mut Criterion) {
    c.bench_function("construct", |b| {
        for curve in CURVES.iter() {
            b.iter(|| black_box(curve.construct(0.5)))
        }
    });
}

pub fn full_sweep(c: &mut Criterion) {
    c.bench_function("full_sweep", |b| {
        let curve = CURVES.HIGHER.last().unwrap();
        b.iter(|| {
            for t in sweep(0.01).unwrap() {
                black_box(curve.construct(t)).ok();
            }
        })
    });
}

pub fn all(c: &mut Criterion) {
    construct(c);
    full_sweep(c);
}
