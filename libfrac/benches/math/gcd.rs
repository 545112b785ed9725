#[macro_use]
extern crate criterion;
extern crate libfrac;

use criterion::{black_box, Criterion};
use libfrac::{gcd, Fraction};

const SIGNED: [(i64, i64); 4] = [
    (-288_481, 22_783),
    (939_841_321, -28_847_717),
    (i64::MIN, 6),
    (i64::MIN + 1, i64::MAX),
];

const WIDE: [(u128, u128); 2] = [
    (u128::MAX, 340_282_366_920_938_463_463_374_607_431_768_211_453),
    (1 << 127, 3 << 100),
];

fn bench_gcd_signed(c: &mut Criterion) {
    c.bench_function("gcd_i64", |b| {
        b.iter(|| {
            for (u, v) in SIGNED.iter() {
                gcd(black_box(*u), black_box(*v));
            }
        })
    });
}

fn bench_gcd_wide(c: &mut Criterion) {
    c.bench_function("gcd_u128", |b| {
        b.iter(|| {
            for (u, v) in WIDE.iter() {
                gcd(black_box(*u), black_box(*v));
            }
        })
    });
}

fn bench_normalize_min(c: &mut Criterion) {
    c.bench_function("Fraction_i64_new_min", |b| {
        b.iter(|| {
            Fraction::new(black_box(i64::MIN), black_box(i64::MIN));
            Fraction::new(black_box(i64::MIN), black_box(-(1 << 40)));
        })
    });
}

criterion_group!(
    gcd_benches,
    bench_gcd_signed,
    bench_gcd_wide,
    bench_normalize_min
);
criterion_main!(gcd_benches);
