#[macro_use]
extern crate criterion;
extern crate libfrac;

use criterion::{black_box, Criterion};
use libfrac::Fraction;

const INPUT: [((i64, i64), (i64, i64)); 3] = [
    ((1, 3), (2, 7)),
    ((-1_009, 10_007), (303, 33)),
    ((7, 1 << 31), (3, 1 << 30)),
];

macro_rules! bench_fraction_op {
    ($($name: ident: $op: tt)*) => {
        $(
        fn $name(c: &mut Criterion) {
            c.bench_function(concat!("Fraction_i64_", stringify!($name)), |b| {
                b.iter(|| {
                    for ((n1, d1), (n2, d2)) in INPUT.iter() {
                        let lhs = Fraction::new(black_box(*n1), black_box(*d1));
                        let rhs = Fraction::new(black_box(*n2), black_box(*d2));
                        black_box(lhs $op rhs);
                    }
                })
            });
        }
        )*
    }
}

bench_fraction_op! {
    add: +
    sub: -
    mul: *
    div: /
}

criterion_group!(fraction_op_benches, add, sub, mul, div);
criterion_main!(fraction_op_benches);
