#[macro_use]
extern crate criterion;
extern crate libfrac;

use criterion::Criterion;
use libfrac::{Fraction, _compare};

const CASES: [&str; 5] = ["eq", "lte", "lt", "gte", "gt"];

macro_rules! bench_fraction_cmp {
    ($($name: ident: ($n1: expr, $d1: expr), ($n2: expr, $d2: expr))*) => {
    $(
        fn $name(c: &mut Criterion) {
            for item in CASES.iter() {
                c.bench_function(&(concat!("Fraction_", stringify!($name), "_cmp_").to_string() + (*item)), |b| {
                    b.iter(|| {
                        _compare(Fraction::<i64>::new($n1, $d1), Fraction::new($n2, $d2), item);
                    })
                });
            }
        }
    )*
    }
}

bench_fraction_cmp! {
    small: (3, 4), (4, 5)
    lcd: (-1_009, 10_007), (1_013, 10_009)
    quotients: (i64::MAX - 1, i64::MAX), (i64::MAX - 2, i64::MAX - 1)
}

criterion_group!(fraction_cmp_benches, small, lcd, quotients);
criterion_main!(fraction_cmp_benches);
