use super::FractionBase;
use num_traits::{PrimInt, Unsigned};

/// Calculates the greatest nonnegative common divisor of `u` and `v`.
///
/// The computation runs on the [magnitudes](FractionBase::magnitude) of the arguments, so the
/// minimum value of a signed type is accepted as long as the result fits: `gcd(i8::MIN, 6) == 2`.
///
/// A Euclidean method is used as the underlying implementation.
///
/// # Panics
///
/// Panics if both arguments are zero, or if the divisor is not representable in `N`
/// (`gcd(i8::MIN, 0) == 128`).
pub fn gcd<N: FractionBase>(u: N, v: N) -> N {
    assert!(!(u.is_zero() && v.is_zero()), "gcd(0, 0) is undefined");
    match checked_gcd(u, v) {
        Some(g) => g,
        None => panic!("gcd({}, {}) is not representable", u, v),
    }
}

/// [gcd] without the panics: [None] if the divisor does not fit in `N`. `checked_gcd(0, 0)` is
/// `Some(0)`; callers guarantee a nonzero argument.
#[inline]
pub(crate) fn checked_gcd<N: FractionBase>(u: N, v: N) -> Option<N> {
    num_traits::cast(euclidean_gcd(u.magnitude(), v.magnitude()))
}

/// The [Euclidean GCD] algorithm.
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
pub(crate) fn euclidean_gcd<M: Unsigned + PrimInt>(mut u: M, mut v: M) -> M {
    if u < v {
        std::mem::swap(&mut u, &mut v);
    }
    let mut t;
    while !v.is_zero() {
        t = v;
        v = u % v;
        u = t;
    }
    u
}
