//! Property-based tests for fraction arithmetic.

use crate::{gcd, Fraction};
use num_traits::{CheckedAdd, CheckedMul, One, Zero};
use proptest::prelude::*;

fn small_int() -> impl Strategy<Value = i64> {
    -10_000i64..10_000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
}

fn fraction() -> impl Strategy<Value = Fraction<i64>> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d))
}

fn non_zero_fraction() -> impl Strategy<Value = Fraction<i64>> {
    (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d))
}

fn is_canonical<N: crate::FractionBase>(f: &Fraction<N>) -> bool {
    f.denominator() > N::zero()
        && if f.numerator().is_zero() {
            f.denominator() == N::one()
        } else {
            gcd(f.numerator(), f.denominator()) == N::one()
        }
}

proptest! {
    #[test]
    fn new_is_canonical(n in small_int(), d in non_zero_int()) {
        let f = Fraction::new(n, d);
        prop_assert!(is_canonical(&f));
        // sign(numerator) == sign(n / d)
        prop_assert_eq!(f.numerator().signum(), n.signum() * d.signum());
        // Same value: n * f.d == f.n * d
        prop_assert_eq!(n * f.denominator(), f.numerator() * d);
    }

    #[test]
    fn reduction_is_idempotent(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
        prop_assert_eq!(Fraction::new(n, d), Fraction::new(n * k, d * k));
    }

    #[test]
    fn arithmetic_is_canonical(a in fraction(), b in non_zero_fraction()) {
        prop_assert!(is_canonical(&(a + b)));
        prop_assert!(is_canonical(&(a - b)));
        prop_assert!(is_canonical(&(a * b)));
        prop_assert!(is_canonical(&(a / b)));
    }

    #[test]
    fn additive_identity_and_inverse(a in fraction()) {
        prop_assert_eq!(a + Fraction::zero(), a);
        prop_assert_eq!(a + (-a), Fraction::zero());
        prop_assert_eq!(a - a, Fraction::zero());
    }

    #[test]
    fn multiplicative_identity_and_inverse(a in non_zero_fraction()) {
        prop_assert_eq!(a * Fraction::one(), a);
        prop_assert_eq!(a * a.recip(), Fraction::one());
        prop_assert_eq!(a / a, Fraction::one());
    }

    #[test]
    fn add_commutative(a in fraction(), b in fraction()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn mul_commutative(a in fraction(), b in fraction()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn distributive(a in fraction(), b in fraction(), c in fraction()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[test]
    fn sub_then_add_roundtrips(a in fraction(), b in fraction()) {
        prop_assert_eq!((a - b) + b, a);
    }

    #[test]
    fn div_then_mul_roundtrips(a in fraction(), b in non_zero_fraction()) {
        prop_assert_eq!((a / b) * b, a);
    }

    #[test]
    fn ordering_matches_doubles(a in fraction(), b in fraction()) {
        // Values are small enough that distinct fractions have distinct doubles.
        let (x, y) = (a.double_approximation(), b.double_approximation());
        prop_assert_eq!(a.partial_cmp(&b), x.partial_cmp(&y));
    }

    #[test]
    fn ordering_is_translation_invariant(a in fraction(), b in fraction(), c in fraction()) {
        prop_assert_eq!(a.cmp(&b), (a + c).cmp(&(b + c)));
    }

    #[test]
    fn checked_ops_never_wrap(a in any::<i8>(), b in 1i8..=i8::MAX, c in any::<i8>(), d in 1i8..=i8::MAX) {
        let (x, y) = (Fraction::new(a, b), Fraction::new(c, d));
        // Widen to i64, where nothing overflows, to get the exact results.
        let wide = |f: Fraction<i8>| Fraction::<i64>::try_exact_from(f).unwrap();
        let exact = [
            (x.checked_add(&y), wide(x) + wide(y)),
            (x.checked_mul(&y), wide(x) * wide(y)),
        ];
        for (checked, exact) in exact.iter() {
            if let Some(result) = checked {
                prop_assert_eq!(wide(*result), *exact);
            }
            if Fraction::<i8>::try_exact_from(*exact).is_none() {
                prop_assert!(checked.is_none());
            }
        }
    }

    #[test]
    fn display_parses_back(a in fraction()) {
        prop_assert_eq!(a.to_string().parse::<Fraction<i64>>(), Ok(a));
    }

    #[test]
    fn integer_approximation_truncates(a in fraction()) {
        let q = a.integer_approximation();
        // |a - q| < 1 and q lies between 0 and a.
        prop_assert!((a - Fraction::from(q)).magnitude() < Fraction::one());
        prop_assert!(Fraction::from(q).magnitude() <= a.magnitude());
    }
}
