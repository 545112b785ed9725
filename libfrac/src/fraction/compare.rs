use super::ops::lcd;
use super::Fraction;
use crate::math::FractionBase;
use std::cmp::Ordering;

impl<N: FractionBase> Ord for Fraction<N> {
    fn cmp(&self, other: &Fraction<N>) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        match lcd(self, other) {
            Some(lcd) => lcd.lhs_numerator.cmp(&lcd.rhs_numerator),
            None => cmp_by_quotients(
                (self.numerator, self.denominator),
                (other.numerator, other.denominator),
            ),
        }
    }
}

impl<N: FractionBase> PartialOrd for Fraction<N> {
    fn partial_cmp(&self, other: &Fraction<N>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compares `lhs.0 / lhs.1` against `rhs.0 / rhs.1` for positive denominators without any
/// multiplication, by comparing floored quotients and then the reciprocals of the remainders.
fn cmp_by_quotients<N: FractionBase>(mut lhs: (N, N), mut rhs: (N, N)) -> Ordering {
    loop {
        let (lhs_quot, lhs_rem) = div_mod_floor(lhs.0, lhs.1);
        let (rhs_quot, rhs_rem) = div_mod_floor(rhs.0, rhs.1);
        if lhs_quot != rhs_quot {
            return lhs_quot.cmp(&rhs_quot);
        }
        match (lhs_rem.is_zero(), rhs_rem.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {
                // a/b < c/d ⇔ d/c < b/a for proper fractions, so swap sides and recurse.
                let next_rhs = (lhs.1, lhs_rem);
                lhs = (rhs.1, rhs_rem);
                rhs = next_rhs;
            }
        }
    }
}

/// `(⌊n / d⌋, n mod d)` for `d > 0`, with the remainder in `[0, d)`.
fn div_mod_floor<N: FractionBase>(n: N, d: N) -> (N, N) {
    let (quot, rem) = (n / d, n % d);
    if rem < N::zero() {
        (quot - N::one(), rem + d)
    } else {
        (quot, rem)
    }
}

#[cfg(feature = "benchmark-internals")]
pub fn _compare<N: FractionBase>(u: Fraction<N>, v: Fraction<N>, s: &str) -> bool {
    match s {
        "eq" => u == v,
        "lte" => u <= v,
        "lt" => u < v,
        "gte" => u >= v,
        "gt" => u > v,
        _ => unreachable!(),
    }
}
