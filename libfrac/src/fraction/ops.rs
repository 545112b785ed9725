#![allow(clippy::suspicious_arithmetic_impl)]
use super::{overflow, Fraction};
use crate::math::{checked_gcd, euclidean_gcd, negate, FractionBase};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Signed, Zero};
use std::iter::{Product, Sum};
use std::ops;

/// Two fractions rescaled over their lowest common denominator.
pub(super) struct CommonDenominator<N> {
    pub(super) lhs_numerator: N,
    pub(super) rhs_numerator: N,
    lhs_factor: N,
    rhs_denominator: N,
}

impl<N: FractionBase> CommonDenominator<N> {
    /// The common denominator itself. Ordering never needs it, so it is computed on demand.
    pub(super) fn denominator(&self) -> Option<N> {
        self.lhs_factor.checked_mul(&self.rhs_denominator)
    }
}

/// Rescales `lhs` and `rhs` over lcd(lhs.denominator, rhs.denominator), or [None] if a rescaled
/// numerator overflows.
pub(super) fn lcd<N: FractionBase>(
    lhs: &Fraction<N>,
    rhs: &Fraction<N>,
) -> Option<CommonDenominator<N>> {
    // Denominators are positive, so their gcd always fits.
    let g = checked_gcd(lhs.denominator, rhs.denominator)?;
    let lhs_factor = lhs.denominator / g;
    Some(CommonDenominator {
        lhs_numerator: lhs.numerator.checked_mul(&(rhs.denominator / g))?,
        rhs_numerator: rhs.numerator.checked_mul(&lhs_factor)?,
        lhs_factor,
        rhs_denominator: rhs.denominator,
    })
}

impl<N: FractionBase> CheckedAdd for Fraction<N> {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let lcd = lcd(self, rhs)?;
        let numerator = lcd.lhs_numerator.checked_add(&lcd.rhs_numerator)?;
        Fraction::reduce(numerator, lcd.denominator()?)
    }
}

impl<N: FractionBase> CheckedSub for Fraction<N> {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let lcd = lcd(self, rhs)?;
        let numerator = lcd.lhs_numerator.checked_sub(&lcd.rhs_numerator)?;
        Fraction::reduce(numerator, lcd.denominator()?)
    }
}

impl<N: FractionBase> CheckedMul for Fraction<N> {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let negative = self.is_negative() != rhs.is_negative();
        let (lhs, rhs) = (self.magnitude(), rhs.magnitude());
        // Cross-reduce first so that the products only overflow when the result does.
        let g1 = euclidean_gcd(lhs.numerator, rhs.denominator);
        let g2 = euclidean_gcd(lhs.denominator, rhs.numerator);
        let numerator = (lhs.numerator / g1).checked_mul(&(rhs.numerator / g2))?;
        let denominator = (lhs.denominator / g2).checked_mul(&(rhs.denominator / g1))?;
        Self::from_magnitudes(numerator, denominator, negative)
    }
}

impl<N: FractionBase> CheckedDiv for Fraction<N> {
    /// [None] on overflow or when `rhs` is zero.
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.numerator.is_zero() {
            return None;
        }
        let negative = self.is_negative() != rhs.is_negative();
        let (lhs, rhs) = (self.magnitude(), rhs.magnitude());
        let g1 = euclidean_gcd(lhs.numerator, rhs.numerator);
        let g2 = euclidean_gcd(lhs.denominator, rhs.denominator);
        let numerator = (lhs.numerator / g1).checked_mul(&(rhs.denominator / g2))?;
        let denominator = (lhs.denominator / g2).checked_mul(&(rhs.numerator / g1))?;
        Self::from_magnitudes(numerator, denominator, negative)
    }
}

impl<N: FractionBase> Fraction<N> {
    /// `-self`, or [None] if the numerator cannot be negated. For unsigned bases only zero can be.
    pub fn checked_neg(&self) -> Option<Self> {
        Some(Self {
            numerator: negate(self.numerator)?,
            denominator: self.denominator,
        })
    }

    /// `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero or its reciprocal is not representable.
    pub fn recip(&self) -> Self {
        assert!(
            !self.numerator.is_zero(),
            "attempt to take the reciprocal of a zero fraction"
        );
        match Self::reduce(self.denominator, self.numerator) {
            Some(recip) => recip,
            None => overflow("take the reciprocal of a fraction"),
        }
    }
}

impl<N: FractionBase> ops::Add for Fraction<N> {
    type Output = Fraction<N>;

    fn add(self, rhs: Fraction<N>) -> Fraction<N> {
        match self.checked_add(&rhs) {
            Some(sum) => sum,
            None => overflow("add fractions"),
        }
    }
}

impl<N: FractionBase> ops::Sub for Fraction<N> {
    type Output = Fraction<N>;

    fn sub(self, rhs: Fraction<N>) -> Fraction<N> {
        match self.checked_sub(&rhs) {
            Some(difference) => difference,
            None => overflow("subtract fractions"),
        }
    }
}

impl<N: FractionBase> ops::Mul for Fraction<N> {
    type Output = Fraction<N>;

    fn mul(self, rhs: Fraction<N>) -> Fraction<N> {
        match self.checked_mul(&rhs) {
            Some(product) => product,
            None => overflow("multiply fractions"),
        }
    }
}

impl<N: FractionBase> ops::Div for Fraction<N> {
    type Output = Fraction<N>;

    fn div(self, rhs: Fraction<N>) -> Fraction<N> {
        assert!(
            !rhs.numerator.is_zero(),
            "attempt to divide by a zero fraction"
        );
        match self.checked_div(&rhs) {
            Some(quotient) => quotient,
            None => overflow("divide fractions"),
        }
    }
}

impl<N: FractionBase + Signed> ops::Neg for Fraction<N> {
    type Output = Fraction<N>;

    fn neg(self) -> Fraction<N> {
        match self.checked_neg() {
            Some(negated) => negated,
            None => overflow("negate fraction"),
        }
    }
}

impl<N: FractionBase> ops::AddAssign for Fraction<N> {
    fn add_assign(&mut self, rhs: Fraction<N>) {
        *self = *self + rhs;
    }
}

impl<N: FractionBase> ops::SubAssign for Fraction<N> {
    fn sub_assign(&mut self, rhs: Fraction<N>) {
        *self = *self - rhs;
    }
}

impl<N: FractionBase> ops::MulAssign for Fraction<N> {
    fn mul_assign(&mut self, rhs: Fraction<N>) {
        *self = *self * rhs;
    }
}

impl<N: FractionBase> ops::DivAssign for Fraction<N> {
    fn div_assign(&mut self, rhs: Fraction<N>) {
        *self = *self / rhs;
    }
}

impl<N: FractionBase> Zero for Fraction<N> {
    fn zero() -> Self {
        Self::from(N::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<N: FractionBase> One for Fraction<N> {
    fn one() -> Self {
        Self::from(N::one())
    }
}

impl<N: FractionBase> Sum for Fraction<N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<N: FractionBase> Product for Fraction<N> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}
