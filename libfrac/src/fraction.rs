//! The fraction core.
//!
//! [Fraction] construction and normalization live here; the operators, comparison, conversions,
//! bounds, and textual forms are split into submodules the way they would be for any other
//! numeric type.

use crate::math::{euclidean_gcd, from_magnitude, sign, FractionBase};
use num_traits::Zero;

mod bounds;
mod compare;
mod convert;
mod fmt;
mod ops;

pub use convert::abs;
pub use fmt::ParseFractionError;

#[cfg(feature = "benchmark-internals")]
pub use compare::_compare;

/// An exact rational number `numerator / denominator` over the integer base `N`.
///
/// Every live value is in canonical form:
///
/// - the denominator is strictly positive, so the numerator carries the sign of the value;
/// - the numerator and denominator share no common factor;
/// - zero is always `0/1`.
///
/// Because the form is unique, equality and hashing are structural.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Fraction<N> {
    numerator: N,
    denominator: N,
}

impl<N: FractionBase> Fraction<N> {
    /// Creates the canonical fraction equal to `numerator / denominator`.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero, or if the canonical form is not representable in `N`
    /// (`Fraction::<i8>::new(i8::MIN, -1)` would have numerator 128).
    pub fn new(numerator: N, denominator: N) -> Self {
        assert!(!denominator.is_zero(), "fraction denominator must be nonzero");
        match Self::reduce(numerator, denominator) {
            Some(fraction) => fraction,
            None => overflow("construct fraction"),
        }
    }

    /// [Fraction::new] without the panics: [None] if `denominator` is zero or the canonical form
    /// is not representable.
    pub fn checked_new(numerator: N, denominator: N) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        Self::reduce(numerator, denominator)
    }

    /// Reduces `numerator / denominator` to canonical form, or [None] if that form is not
    /// representable. `denominator` must be nonzero.
    pub(crate) fn reduce(numerator: N, denominator: N) -> Option<Self> {
        let negative = (numerator < N::zero()) != (denominator < N::zero());
        Self::from_magnitudes(numerator.magnitude(), denominator.magnitude(), negative)
    }

    /// The canonical form of `±numerator / denominator`. Reduction happens in the magnitude type,
    /// so a common factor of `|N::MIN|` divides out before anything is cast back to `N`.
    pub(crate) fn from_magnitudes(
        numerator: N::Magnitude,
        denominator: N::Magnitude,
        negative: bool,
    ) -> Option<Self> {
        debug_assert!(!denominator.is_zero());
        let g = euclidean_gcd(numerator, denominator);
        Some(Self {
            numerator: from_magnitude(numerator / g, negative)?,
            denominator: from_magnitude(denominator / g, false)?,
        })
    }

    /// The numerator; carries the sign of the fraction.
    #[inline]
    pub fn numerator(&self) -> N {
        self.numerator
    }

    /// The denominator; always positive.
    #[inline]
    pub fn denominator(&self) -> N {
        self.denominator
    }

    /// Whether the base type can represent negative fractions.
    #[inline]
    pub fn is_signed() -> bool {
        N::SIGNED
    }

    /// -1, 0, or 1 matching the sign of the fraction.
    pub fn signum(&self) -> N {
        sign(self.numerator)
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > N::zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < N::zero()
    }

    /// Whether the fraction is a whole number.
    pub fn is_integer(&self) -> bool {
        self.denominator == N::one()
    }
}

impl<N: FractionBase> From<N> for Fraction<N> {
    /// `n/1`.
    fn from(numerator: N) -> Self {
        Self {
            numerator,
            denominator: N::one(),
        }
    }
}

impl<N: FractionBase> Default for Fraction<N> {
    fn default() -> Self {
        Self::from(N::zero())
    }
}

/// Aborts an operation whose result is not representable.
#[cold]
#[track_caller]
pub(crate) fn overflow(op: &str) -> ! {
    panic!("attempt to {} with overflow", op)
}
