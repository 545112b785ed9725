//! Conversions into and out of [Fraction]s.

use super::Fraction;
use crate::math::{absolute, FractionBase};
use num_traits::{PrimInt, Signed};

impl<N: FractionBase> Fraction<N> {
    /// Creates `source/1` if `source` fits exactly in `N`, in both value and sign.
    ///
    /// ```
    /// # use libfrac::Fraction;
    /// assert_eq!(Fraction::<i8>::try_exact(4u64), Some(Fraction::from(4)));
    /// assert_eq!(Fraction::<i8>::try_exact(128i32), None);
    /// assert_eq!(Fraction::<u8>::try_exact(-1i8), None);
    /// ```
    pub fn try_exact<S: PrimInt>(source: S) -> Option<Self> {
        num_traits::cast::<S, N>(source).map(Self::from)
    }

    /// Re-expresses a fraction of another base in `N`, if both of its parts fit.
    pub fn try_exact_from<M: FractionBase>(source: Fraction<M>) -> Option<Self> {
        // A canonical fraction stays canonical under a value-preserving cast.
        Some(Self {
            numerator: num_traits::cast(source.numerator)?,
            denominator: num_traits::cast(source.denominator)?,
        })
    }

    /// The fraction as an integer, if it is one.
    pub fn integer_value(&self) -> Option<N> {
        if self.is_integer() {
            Some(self.numerator)
        } else {
            None
        }
    }

    /// The fraction as an integer, rounded toward zero.
    pub fn integer_approximation(&self) -> N {
        self.numerator / self.denominator
    }

    /// The nearest `f64` to the fraction.
    pub fn double_approximation(&self) -> f64 {
        to_f64(self.numerator) / to_f64(self.denominator)
    }

    /// |self| in the unsigned counterpart of `N`. Unlike [abs], never overflows.
    pub fn magnitude(&self) -> Fraction<N::Magnitude> {
        Fraction {
            numerator: self.numerator.magnitude(),
            denominator: self.denominator.magnitude(),
        }
    }
}

/// Goes through `i64` when the value fits, which is exact for every base up to 64 bits.
fn to_f64<N: FractionBase>(n: N) -> f64 {
    match n.to_i64() {
        Some(n) => n as f64,
        // u64 and 128-bit values out of i64 range; `to_f64` is infallible for primitives.
        None => n.to_f64().unwrap_or(f64::NAN),
    }
}

/// |x|, staying in the base type of `x`.
///
/// # Panics
///
/// Panics if the numerator of `x` is the minimum value of `N`, whose absolute value is not
/// representable. See [Fraction::magnitude] for an infallible alternative.
pub fn abs<N: FractionBase + Signed>(x: Fraction<N>) -> Fraction<N> {
    Fraction {
        numerator: absolute(x.numerator),
        denominator: x.denominator,
    }
}
