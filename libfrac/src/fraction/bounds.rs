use super::Fraction;
use crate::math::{negate, FractionBase};
use num_traits::Bounded;

impl<N: FractionBase> Fraction<N> {
    /// The largest fraction, `N::MAX/1`.
    pub fn max() -> Self {
        Self::from(N::max_value())
    }

    /// The smallest fraction.
    ///
    /// For two's-complement signed bases this is `-N::MAX/1` rather than `N::MIN/1`, so that the
    /// bounds are symmetric and every fraction in range can be negated. For unsigned bases it is
    /// zero.
    pub fn min() -> Self {
        let (min, max) = (N::min_value(), N::max_value());
        if min + max < N::zero() {
            match negate(max) {
                Some(min) => Self::from(min),
                None => unreachable!("-{} is representable when MIN + MAX < 0", max),
            }
        } else {
            Self::from(min)
        }
    }

    /// The smallest positive fraction, `1/N::MAX`.
    pub fn least_nonzero_magnitude() -> Self {
        Self {
            numerator: N::one(),
            denominator: N::max_value(),
        }
    }
}

impl<N: FractionBase> Bounded for Fraction<N> {
    fn min_value() -> Self {
        Self::min()
    }

    fn max_value() -> Self {
        Self::max()
    }
}
