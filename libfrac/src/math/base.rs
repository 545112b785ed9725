use num_traits::{One, PrimInt, Unsigned, Zero};
use std::fmt;
use std::hash::Hash;

/// A primitive integer that can serve as the numerator and denominator of a
/// [Fraction](crate::Fraction).
///
/// Beyond [PrimInt], a base knows whether it is signed and how to map itself onto its unsigned
/// counterpart without overflow. The latter is what lets [gcd](crate::gcd) accept
/// `i8::MIN`, whose absolute value does not fit in an `i8`.
pub trait FractionBase: PrimInt + Hash + fmt::Display + fmt::Debug {
    /// The unsigned type holding the magnitude of any value of this type.
    type Magnitude: FractionBase<Magnitude = Self::Magnitude> + Unsigned;

    /// Whether the type can represent negative values.
    const SIGNED: bool;

    /// |self| in the unsigned counterpart. Never overflows.
    fn magnitude(self) -> Self::Magnitude;
}

macro_rules! impl_signed_base {
    ($($ty:ty => $mag:ty)*) => {
    $(
        impl FractionBase for $ty {
            type Magnitude = $mag;
            const SIGNED: bool = true;

            #[inline]
            fn magnitude(self) -> $mag {
                self.unsigned_abs()
            }
        }
    )*
    }
}

macro_rules! impl_unsigned_base {
    ($($ty:ty)*) => {
    $(
        impl FractionBase for $ty {
            type Magnitude = $ty;
            const SIGNED: bool = false;

            #[inline]
            fn magnitude(self) -> $ty {
                self
            }
        }
    )*
    }
}

impl_signed_base! {
    i8 => u8
    i16 => u16
    i32 => u32
    i64 => u64
    i128 => u128
    isize => usize
}

impl_unsigned_base! { u8 u16 u32 u64 u128 usize }

/// Calculates |x|.
///
/// # Panics
///
/// Panics if |x| is not representable in `N`, which happens exactly for the minimum value of a
/// signed type. Use [FractionBase::magnitude] to route around it.
pub fn absolute<N: FractionBase>(x: N) -> N {
    if x >= N::zero() {
        return x;
    }
    match negate(x) {
        Some(abs) => abs,
        None => panic!("absolute value of {} is not representable", x),
    }
}

/// `-x`, or [None] if it is not representable (`-i8::MIN`, or any nonzero unsigned value).
#[inline]
pub(crate) fn negate<N: FractionBase>(x: N) -> Option<N> {
    N::zero().checked_sub(&x)
}

/// The value of `N` with magnitude `m` and the given sign, or [None] if it is not representable.
/// Unlike casting `m` and negating, this reaches `N::MIN`.
pub(crate) fn from_magnitude<N: FractionBase>(m: N::Magnitude, negative: bool) -> Option<N> {
    if !negative || m.is_zero() {
        return num_traits::cast(m);
    }
    // |MIN| = MAX + 1 does not fit, but MAX does.
    let below: N = num_traits::cast(m - One::one())?;
    negate(below)?.checked_sub(&N::one())
}

/// -1, 0, or 1 matching the sign of `x`.
#[inline]
pub(crate) fn sign<N: FractionBase>(x: N) -> N {
    if x > N::zero() {
        N::one()
    } else if x < N::zero() {
        N::zero() - N::one()
    } else {
        N::zero()
    }
}
