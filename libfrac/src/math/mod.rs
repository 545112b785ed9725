//! Integer utilities the [fraction core](crate::Fraction) is built on.
//!
//! Everything here is generic over [FractionBase], the capability set a primitive integer needs
//! to act as the base of a fraction.

mod base;
pub use base::*;

mod gcd;
pub use gcd::*;
