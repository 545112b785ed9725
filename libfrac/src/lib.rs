//! Exact fractions over fixed-width integers.
//!
//! A [Fraction] is a rational number `p/q` whose numerator and denominator are primitive
//! integers of the same [base type][FractionBase]. Every value is kept in a unique canonical form:
//! reduced to lowest terms, with a strictly positive denominator carrying no sign.
//!
//! Arithmetic never wraps. Operators panic when a result is not representable in the base type;
//! the [checked](num_traits::CheckedAdd) variants report the same condition as [None].

mod math;
pub use math::{absolute, gcd, FractionBase};

mod fraction;
pub use fraction::{abs, Fraction, ParseFractionError};

#[cfg(feature = "benchmark-internals")]
pub use fraction::_compare;

#[cfg(test)]
mod proptests;
