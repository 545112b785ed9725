//! The textual form of a fraction, `numerator/denominator`.

use super::Fraction;
use crate::math::FractionBase;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

impl<N: FractionBase> fmt::Display for Fraction<N> {
    /// Writes `numerator/denominator` with no padding, e.g. `-1009/10007` or `0/1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Why a string could not be read as a [Fraction].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFractionError {
    #[error("cannot parse a fraction from an empty string")]
    Empty,
    #[error("invalid numerator `{0}`")]
    InvalidNumerator(String),
    #[error("invalid denominator `{0}`")]
    InvalidDenominator(String),
    #[error("fraction denominator must be nonzero")]
    ZeroDenominator,
    #[error("`{0}` has no representable canonical form")]
    Unrepresentable(String),
}

impl<N: FractionBase> FromStr for Fraction<N> {
    type Err = ParseFractionError;

    /// Parses `n` or `n/d`, where both parts are decimal integers of the base type with an
    /// optional sign. The result is reduced; unlike [Fraction::new], a zero denominator is an
    /// error rather than a panic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseFractionError::Empty);
        }

        let (numerator, denominator) = match s.find('/') {
            Some(i) => (&s[..i], Some(&s[i + 1..])),
            None => (s, None),
        };
        let numerator = parse_part(numerator)
            .ok_or_else(|| ParseFractionError::InvalidNumerator(numerator.trim().to_owned()))?;
        let denominator = match denominator {
            Some(denominator) => parse_part(denominator).ok_or_else(|| {
                ParseFractionError::InvalidDenominator(denominator.trim().to_owned())
            })?,
            None => N::one(),
        };
        if denominator.is_zero() {
            return Err(ParseFractionError::ZeroDenominator);
        }

        Fraction::reduce(numerator, denominator)
            .ok_or_else(|| ParseFractionError::Unrepresentable(s.to_owned()))
    }
}

fn parse_part<N: FractionBase>(part: &str) -> Option<N> {
    N::from_str_radix(part.trim(), 10).ok()
}
