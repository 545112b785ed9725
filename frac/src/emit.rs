//! Emit strategies for evaluated fractions.

use libfrac::{Fraction, FractionBase};
use std::str::FromStr;
use thiserror::Error;

/// The format in which the result of a program should be emitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputForm {
    /// Canonical `numerator/denominator` form.
    /// For example, `6/4` is output as `3/2`.
    Fraction,
    /// The nearest double. For example, `6/4` is output as `1.5`.
    Decimal,
    /// The integer part, truncated toward zero. For example, `-7/2` is output as `-3`.
    Integer,
    /// frac internal debug form.
    /// NB: this form is not stable, and no assumptions should be made about it.
    Debug,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not an output form")]
pub struct UnknownOutputForm(String);

impl FromStr for OutputForm {
    type Err = UnknownOutputForm;

    fn from_str(form: &str) -> Result<Self, Self::Err> {
        match form {
            "fraction" => Ok(OutputForm::Fraction),
            "decimal" => Ok(OutputForm::Decimal),
            "integer" => Ok(OutputForm::Integer),
            "debug" => Ok(OutputForm::Debug),
            other => Err(UnknownOutputForm(other.to_owned())),
        }
    }
}

/// Implements the emission of a type in an [OutputForm].
pub trait Emit {
    /// Emit `self` with the given [OutputForm].
    fn emit(&self, form: OutputForm) -> String {
        match form {
            OutputForm::Fraction => self.emit_fraction(),
            OutputForm::Decimal => self.emit_decimal(),
            OutputForm::Integer => self.emit_integer(),
            OutputForm::Debug => self.emit_debug(),
        }
    }

    fn emit_fraction(&self) -> String;

    fn emit_decimal(&self) -> String;

    fn emit_integer(&self) -> String;

    fn emit_debug(&self) -> String;
}

impl<N: FractionBase> Emit for Fraction<N> {
    fn emit_fraction(&self) -> String {
        self.to_string()
    }

    fn emit_decimal(&self) -> String {
        self.double_approximation().to_string()
    }

    fn emit_integer(&self) -> String {
        self.integer_approximation().to_string()
    }

    fn emit_debug(&self) -> String {
        format!("{:?}", self)
    }
}
