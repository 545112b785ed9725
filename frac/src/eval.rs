//! Evaluation of fraction expressions.
//!
//! A program is an arithmetic expression over integer literals:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := '-' unary | atom
//! atom   := INTEGER | '(' expr ')'
//! ```
//!
//! Every literal is a whole [Fraction] in the chosen base, and `/` is fraction division, so
//! `303/33` evaluates to `101/11`. Evaluation uses checked arithmetic throughout; a result that
//! does not fit the base is reported as an [EvalError] rather than a panic.

use libfrac::{Fraction, FractionBase};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};
use std::marker::PhantomData;
use thiserror::Error;
use tracing::{debug, trace};

/// Describes the byte span of a substring in a program.
///
/// For example, in "abcdef", "bcd" has the span (1, 4).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Span {
    /// Inclusive lower bound index of the span
    pub lo: usize,
    /// Exclusive upper bound index of the span
    pub hi: usize,
}

impl Span {
    fn to(self, other: Span) -> Span {
        Span {
            lo: self.lo,
            hi: other.hi,
        }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(span: std::ops::Range<usize>) -> Self {
        Self {
            lo: span.start,
            hi: span.end,
        }
    }
}

/// What went wrong while evaluating a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    #[error("expected {0}, found end of input")]
    UnexpectedEnd(&'static str),
    #[error("integer literal `{literal}` does not fit in {base}")]
    LiteralOutOfRange { literal: String, base: &'static str },
    #[error("division by zero")]
    DivisionByZero,
    #[error("{op} overflows {base}")]
    Overflow { op: &'static str, base: &'static str },
    #[error("cannot negate a nonzero {0} fraction")]
    UnsignedNegation(&'static str),
    #[error("expression nested too deeply; the limit is {0} levels")]
    NestedTooDeeply(usize),
}

impl EvalErrorKind {
    /// A short explanation of the error attached to its span.
    pub fn label(&self) -> &'static str {
        match self {
            EvalErrorKind::UnexpectedChar(_) => "not part of a fraction expression",
            EvalErrorKind::UnexpectedToken { .. } => "unexpected token",
            EvalErrorKind::UnexpectedEnd(_) => "program ends here",
            EvalErrorKind::LiteralOutOfRange { .. } => "literal out of range",
            EvalErrorKind::DivisionByZero => "this divisor is zero",
            EvalErrorKind::Overflow { .. } => "result is not representable",
            EvalErrorKind::UnsignedNegation(_) => "unsigned fractions cannot be negative",
            EvalErrorKind::NestedTooDeeply(_) => "nesting limit reached here",
        }
    }
}

/// An [EvalErrorKind] at a location in the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    fn new(kind: EvalErrorKind, span: impl Into<Span>) -> Self {
        Self {
            kind,
            span: span.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Int,
    Plus,
    Minus,
    Star,
    Slash,
    OpenParen,
    CloseParen,
    Eof,
}

#[derive(Debug, Clone, Copy)]
struct Token {
    kind: TokenKind,
    span: Span,
}

fn scan(program: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::with_capacity(program.len() / 2 + 1);
    let mut chars = program.char_indices().peekable();
    while let Some((lo, ch)) = chars.next() {
        let kind = match ch {
            _ if ch.is_whitespace() => continue,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '0'..='9' => {
                let mut hi = lo + 1;
                while let Some(&(i, '0'..='9')) = chars.peek() {
                    hi = i + 1;
                    chars.next();
                }
                tokens.push(Token {
                    kind: TokenKind::Int,
                    span: (lo..hi).into(),
                });
                continue;
            }
            _ => {
                return Err(EvalError::new(
                    EvalErrorKind::UnexpectedChar(ch),
                    lo..lo + ch.len_utf8(),
                ))
            }
        };
        tokens.push(Token {
            kind,
            span: (lo..lo + 1).into(),
        });
    }
    tokens.push(Token {
        kind: TokenKind::Eof,
        span: (program.len()..program.len() + 1).into(),
    });
    Ok(tokens)
}

#[derive(Debug, Clone, Copy)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn name(self) -> &'static str {
        match self {
            BinOp::Add => "addition",
            BinOp::Sub => "subtraction",
            BinOp::Mul => "multiplication",
            BinOp::Div => "division",
        }
    }
}

/// A value and the part of the program it was evaluated from.
#[derive(Debug, Clone, Copy)]
struct Spanned<N> {
    value: Fraction<N>,
    span: Span,
}

/// Deepest chain of parentheses and prefix minuses the evaluator descends into.
pub const MAX_NESTING: usize = 256;

/// A recursive-descent evaluator over the scanned tokens of a program.
struct Evaluator<'a, N> {
    program: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    base: PhantomData<N>,
}

/// Evaluates `program` to a fraction over `N`.
pub fn evaluate<N: FractionBase>(program: &str) -> Result<Fraction<N>, EvalError> {
    debug!(base = base_name::<N>(), program, "evaluating program");
    let tokens = scan(program)?;
    let mut evaluator = Evaluator {
        program,
        tokens,
        pos: 0,
        depth: 0,
        base: PhantomData,
    };
    let result = evaluator.expr()?;
    let trailing = evaluator.peek();
    if trailing.kind != TokenKind::Eof {
        return Err(evaluator.unexpected(trailing, "an operator or end of input"));
    }
    debug!(result = %result.value, "evaluated program");
    Ok(result.value)
}

/// The name of the base type, like `i64`.
pub fn base_name<N: FractionBase>() -> &'static str {
    std::any::type_name::<N>()
}

impl<'a, N: FractionBase> Evaluator<'a, N> {
    fn peek(&self) -> Token {
        self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn text(&self, token: Token) -> &'a str {
        let program: &'a str = self.program;
        &program[token.span.lo..token.span.hi]
    }

    fn unexpected(&self, token: Token, expected: &'static str) -> EvalError {
        let kind = match token.kind {
            TokenKind::Eof => EvalErrorKind::UnexpectedEnd(expected),
            _ => EvalErrorKind::UnexpectedToken {
                expected,
                found: self.text(token).to_owned(),
            },
        };
        EvalError::new(kind, token.span)
    }

    fn expr(&mut self) -> Result<Spanned<N>, EvalError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => return Ok(lhs),
            };
            self.bump();
            let rhs = self.term()?;
            lhs = self.binary(op, lhs, rhs)?;
        }
    }

    fn term(&mut self) -> Result<Spanned<N>, EvalError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => return Ok(lhs),
            };
            self.bump();
            let rhs = self.unary()?;
            lhs = self.binary(op, lhs, rhs)?;
        }
    }

    /// Every recursive path passes through here, so this is where nesting is bounded.
    fn unary(&mut self) -> Result<Spanned<N>, EvalError> {
        if self.depth == MAX_NESTING {
            return Err(EvalError::new(
                EvalErrorKind::NestedTooDeeply(MAX_NESTING),
                self.peek().span,
            ));
        }
        self.depth += 1;
        let operand = self.prefixed();
        self.depth -= 1;
        operand
    }

    fn prefixed(&mut self) -> Result<Spanned<N>, EvalError> {
        if self.peek().kind != TokenKind::Minus {
            return self.atom();
        }
        let minus = self.bump();
        let operand = self.unary()?;
        let span = minus.span.to(operand.span);
        match operand.value.checked_neg() {
            Some(value) => Ok(Spanned { value, span }),
            None if N::SIGNED => Err(EvalError::new(
                EvalErrorKind::Overflow {
                    op: "negation",
                    base: base_name::<N>(),
                },
                span,
            )),
            None => Err(EvalError::new(
                EvalErrorKind::UnsignedNegation(base_name::<N>()),
                span,
            )),
        }
    }

    fn atom(&mut self) -> Result<Spanned<N>, EvalError> {
        let token = self.peek();
        match token.kind {
            TokenKind::Int => {
                self.bump();
                let literal = self.text(token);
                match N::from_str_radix(literal, 10) {
                    Ok(n) => Ok(Spanned {
                        value: Fraction::from(n),
                        span: token.span,
                    }),
                    Err(_) => Err(EvalError::new(
                        EvalErrorKind::LiteralOutOfRange {
                            literal: literal.to_owned(),
                            base: base_name::<N>(),
                        },
                        token.span,
                    )),
                }
            }
            TokenKind::OpenParen => {
                self.bump();
                let inner = self.expr()?;
                let close = self.peek();
                if close.kind != TokenKind::CloseParen {
                    return Err(self.unexpected(close, "`)`"));
                }
                self.bump();
                Ok(Spanned {
                    value: inner.value,
                    span: token.span.to(close.span),
                })
            }
            _ => Err(self.unexpected(token, "an integer or `(`")),
        }
    }

    fn binary(
        &self,
        op: BinOp,
        lhs: Spanned<N>,
        rhs: Spanned<N>,
    ) -> Result<Spanned<N>, EvalError> {
        trace!(op = op.name(), lhs = %lhs.value, rhs = %rhs.value, "applying operator");
        let (lhs_value, rhs_value) = (&lhs.value, &rhs.value);
        let value = match op {
            BinOp::Add => lhs_value.checked_add(rhs_value),
            BinOp::Sub => lhs_value.checked_sub(rhs_value),
            BinOp::Mul => lhs_value.checked_mul(rhs_value),
            BinOp::Div => {
                if rhs_value.is_zero() {
                    return Err(EvalError::new(EvalErrorKind::DivisionByZero, rhs.span));
                }
                lhs_value.checked_div(rhs_value)
            }
        };
        let span = lhs.span.to(rhs.span);
        match value {
            Some(value) => Ok(Spanned { value, span }),
            None => Err(EvalError::new(
                EvalErrorKind::Overflow {
                    op: op.name(),
                    base: base_name::<N>(),
                },
                span,
            )),
        }
    }
}
