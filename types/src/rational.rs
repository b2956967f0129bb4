//! Exact rational numbers for matrix entries.
//!
//! [`Rational`] wraps [`Rational64`] and only exposes checked arithmetic: an
//! operation that would overflow the 64-bit numerator or denominator returns
//! [`RationalError::Overflow`] instead of wrapping or panicking.

use std::fmt;
use std::str::FromStr;

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedMul, Zero};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RationalError {
    #[error("could not parse {0:?} as a number")]
    InvalidFormat(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("number is too large to represent exactly")]
    Overflow,
}

/// An exact fraction, always in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(Rational64);

impl Rational {
    pub const ZERO: Rational = Rational(Rational64::new_raw(0, 1));
    pub const ONE: Rational = Rational(Rational64::new_raw(1, 1));

    /// Build `numerator / denominator`, reduced and sign-normalized.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::DivisionByZero);
        }
        // Normalizing the sign of i64::MIN would overflow.
        if numerator == i64::MIN || denominator == i64::MIN {
            return Err(RationalError::Overflow);
        }
        Ok(Self(Rational64::new(numerator, denominator)))
    }

    #[must_use]
    pub const fn from_integer(value: i64) -> Self {
        Self(Rational64::new_raw(value, 1))
    }

    /// Parse an integer literal (`-3`) or a fraction literal (`-3/4`).
    ///
    /// Surrounding whitespace is ignored; whitespace inside the literal is not.
    pub fn parse(text: &str) -> Result<Self, RationalError> {
        let trimmed = text.trim();
        let invalid = || RationalError::InvalidFormat(trimmed.to_string());

        match trimmed.split_once('/') {
            Some((numer, denom)) => {
                let numer = parse_integer(numer).ok_or_else(invalid)?;
                let denom = parse_unsigned_integer(denom).ok_or_else(invalid)?;
                Self::new(numer, denom)
            }
            None => {
                let value = parse_integer(trimmed).ok_or_else(invalid)?;
                Self::new(value, 1)
            }
        }
    }

    #[must_use]
    pub fn numer(self) -> i64 {
        *self.0.numer()
    }

    #[must_use]
    pub fn denom(self) -> i64 {
        *self.0.denom()
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Result<Self, RationalError> {
        self.0
            .checked_add(&other.0)
            .map(Self)
            .ok_or(RationalError::Overflow)
    }

    pub fn multiply(self, other: Self) -> Result<Self, RationalError> {
        self.0
            .checked_mul(&other.0)
            .map(Self)
            .ok_or(RationalError::Overflow)
    }

    pub fn negate(self) -> Result<Self, RationalError> {
        // Denominators are always positive, so only the numerator can overflow.
        let numer = self.numer().checked_neg().ok_or(RationalError::Overflow)?;
        Ok(Self(Rational64::new_raw(numer, self.denom())))
    }

    pub fn reciprocal(self) -> Result<Self, RationalError> {
        Self::new(self.denom(), self.numer())
    }

    /// Canonical text form: `a` when the denominator is 1, otherwise `a/b`.
    #[must_use]
    pub fn to_display(self) -> String {
        self.to_string()
    }
}

/// Literals must fit in `-i64::MAX..=i64::MAX`, mirroring the range `new` accepts.
fn parse_integer(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok().filter(|value| *value != i64::MIN)
}

fn parse_unsigned_integer(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

/// Parse one whitespace-separated row of rationals.
pub fn parse_row(line: &str) -> Result<Vec<Rational>, RationalError> {
    line.split_whitespace().map(Rational::parse).collect()
}
