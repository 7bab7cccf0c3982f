use std::fmt;
use std::ops::Neg;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Money parse error: {0}: {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point monetary value with four decimal places per unit.
///
/// Negative values are legal, a current account balance may drop below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);
    pub const ZERO: Self = Self(0);

    const SCALE: i64 = 10_000;

    /// Builds a value from a whole number of units.
    pub const fn from_units(units: i64) -> Self {
        return Self(units.saturating_mul(Self::SCALE));
    }

    pub fn parse(text: &str) -> Result<Self, MoneyError> {
        let trimmed = text.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = unsigned.split('.');

        let units_part = parts.next().unwrap_or("");
        let frac_part = parts.next().unwrap_or("0");

        if parts.next().is_some() {
            return Err(MoneyError::Parse("too many decimal points", text.to_string()));
        }

        let units: i64 = if units_part.is_empty() {
            0
        } else {
            units_part
                .parse()
                .map_err(|_| MoneyError::Parse("invalid unit digits", text.to_string()))?
        };

        if !frac_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyError::Parse("invalid fraction digits", text.to_string()));
        }

        // Pad to four fractional digits, extra precision is truncated
        let frac_padded = format!("{:0<4}", frac_part);
        let frac: i64 = frac_padded[..4]
            .parse()
            .map_err(|_| MoneyError::Parse("invalid fraction digits", text.to_string()))?;

        let magnitude = units
            .checked_mul(Self::SCALE)
            .and_then(|scaled| scaled.checked_add(frac))
            .ok_or_else(|| MoneyError::Parse("amount out of range", text.to_string()))?;

        if negative {
            return Ok(Self(-magnitude));
        }

        return Ok(Self(magnitude));
    }

    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        return self
            .0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow("add", self, other));
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, MoneyError> {
        return self
            .0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow("sub", self, other));
    }

    pub fn saturating_add(self, other: Self) -> Self {
        return Self(self.0.saturating_add(other.0));
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        return Self(self.0.saturating_sub(other.0));
    }

    /// Scales the value by a fractional rate, rounding to the nearest minor unit.
    pub fn scaled_by(self, rate: f64) -> Self {
        return Self((self.0 as f64 * rate).round() as i64);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        return Self(-self.0);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();

        let units = magnitude / Self::SCALE as u64;
        let frac = magnitude % Self::SCALE as u64;

        if frac == 0 {
            return write!(f, "{sign}{units}");
        }

        let frac = format!("{frac:04}");
        let frac = frac.trim_end_matches('0');

        return write!(f, "{sign}{units}.{frac}");
    }
}
