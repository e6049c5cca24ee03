//! Exact decimal amounts for ledger arithmetic.
//!
//! Uses `rust_decimal` internally so sums and roundings never pick up
//! binary floating-point error. All rounding is half away from zero.

use crate::error::{KakeboError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// An exact decimal amount of money (or a ratio derived from one).
///
/// # Examples
///
/// ```
/// use kakebo::Amount;
///
/// let a: Amount = "1.2".parse().unwrap();
/// let b: Amount = "3.45".parse().unwrap();
/// assert_eq!(a.checked_add(b).unwrap().money(), "4.65");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Decimal places kept by plain (non-rounding) division.
    pub const DIVISION_PRECISION: u32 = 16;

    /// Decimal places of a rendered money value.
    pub const MONEY_SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// One hundred, the base of every percentage.
    pub const HUNDRED: Self = Amount(Decimal::ONE_HUNDRED);

    /// Parses a token written with `.` as the decimal separator.
    pub fn parse(token: &str) -> Result<Self> {
        Self::parse_literal(token, token)
    }

    /// Parses a token that may use `,` as the decimal separator.
    ///
    /// Only the first `,` is turned into `.`; errors still echo the token
    /// as written.
    pub fn parse_localized(token: &str) -> Result<Self> {
        Self::parse_literal(&token.replacen(',', ".", 1), token)
    }

    fn parse_literal(literal: &str, token: &str) -> Result<Self> {
        let parse_error = || KakeboError::Parse {
            token: token.to_string(),
        };

        // rust_decimal skips digit separators; ledgers have none
        if literal.contains('_') {
            return Err(parse_error());
        }

        let value = Decimal::from_str(literal).map_err(|_| parse_error())?;
        Self::checked(value)
    }

    /// Accepts `value` only if it can still be written with two decimals.
    fn checked(value: Decimal) -> Result<Self> {
        let mut as_money = value;
        as_money.rescale(Self::MONEY_SCALE);
        if as_money.scale() != Self::MONEY_SCALE {
            return Err(KakeboError::Overflow);
        }
        Ok(Amount(value))
    }

    /// Returns `true` if this value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns `true` if this value is strictly above zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Amount(self.0.abs())
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let value = self.0.checked_add(rhs.0).ok_or(KakeboError::Overflow)?;
        Self::checked(value)
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let value = self.0.checked_sub(rhs.0).ok_or(KakeboError::Overflow)?;
        Self::checked(value)
    }

    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        let value = self.0.checked_mul(rhs.0).ok_or(KakeboError::Overflow)?;
        Self::checked(value)
    }

    /// Divides, keeping `DIVISION_PRECISION` decimal places.
    pub fn checked_div(self, divisor: Self) -> Result<Self> {
        self.div_round(divisor, Self::DIVISION_PRECISION)
    }

    /// Divides and rounds the quotient to `places` decimal places.
    ///
    /// A zero divisor is reported as `Overflow`.
    pub fn div_round(self, divisor: Self, places: u32) -> Result<Self> {
        let quotient = self.0.checked_div(divisor.0).ok_or(KakeboError::Overflow)?;
        Self::checked(quotient).map(|quotient| quotient.round(places))
    }

    /// Rounds to `places` decimal places, half away from zero.
    pub fn round(self, places: u32) -> Self {
        Amount(
            self.0
                .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Renders with exactly two decimal places, e.g. `6.00` or `-34.50`.
    ///
    /// Every constructor except `From<i64>` rejects values too wide for two
    /// decimals, and an `i64` always has room.
    pub fn money(&self) -> String {
        let mut rounded = self.round(Self::MONEY_SCALE).0;
        if rounded.is_zero() {
            rounded = Decimal::ZERO;
        }
        rounded.rescale(Self::MONEY_SCALE);
        rounded.to_string()
    }

    /// Renders as a whole percentage, e.g. `33%`.
    pub fn percentage(&self) -> String {
        format!("{}%", self.round(0).0.normalize())
    }
}

impl FromStr for Amount {
    type Err = KakeboError;

    fn from_str(s: &str) -> Result<Self> {
        Amount::parse(s)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(Decimal::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
