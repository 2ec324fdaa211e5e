//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::currency::Currency;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// The amount is currency-agnostic; a [`Currency`] is only chosen when the
/// amount is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single transaction may carry, 2^53 - 1 cents
    ///
    /// Every cent up to this bound is exact as an `f64`, and any realistic
    /// number of such amounts sums without leaving `i64`.
    pub const MAX_AMOUNT: Money = Money(9_007_199_254_740_991);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finboard::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    ///
    /// # Examples
    /// ```
    /// use finboard::models::Money;
    /// let amount = Money::from_dollars_cents(10, 50); // $10.50
    /// ```
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Amount in major units as a float, for ratio computations only
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "1,247.50", "10", ".5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let s: String = s.chars().filter(|c| *c != ',').collect();

        if s.is_empty() || s.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let cents = if let Some((whole, frac)) = s.split_once('.') {
            if whole.is_empty() && frac.is_empty() {
                return Err(invalid());
            }
            if frac.contains('.') || !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }

            let dollars: i64 = if whole.is_empty() {
                0
            } else {
                whole.parse().map_err(|_| invalid())?
            };

            // Pad or truncate cents to 2 digits
            let cents: i64 = match frac.len() {
                0 => 0,
                1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                _ => frac[..2].parse().map_err(|_| invalid())?,
            };

            dollars
                .checked_mul(100)
                .and_then(|d| d.checked_add(cents))
                .ok_or_else(invalid)?
        } else {
            s.parse::<i64>()
                .ok()
                .and_then(|d| d.checked_mul(100))
                .ok_or_else(invalid)?
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol, en-US digit grouping and two decimals
    ///
    /// # Examples
    /// ```
    /// use finboard::models::{Currency, Money};
    /// let amount = Money::from_cents(124_750);
    /// assert_eq!(amount.format_currency(Currency::Usd), "$1,247.50");
    /// ```
    pub fn format_currency(&self, currency: Currency) -> String {
        self.format_with_symbol(currency.symbol())
    }

    /// Format with an arbitrary symbol prefix
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let magnitude = self.0.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(magnitude / 100),
            magnitude % 100
        )
    }
}

/// Insert a comma between every group of three digits
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_currency(Currency::Usd))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
