//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so repeated redistribution passes
//! never drift. Provides safe arithmetic, proportional scaling, and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Half a currency unit, the tolerance used for "edited" and "balanced" checks
pub const HALF_UNIT: Money = Money::from_cents(50);

/// Largest magnitude accepted from user input, ten trillion units
///
/// Keeps sums of many parsed amounts well inside the i64 range.
pub const MAX_AMOUNT: Money = Money::from_cents(1_000_000_000_000_000);

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_pace::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Clamp negative amounts to zero
    pub fn non_negative(self) -> Self {
        self.max(Self::zero())
    }

    /// `self - other`, floored at zero
    pub fn saturating_remaining(self, other: Self) -> Self {
        (self - other).non_negative()
    }

    /// Scale by `numerator / denominator`, rounding half away from zero
    ///
    /// Returns zero when the denominator is zero. Results beyond the i64 range
    /// saturate.
    pub fn scale(self, numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return Self::zero();
        }
        Self(div_round(
            self.0 as i128 * numerator as i128,
            denominator as i128,
        ))
    }

    /// Ratio of this amount to `whole`, or 0.0 when `whole` is zero
    pub fn ratio_of(self, whole: Self) -> f64 {
        if whole.is_zero() {
            0.0
        } else {
            self.0 as f64 / whole.0 as f64
        }
    }

    /// Percentage of `whole` rounded to the nearest integer, or 0 when `whole` is zero
    ///
    /// Computed on cents so `72.00 / 60.00` is exactly 120.
    pub fn percent_of(self, whole: Self) -> i64 {
        if whole.is_zero() {
            0
        } else {
            self.scale(100, whole.0).0
        }
    }

    /// Convert to a floating point number of units (display only)
    pub fn as_units_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,250.00".
    /// Amounts larger than [`MAX_AMOUNT`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");
        let (whole, frac) = rest.split_once('.').unwrap_or((rest.as_str(), ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        // Digits only: a second sign or stray characters are format errors
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) || frac.len() > 2 {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .filter(|c| *c <= MAX_AMOUNT.0)
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Divide rounding half away from zero, saturating at the i64 bounds
fn div_round(num: i128, den: i128) -> i64 {
    let half = den.abs() / 2;
    let quotient = (num + half * num.signum()) / den;
    i64::try_from(quotient).unwrap_or(if quotient < 0 { i64::MIN } else { i64::MAX })
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
        assert_eq!(Money::from_units(8).cents(), 800);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_cents(-5).format_with_symbol("€"), "-€0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        assert_eq!(b.saturating_remaining(a), Money::zero());
        assert_eq!(Money::from_cents(-3).non_negative(), Money::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("1,250.00").unwrap().cents(), 125000);
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse("$.").is_err());
    }

    #[test]
    fn test_parse_rejects_second_sign() {
        for input in ["--5", "-+5", "+5", "-$-5", "$+5", "5-", "1.-5"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::InvalidFormat(_))),
                "{input} should not parse"
            );
        }
        assert_eq!(Money::parse("-$5").unwrap().cents(), -500);
    }

    #[test]
    fn test_parse_large_amounts_without_overflow() {
        assert_eq!(
            Money::parse("100000000000000000"),
            Err(MoneyParseError::OutOfRange("100000000000000000".into()))
        );
        assert!(matches!(
            Money::parse("-99999999999999999999999.99"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("92233720368547758.07"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert_eq!(Money::parse("10,000,000,000,000").unwrap(), MAX_AMOUNT);
        assert!(Money::parse("10000000000000.01").is_err());
    }

    #[test]
    fn test_scale_rounds_half_away_from_zero() {
        assert_eq!(Money::from_cents(100).scale(1, 3).cents(), 33);
        assert_eq!(Money::from_cents(200).scale(1, 3).cents(), 67);
        assert_eq!(Money::from_cents(5).scale(1, 2).cents(), 3);
        assert_eq!(Money::from_cents(-5).scale(1, 2).cents(), -3);
        assert_eq!(Money::from_cents(100).scale(1, 0), Money::zero());
        assert_eq!(Money::from_cents(i64::MAX).scale(3, 1).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN).scale(3, 1).cents(), i64::MIN);
    }

    #[test]
    fn test_ratio_and_percent() {
        let spend = Money::from_units(72);
        let budget = Money::from_units(60);
        assert_eq!(spend.percent_of(budget), 120);
        assert!((spend.ratio_of(budget) - 1.2).abs() < 1e-9);
        assert_eq!(spend.percent_of(Money::zero()), 0);
        assert_eq!(spend.ratio_of(Money::zero()), 0.0);
        // 99.5% rounds up to what the user sees as 100%
        assert_eq!(Money::from_cents(19900).percent_of(Money::from_units(200)), 100);
        // Large amounts do not overflow when multiplied up to a percentage
        assert_eq!(MAX_AMOUNT.percent_of(Money::from_units(100)), 10_000_000_000_000);
        assert_eq!(Money::from_cents(i64::MAX).percent_of(Money::from_cents(1)), i64::MAX);
        assert_eq!(Money::from_cents(i64::MAX).percent_of(Money::from_cents(i64::MAX)), 100);
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
