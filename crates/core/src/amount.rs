//! Amount - Non-negative decimal wrapper for wallet amounts
//!
//! Every principal, fee and commission handled by KAYICOM is non-negative.
//! This is enforced at the type level; signed values (e.g. a deposit
//! discrepancy) stay plain `Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when working with amounts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Amount is not a number: {0:?}")]
    NotANumber(String),
}

/// A non-negative decimal amount.
///
/// # Invariant
/// The inner value is always >= 0. This is enforced by the constructor.
///
/// # Example
/// ```
/// use kayicom_core::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = Amount::new(Decimal::new(50, 0)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(50, 0));
///
/// // Negative amounts are rejected
/// assert!(Amount::new(Decimal::new(-1, 0)).is_err());
///
/// // So is text that is not a number
/// assert!("abc".parse::<Amount>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Amount from a Decimal.
    ///
    /// Returns an error if the value is negative.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            Err(AmountError::NegativeAmount(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create an Amount without validation.
    ///
    /// The caller MUST ensure the value is non-negative. Used for products
    /// of already-validated amounts and non-negative rates.
    #[inline]
    pub const fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the inner Decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(&self, other: &Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Subtraction - returns None if result would be negative
    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        let result = self.0.checked_sub(other.0)?;
        if result < Decimal::ZERO {
            None
        } else {
            Some(Amount(result))
        }
    }

    /// `self * percent / 100`.
    ///
    /// Returns None on overflow or when `percent` is negative.
    pub fn percent(&self, percent: Decimal) -> Option<Amount> {
        if percent < Decimal::ZERO {
            return None;
        }
        let product = self.0.checked_mul(percent)?;
        product.checked_div(Decimal::ONE_HUNDRED).map(Amount)
    }

    /// Round to `dp` decimal places (banker's rounding).
    pub fn round_dp(&self, dp: u32) -> Amount {
        Amount(self.0.round_dp(dp))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_positive() {
        let amount = Amount::new(dec!(100)).unwrap();
        assert_eq!(amount.value(), dec!(100));
    }

    #[test]
    fn test_amount_zero() {
        let amount = Amount::new(Decimal::ZERO).unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn test_amount_negative_rejected() {
        let result = Amount::new(dec!(-0.01));
        assert!(matches!(result, Err(AmountError::NegativeAmount(_))));
    }

    #[test]
    fn test_checked_sub_prevents_negative() {
        let a = Amount::new(dec!(3)).unwrap();
        let b = Amount::new(dec!(5)).unwrap();
        assert!(a.checked_sub(&b).is_none());
    }

    #[test]
    fn test_checked_sub_success() {
        let a = Amount::new(dec!(100)).unwrap();
        let b = Amount::new(dec!(3)).unwrap();
        assert_eq!(a.checked_sub(&b).unwrap().value(), dec!(97));
    }

    #[test]
    fn test_percent() {
        let a = Amount::new(dec!(2000)).unwrap();
        assert_eq!(a.percent(dec!(5)).unwrap().value(), dec!(100));
        assert_eq!(a.percent(dec!(0)).unwrap(), Amount::ZERO);
        assert!(a.percent(dec!(-1)).is_none());
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!("12.50".parse::<Amount>().unwrap().value(), dec!(12.50));
        assert_eq!(" 7 ".parse::<Amount>().unwrap().value(), dec!(7));
        assert!(matches!(
            "12,5".parse::<Amount>(),
            Err(AmountError::NotANumber(_))
        ));
        assert!(matches!(
            "".parse::<Amount>(),
            Err(AmountError::NotANumber(_))
        ));
        assert!(matches!(
            "-4".parse::<Amount>(),
            Err(AmountError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let ok: Amount = serde_json::from_str("\"123.45\"").unwrap();
        assert_eq!(ok.value(), dec!(123.45));

        let bad: Result<Amount, _> = serde_json::from_str("\"-1\"");
        assert!(bad.is_err());
    }
}
