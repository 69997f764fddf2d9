//! Fee tiers - the canonical band type every settings payload maps into

use kayicom_core::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Upper bound the admin screens use to mean "no upper limit".
pub const UNBOUNDED: Decimal = Decimal::from_parts(999_999, 0, 0, false, 0);

fn default_unbounded() -> Decimal {
    UNBOUNDED
}

/// A single fee or commission band.
///
/// Both bounds are inclusive. `value` is either a fixed amount in the
/// transaction currency or a percentage, depending on `is_percentage`.
///
/// # Example
/// ```
/// use kayicom_core::Amount;
/// use kayicom_fees::FeeTier;
/// use rust_decimal::Decimal;
///
/// let fee = Amount::new(Decimal::new(25, 1)).unwrap();
/// let tier = FeeTier::fixed(Decimal::new(5, 0), Decimal::new(19, 0), fee);
/// assert!(tier.contains(Decimal::new(5, 0)));
/// assert!(tier.contains(Decimal::new(19, 0)));
/// assert!(!tier.contains(Decimal::new(499, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTier {
    pub min_amount: Decimal,
    #[serde(default = "default_unbounded")]
    pub max_amount: Decimal,
    /// Fixed amount or percentage. Some payloads call this `commission`.
    #[serde(alias = "commission")]
    pub value: Amount,
    #[serde(default)]
    pub is_percentage: bool,
}

impl FeeTier {
    /// A band charging a flat `value`
    pub fn fixed(min_amount: Decimal, max_amount: Decimal, value: Amount) -> Self {
        Self {
            min_amount,
            max_amount,
            value,
            is_percentage: false,
        }
    }

    /// A band charging `percent`% of the principal
    pub fn percentage(min_amount: Decimal, max_amount: Decimal, percent: Amount) -> Self {
        Self {
            min_amount,
            max_amount,
            value: percent,
            is_percentage: true,
        }
    }

    /// Inclusive range check
    #[inline]
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min_amount && amount <= self.max_amount
    }

    /// True when the band has the "no upper limit" sentinel (or anything above it)
    pub fn is_unbounded(&self) -> bool {
        self.max_amount >= UNBOUNDED
    }
}

/// A withdrawal fee band, scoped to one payout method (`zelle`, `moncash`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodFeeTier {
    pub method: String,
    #[serde(flatten)]
    pub tier: FeeTier,
}

impl MethodFeeTier {
    pub fn new(method: impl Into<String>, tier: FeeTier) -> Self {
        Self {
            method: method.into(),
            tier,
        }
    }
}

/// Per-method withdrawal bounds (inclusive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalLimit {
    pub method: String,
    #[serde(default)]
    pub min_amount: Decimal,
    #[serde(default = "default_unbounded")]
    pub max_amount: Decimal,
}

impl WithdrawalLimit {
    #[inline]
    pub fn allows(&self, amount: Decimal) -> bool {
        amount >= self.min_amount && amount <= self.max_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn amt(v: Decimal) -> Amount {
        Amount::new(v).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let tier = FeeTier::fixed(dec!(5), dec!(19), amt(dec!(2.5)));
        assert!(tier.contains(dec!(5)));
        assert!(tier.contains(dec!(19)));
        assert!(!tier.contains(dec!(4.99)));
        assert!(!tier.contains(dec!(19.01)));
    }

    #[test]
    fn test_unbounded_sentinel() {
        assert_eq!(UNBOUNDED, dec!(999999));
        let open_ended = FeeTier::percentage(dec!(1500), dec!(999999), amt(dec!(5)));
        assert!(open_ended.is_unbounded());
        let capped = FeeTier::fixed(dec!(0), dec!(1000), amt(dec!(1)));
        assert!(!capped.is_unbounded());
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{ "min_amount": 20, "value": 1 }"#;
        let tier: FeeTier = serde_json::from_str(json).unwrap();
        assert_eq!(tier.max_amount, UNBOUNDED);
        assert!(!tier.is_percentage);
        assert_eq!(tier.value.value(), dec!(1));
    }

    #[test]
    fn test_deserialize_commission_alias() {
        let json = r#"{ "min_amount": 5, "max_amount": 19.99, "commission": 2, "is_percentage": false }"#;
        let tier: FeeTier = serde_json::from_str(json).unwrap();
        assert_eq!(tier, FeeTier::fixed(dec!(5), dec!(19.99), amt(dec!(2))));
    }

    #[test]
    fn test_negative_value_rejected() {
        let json = r#"{ "min_amount": 0, "max_amount": 10, "value": -1 }"#;
        assert!(serde_json::from_str::<FeeTier>(json).is_err());
    }

    #[test]
    fn test_method_tier_flattened() {
        let json = r#"{ "method": "moncash", "min_amount": 0, "max_amount": 100, "value": 2, "is_percentage": true }"#;
        let tier: MethodFeeTier = serde_json::from_str(json).unwrap();
        assert_eq!(tier.method, "moncash");
        assert!(tier.tier.is_percentage);
    }

    #[test]
    fn test_withdrawal_limit_allows() {
        let limit = WithdrawalLimit {
            method: "zelle".to_string(),
            min_amount: dec!(10),
            max_amount: dec!(500),
        };
        assert!(limit.allows(dec!(10)));
        assert!(limit.allows(dec!(500)));
        assert!(!limit.allows(dec!(9.99)));
        assert!(!limit.allows(dec!(500.01)));
    }
}
