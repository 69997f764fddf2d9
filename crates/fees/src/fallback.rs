//! Fallback policy - what a call site charges when no tier matches

use kayicom_core::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FeeError, FeeResult};

/// Behavior when an amount falls outside every configured tier.
///
/// Call sites do not agree on this: agent commission falls back to a flat
/// 1% while card and minutes top-ups charge nothing. Each call site picks
/// its policy explicitly (see [`crate::policy::FeeSchedule`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// No fee / no commission
    #[default]
    Zero,
    /// `amount * percent / 100`
    FlatPercentage(Decimal),
}

impl FallbackPolicy {
    pub fn apply(&self, amount: Amount) -> FeeResult<Amount> {
        match *self {
            FallbackPolicy::Zero => Ok(Amount::ZERO),
            FallbackPolicy::FlatPercentage(percent) if percent < Decimal::ZERO => {
                Err(FeeError::NegativePercentage(percent))
            }
            FallbackPolicy::FlatPercentage(percent) => amount
                .percent(percent)
                .ok_or(FeeError::Overflow { amount, percent }),
        }
    }
}
