//! Call-site fee policies
//!
//! Every place the wallet charges a fee or pays a commission is a
//! [`FeeSchedule`]: the short-circuit checks it runs before scanning tiers
//! and the [`FallbackPolicy`] it applies when nothing matches.
//!
//! | Call site         | Short-circuit to 0            | No tier matches |
//! |-------------------|-------------------------------|-----------------|
//! | Agent commission  | amount < minimum, empty tiers | flat 1%         |
//! | Card top-up       | amount = 0, empty tiers       | 0               |
//! | Minutes top-up    | amount = 0, empty tiers       | 0               |
//! | Withdrawal fee    | empty tiers for the method    | 0               |

use kayicom_core::Amount;
use serde::Serialize;
use strum_macros::{Display, EnumString};
use tracing::debug;

use crate::config::FeeConfig;
use crate::error::{FeeError, FeeResult};
use crate::fallback::FallbackPolicy;
use crate::resolver::{apply_tier, resolve_tier};
use crate::tier::{FeeTier, MethodFeeTier, WithdrawalLimit};

/// Where a fee is being computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CallSite {
    AgentCommission,
    CardTopup,
    MinutesTopup,
    WithdrawalFee,
}

/// Pre-checks and fallback for one call site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    pub call_site: CallSite,
    /// Amounts strictly below this resolve to zero without a tier scan.
    pub minimum_amount: Option<Amount>,
    /// A zero amount resolves to zero without a tier scan.
    pub zero_amount_is_free: bool,
    pub fallback: FallbackPolicy,
}

impl FeeSchedule {
    /// Agent commission on USD deposits
    pub fn agent_commission(config: &FeeConfig) -> Self {
        Self {
            call_site: CallSite::AgentCommission,
            minimum_amount: Some(config.agent_min_deposit_usd),
            zero_amount_is_free: false,
            fallback: config.commission_fallback(),
        }
    }

    /// Virtual card top-up fee
    pub fn card_topup() -> Self {
        Self {
            call_site: CallSite::CardTopup,
            minimum_amount: None,
            zero_amount_is_free: true,
            fallback: FallbackPolicy::Zero,
        }
    }

    /// International minutes top-up fee
    pub fn minutes_topup() -> Self {
        Self {
            call_site: CallSite::MinutesTopup,
            minimum_amount: None,
            zero_amount_is_free: true,
            fallback: FallbackPolicy::Zero,
        }
    }

    /// Withdrawal fee, after filtering tiers by method
    pub fn withdrawal() -> Self {
        Self {
            call_site: CallSite::WithdrawalFee,
            minimum_amount: None,
            zero_amount_is_free: false,
            fallback: FallbackPolicy::Zero,
        }
    }

    /// Compute the fee (or commission) for `amount`.
    pub fn compute(&self, amount: Amount, tiers: &[FeeTier]) -> FeeResult<Amount> {
        self.compute_detailed(amount, tiers).map(|(value, _)| value)
    }

    /// Like [`FeeSchedule::compute`], also returning the tier that produced
    /// the value. The tier is `None` for short-circuits and fallback.
    pub fn compute_detailed<'a>(
        &self,
        amount: Amount,
        tiers: &'a [FeeTier],
    ) -> FeeResult<(Amount, Option<&'a FeeTier>)> {
        if tiers.is_empty() {
            debug!(call_site = %self.call_site, "No tiers configured");
            return Ok((Amount::ZERO, None));
        }
        if self.zero_amount_is_free && amount.is_zero() {
            return Ok((Amount::ZERO, None));
        }
        if let Some(minimum) = self.minimum_amount {
            if amount < minimum {
                debug!(call_site = %self.call_site, %amount, %minimum, "Below minimum amount");
                return Ok((Amount::ZERO, None));
            }
        }

        match resolve_tier(amount, tiers) {
            Some(tier) => {
                let value = apply_tier(amount, tier)?;
                debug!(call_site = %self.call_site, %amount, %value, "Tier matched");
                Ok((value, Some(tier)))
            }
            None => {
                let value = self.fallback.apply(amount)?;
                debug!(
                    call_site = %self.call_site,
                    %amount,
                    %value,
                    fallback = ?self.fallback,
                    "No tier matched, fallback applied"
                );
                Ok((value, None))
            }
        }
    }
}

/// Commission earned by an agent for a USD deposit.
pub fn agent_commission(
    amount_usd: Amount,
    tiers: &[FeeTier],
    config: &FeeConfig,
) -> FeeResult<Amount> {
    FeeSchedule::agent_commission(config)
        .compute(amount_usd, tiers)
}

/// Fee charged on a virtual card top-up.
pub fn card_topup_fee(amount: Amount, tiers: &[FeeTier]) -> FeeResult<Amount> {
    FeeSchedule::card_topup().compute(amount, tiers)
}

/// Fee charged on an international minutes top-up.
pub fn minutes_topup_fee(amount: Amount, tiers: &[FeeTier]) -> FeeResult<Amount> {
    FeeSchedule::minutes_topup().compute(amount, tiers)
}

/// Tiers configured for exactly `method`, in their configured order.
pub fn tiers_for_method(method: &str, fees: &[MethodFeeTier]) -> Vec<FeeTier> {
    fees.iter()
        .filter(|fee| fee.method == method)
        .map(|fee| fee.tier.clone())
        .collect()
}

/// Fee charged on a withdrawal through `method`.
///
/// Only tiers whose method equals `method` exactly are considered.
pub fn withdrawal_fee(amount: Amount, method: &str, fees: &[MethodFeeTier]) -> FeeResult<Amount> {
    let tiers = tiers_for_method(method, fees);
    FeeSchedule::withdrawal().compute(amount, &tiers)
}

/// Fee and net payout for a withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WithdrawalQuote {
    pub amount: Amount,
    pub fee: Amount,
    /// `amount - fee`
    pub net_amount: Amount,
}

/// Quote a withdrawal, enforcing the method's limits when one is configured.
pub fn quote_withdrawal(
    amount: Amount,
    method: &str,
    fees: &[MethodFeeTier],
    limits: &[WithdrawalLimit],
) -> FeeResult<WithdrawalQuote> {
    if let Some(limit) = limits.iter().find(|limit| limit.method == method) {
        if !limit.allows(amount.value()) {
            return Err(FeeError::OutsideWithdrawalLimit {
                method: method.to_string(),
                amount,
                min: limit.min_amount,
                max: limit.max_amount,
            });
        }
    }

    let fee = withdrawal_fee(amount, method, fees)?;
    let net_amount = amount
        .checked_sub(&fee)
        .ok_or(FeeError::FeeExceedsAmount { fee, amount })?;

    Ok(WithdrawalQuote {
        amount,
        fee,
        net_amount,
    })
}
