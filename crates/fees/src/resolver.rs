//! Tier Resolver
//!
//! Maps a principal amount to a fee or commission through an ordered list of
//! [`FeeTier`]s. The list is scanned in order and the first band containing
//! the amount wins; lists are never sorted or validated here (see
//! [`crate::diagnostics`] for an offline check).

use kayicom_core::Amount;

use crate::error::{FeeError, FeeResult};
use crate::fallback::FallbackPolicy;
use crate::tier::FeeTier;

/// First tier (in list order) whose inclusive range contains `amount`.
pub fn resolve_tier(amount: Amount, tiers: &[FeeTier]) -> Option<&FeeTier> {
    tiers.iter().find(|tier| tier.contains(amount.value()))
}

/// Value of a single tier applied to `amount`.
///
/// Percentage tiers yield `amount * value / 100`; fixed tiers yield `value`.
pub fn apply_tier(amount: Amount, tier: &FeeTier) -> FeeResult<Amount> {
    if !tier.is_percentage {
        return Ok(tier.value);
    }
    amount
        .percent(tier.value.value())
        .ok_or(FeeError::Overflow {
            amount,
            percent: tier.value.value(),
        })
}

/// Resolve `amount` against `tiers`.
///
/// Returns `Ok(None)` when no tier matches (including an empty list); the
/// caller decides what that means through its [`FallbackPolicy`].
pub fn resolve(amount: Amount, tiers: &[FeeTier]) -> FeeResult<Option<Amount>> {
    match resolve_tier(amount, tiers) {
        Some(tier) => apply_tier(amount, tier).map(Some),
        None => Ok(None),
    }
}

/// Resolve `amount`, applying `fallback` when no tier matches.
pub fn resolve_with(
    amount: Amount,
    tiers: &[FeeTier],
    fallback: FallbackPolicy,
) -> FeeResult<Amount> {
    match resolve(amount, tiers)? {
        Some(value) => Ok(value),
        None => fallback.apply(amount),
    }
}
