//! CLI commands
//!
//! Each command reads what it needs from the [`AppContext`], runs the fee
//! engine, and returns a report; printing is left to the binary.

use kayicom_core::{input::parse_lenient, Amount, Currency};
use kayicom_fees::{
    card_topup_fee, diagnose, minutes_topup_fee, quote_withdrawal, FeeSchedule, FeeTier,
    TierIssue, WithdrawalQuote,
};
use kayicom_rates::{usd_to_htg, verify_agent_deposit, DepositVerification};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::context::AppContext;

/// Parse a user-entered amount.
///
/// `lenient` reproduces the wallet form behavior (garbage becomes 0);
/// otherwise anything that is not a non-negative number is rejected.
pub fn parse_amount(raw: &str, lenient: bool) -> Result<Amount, anyhow::Error> {
    if lenient {
        Ok(parse_lenient(raw))
    } else {
        Ok(raw.parse::<Amount>()?)
    }
}

/// Agent commission on a USD deposit
#[derive(Debug, Clone, Serialize)]
pub struct CommissionReport {
    pub amount_usd: Amount,
    pub commission: Amount,
    /// Band that produced the commission; None for short-circuits and fallback
    pub matched_tier: Option<FeeTier>,
    pub rate_used: Decimal,
    pub expected_htg: Amount,
}

pub async fn commission(
    ctx: &AppContext,
    amount_usd: Amount,
) -> Result<CommissionReport, anyhow::Error> {
    let Some(agent) = ctx.settings.agent.as_ref() else {
        anyhow::bail!("Agent settings not configured");
    };
    if !agent.enabled {
        anyhow::bail!("Agent deposits are disabled");
    }

    let (commission, matched_tier) = FeeSchedule::agent_commission(&ctx.config)
        .compute_detailed(amount_usd, ctx.settings.commission_tiers())?;
    let matched_tier = matched_tier.cloned();

    let expected_htg = usd_to_htg(amount_usd, agent.rate_usd_to_htg)?;

    Ok(CommissionReport {
        amount_usd,
        commission,
        matched_tier,
        rate_used: agent.rate_usd_to_htg,
        expected_htg,
    })
}

/// Fee on a top-up (card or minutes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopupReport {
    pub amount: Amount,
    pub fee: Amount,
    /// `amount + fee`, what the wallet is debited
    pub total: Amount,
}

fn topup_report(amount: Amount, fee: Amount) -> Result<TopupReport, anyhow::Error> {
    let total = amount
        .checked_add(&fee)
        .ok_or_else(|| anyhow::anyhow!("Top-up total overflows"))?;
    Ok(TopupReport { amount, fee, total })
}

pub async fn card_fee(ctx: &AppContext, amount: Amount) -> Result<TopupReport, anyhow::Error> {
    let fee = card_topup_fee(amount, &ctx.settings.withdrawals.card_fees)?;
    topup_report(amount, fee)
}

pub async fn minutes_fee(ctx: &AppContext, amount: Amount) -> Result<TopupReport, anyhow::Error> {
    let fee = minutes_topup_fee(amount, &ctx.settings.app_config.minutes_fees)?;
    topup_report(amount, fee)
}

/// Card order fee in HTG
pub async fn card_order_fee(ctx: &AppContext) -> Amount {
    ctx.settings.app_config.card_order_fee(&ctx.config)
}

pub async fn withdraw(
    ctx: &AppContext,
    amount: Amount,
    method: &str,
) -> Result<WithdrawalQuote, anyhow::Error> {
    let fees = ctx.settings.withdrawals.method_tiers();
    let quote = quote_withdrawal(amount, method, &fees, &ctx.settings.withdrawals.limits)?;
    Ok(quote)
}

/// Result of a currency conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub amount: Amount,
    pub from: Currency,
    pub to: Currency,
    pub converted: Amount,
}

pub async fn convert(
    ctx: &AppContext,
    amount: Amount,
    from: Currency,
    to: Currency,
) -> Result<ConversionReport, anyhow::Error> {
    let converter = ctx.converter().await?;
    let converted = converter.convert(amount, from, to)?;
    Ok(ConversionReport {
        amount,
        from,
        to,
        converted,
    })
}

/// Check the HTG an agent collected. `rate` defaults to the agent settings rate.
pub async fn verify_deposit(
    ctx: &AppContext,
    amount_usd: Amount,
    received_htg: Amount,
    rate: Option<Decimal>,
) -> Result<DepositVerification, anyhow::Error> {
    let rate = match rate {
        Some(rate) => rate,
        None => match ctx.settings.agent.as_ref() {
            Some(agent) => agent.rate_usd_to_htg,
            None => anyhow::bail!("No rate given and agent settings not configured"),
        },
    };
    Ok(verify_agent_deposit(amount_usd, received_htg, rate)?)
}

/// Diagnostics for one configured tier list
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    pub list: String,
    pub tiers: usize,
    pub issues: Vec<TierIssue>,
}

/// Check every configured tier list for overlaps and gaps
pub async fn lint(ctx: &AppContext) -> Vec<LintReport> {
    let step = ctx.config.amount_step;
    let mut lists: Vec<(String, Vec<FeeTier>)> = Vec::new();

    if let Some(agent) = ctx.settings.agent.as_ref() {
        lists.push(("commission".to_string(), agent.commission_tiers.clone()));
    }
    lists.push((
        "card".to_string(),
        ctx.settings.withdrawals.card_fees.clone(),
    ));
    lists.push((
        "minutes".to_string(),
        ctx.settings.app_config.minutes_fees.clone(),
    ));

    let fees = ctx.settings.withdrawals.method_tiers();
    for method in ctx.settings.withdrawals.methods() {
        let tiers = kayicom_fees::policy::tiers_for_method(method, &fees);
        lists.push((format!("withdrawal:{method}"), tiers));
    }

    lists
        .into_iter()
        .map(|(list, tiers)| {
            let issues = diagnose(&tiers, step);
            if !issues.is_empty() {
                tracing::warn!(list = %list, count = issues.len(), "Tier list has issues");
            }
            LintReport {
                list,
                tiers: tiers.len(),
                issues,
            }
        })
        .collect()
}
