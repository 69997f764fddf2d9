//! Backend settings payloads
//!
//! The admin settings endpoints name the same concepts differently:
//! commission tiers use `value`/`is_percentage` (or `commission`), while
//! withdrawal fees use `fee_type`/`fee_value`. These types deserialize each
//! payload as-is and convert into [`FeeTier`] so the resolver only ever sees
//! one shape.

use kayicom_core::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::config::FeeConfig;
use crate::error::FeeResult;
use crate::tier::{FeeTier, MethodFeeTier, WithdrawalLimit, UNBOUNDED};

fn default_unbounded() -> Decimal {
    UNBOUNDED
}

/// `GET /agent/settings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSettings {
    pub rate_usd_to_htg: Decimal,
    #[serde(default)]
    pub commission_tiers: Vec<FeeTier>,
    #[serde(default)]
    pub enabled: bool,
}

/// Withdrawal fee kind as the withdrawals endpoint spells it
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FeeType {
    Fixed,
    Percentage,
}

/// One row of `fees` in `GET /withdrawals/fees`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalFeeEntry {
    pub method: String,
    pub fee_type: FeeType,
    pub fee_value: Amount,
    #[serde(default)]
    pub min_amount: Decimal,
    #[serde(default = "default_unbounded")]
    pub max_amount: Decimal,
}

impl From<WithdrawalFeeEntry> for MethodFeeTier {
    fn from(entry: WithdrawalFeeEntry) -> Self {
        let tier = FeeTier {
            min_amount: entry.min_amount,
            max_amount: entry.max_amount,
            value: entry.fee_value,
            is_percentage: entry.fee_type == FeeType::Percentage,
        };
        MethodFeeTier::new(entry.method, tier)
    }
}

/// `GET /withdrawals/fees`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalFees {
    #[serde(default)]
    pub fees: Vec<WithdrawalFeeEntry>,
    #[serde(default)]
    pub limits: Vec<WithdrawalLimit>,
    #[serde(default)]
    pub card_fees: Vec<FeeTier>,
}

impl WithdrawalFees {
    /// Withdrawal fees in canonical form, order preserved
    pub fn method_tiers(&self) -> Vec<MethodFeeTier> {
        self.fees.iter().cloned().map(MethodFeeTier::from).collect()
    }

    /// Distinct methods in the order they first appear
    pub fn methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = Vec::new();
        for entry in &self.fees {
            if !methods.contains(&entry.method.as_str()) {
                methods.push(entry.method.as_str());
            }
        }
        methods
    }
}

/// The fee-relevant part of `GET /public/app-config`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub card_order_fee_htg: Option<Amount>,
    #[serde(default)]
    pub minutes_fees: Vec<FeeTier>,
    /// Display rate for "≈ $X" hints, supplied separately from `rate_usd_to_htg`
    #[serde(default)]
    pub htg_to_usd: Option<Decimal>,
}

impl AppConfig {
    /// Card order fee, or the configured default when the payload omits it
    pub fn card_order_fee(&self, config: &FeeConfig) -> Amount {
        self.card_order_fee_htg.unwrap_or(config.card_order_fee_htg)
    }
}

/// A saved copy of every settings payload the fee engine reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    #[serde(default)]
    pub agent: Option<AgentSettings>,
    #[serde(default)]
    pub withdrawals: WithdrawalFees,
    #[serde(default)]
    pub app_config: AppConfig,
}

impl SettingsSnapshot {
    /// Load a snapshot from a JSON file
    pub fn from_file(path: &std::path::Path) -> FeeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Commission tiers, empty when agent settings are missing or disabled
    pub fn commission_tiers(&self) -> &[FeeTier] {
        match &self.agent {
            Some(agent) if agent.enabled => &agent.commission_tiers,
            _ => &[],
        }
    }
}
