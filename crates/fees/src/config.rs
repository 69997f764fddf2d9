//! Fee engine configuration
//!
//! The defaults are the values the wallet screens hardcode when the backend
//! does not supply one. All of them can be overridden from a JSON file.

use kayicom_core::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FeeResult;
use crate::fallback::FallbackPolicy;

/// Configuration for the fee engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Smallest agent deposit (USD) that earns a commission
    #[serde(default = "default_agent_min_deposit_usd")]
    pub agent_min_deposit_usd: Amount,

    /// Percentage paid on agent deposits no commission tier covers
    #[serde(default = "default_commission_fallback_percent")]
    pub commission_fallback_percent: Decimal,

    /// Card order fee (HTG) when the app config omits it
    #[serde(default = "default_card_order_fee_htg")]
    pub card_order_fee_htg: Amount,

    /// Smallest step between adjacent tiers that is not reported as a gap
    #[serde(default = "default_amount_step")]
    pub amount_step: Decimal,

    /// Decimal places used when displaying computed amounts
    #[serde(default = "default_display_dp")]
    pub display_dp: u32,
}

fn default_agent_min_deposit_usd() -> Amount {
    Amount::new_unchecked(Decimal::new(5, 0))
}

fn default_commission_fallback_percent() -> Decimal {
    Decimal::ONE
}

fn default_card_order_fee_htg() -> Amount {
    Amount::new_unchecked(Decimal::new(500, 0))
}

fn default_amount_step() -> Decimal {
    Decimal::new(1, 2) // one cent
}

fn default_display_dp() -> u32 {
    2
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            agent_min_deposit_usd: default_agent_min_deposit_usd(),
            commission_fallback_percent: default_commission_fallback_percent(),
            card_order_fee_htg: default_card_order_fee_htg(),
            amount_step: default_amount_step(),
            display_dp: default_display_dp(),
        }
    }
}

impl FeeConfig {
    /// Load configuration from JSON file
    pub fn from_file(path: &std::path::Path) -> FeeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Fallback used for agent commission
    pub fn commission_fallback(&self) -> FallbackPolicy {
        FallbackPolicy::FlatPercentage(self.commission_fallback_percent)
    }
}
