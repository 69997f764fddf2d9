//! KAYICOM Fee Engine
//!
//! Tiered fee and commission calculation shared by every wallet flow that
//! charges or pays one: agent deposit commission, withdrawal fees, virtual
//! card top-up fees and international minutes top-up fees.
//!
//! ## Key Components
//!
//! - [`tier::FeeTier`] - Inclusive `[min_amount, max_amount]` band, fixed or percentage
//! - [`resolver`] - First-match tier resolution (`resolve`, `resolve_with`)
//! - [`fallback::FallbackPolicy`] - What to charge when no tier matches
//! - [`policy::FeeSchedule`] - Per-call-site pre-checks + fallback
//! - [`settings`] - Backend payload adapters into the canonical tier type
//! - [`diagnostics`] - Offline overlap/gap checks for tier lists
//! - [`config::FeeConfig`] - Hardcoded wallet defaults, overridable from JSON

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fallback;
pub mod policy;
pub mod resolver;
pub mod settings;
pub mod tier;

pub use config::FeeConfig;
pub use diagnostics::{diagnose, TierIssue};
pub use error::{FeeError, FeeResult};
pub use fallback::FallbackPolicy;
pub use policy::{
    agent_commission, card_topup_fee, minutes_topup_fee, quote_withdrawal, withdrawal_fee,
    CallSite, FeeSchedule, WithdrawalQuote,
};
pub use resolver::{resolve, resolve_tier, resolve_with};
pub use settings::{AgentSettings, AppConfig, FeeType, SettingsSnapshot, WithdrawalFees};
pub use tier::{FeeTier, MethodFeeTier, WithdrawalLimit};
