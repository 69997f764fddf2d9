//! KAYICOM Exchange Rates
//!
//! HTG/USD conversion with independently published scalars, the agent
//! deposit HTG cross-check, and the [`RateSource`] seam for where the
//! current pair comes from.

mod converter;
mod error;
mod source;
mod types;

pub use converter::{
    htg_to_usd, usd_to_htg, verify_agent_deposit, DepositVerification, RateConverter,
};
pub use error::{RateError, RateResult};
pub use source::{FixedRateSource, RateSource};
pub use types::ExchangeRates;
