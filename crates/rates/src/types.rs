//! Core rate types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RateError, RateResult};

/// The HTG/USD rate pair published by the admin settings.
///
/// The two directions are independent scalars: the backend rounds each one
/// separately, so `htg_to_usd` is generally NOT `1 / usd_to_htg`. Never
/// derive one from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRates")]
pub struct ExchangeRates {
    /// HTG per 1 USD
    usd_to_htg: Decimal,
    /// USD per 1 HTG
    htg_to_usd: Decimal,
}

#[derive(Deserialize)]
struct RawRates {
    usd_to_htg: Decimal,
    htg_to_usd: Decimal,
}

impl TryFrom<RawRates> for ExchangeRates {
    type Error = RateError;

    fn try_from(raw: RawRates) -> Result<Self, Self::Error> {
        Self::new(raw.usd_to_htg, raw.htg_to_usd)
    }
}

impl ExchangeRates {
    /// Create a rate pair. Both scalars must be > 0.
    pub fn new(usd_to_htg: Decimal, htg_to_usd: Decimal) -> RateResult<Self> {
        ensure_positive(usd_to_htg)?;
        ensure_positive(htg_to_usd)?;
        Ok(Self {
            usd_to_htg,
            htg_to_usd,
        })
    }

    pub fn usd_to_htg(&self) -> Decimal {
        self.usd_to_htg
    }

    pub fn htg_to_usd(&self) -> Decimal {
        self.htg_to_usd
    }
}

pub(crate) fn ensure_positive(rate: Decimal) -> RateResult<Decimal> {
    if rate <= Decimal::ZERO {
        Err(RateError::NonPositiveRate(rate))
    } else {
        Ok(rate)
    }
}
