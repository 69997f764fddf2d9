//! Rate sources
//!
//! Where the current HTG/USD pair comes from. The wallet reads it from the
//! admin settings; tests and the CLI use [`FixedRateSource`].

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

use crate::error::{RateError, RateResult};
use crate::types::ExchangeRates;

/// Rate source trait - interface for whatever publishes the rate pair
///
/// Implementations decide how fresh the pair is; callers pass the returned
/// value into the converter explicitly.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Get the current rate pair
    async fn current_rates(&self) -> RateResult<ExchangeRates>;

    /// Check if a rate pair has been published
    async fn is_available(&self) -> bool {
        self.current_rates().await.is_ok()
    }
}

/// In-memory rate source, replaced wholesale by an admin action.
pub struct FixedRateSource {
    rates: RwLock<Option<ExchangeRates>>,
}

impl FixedRateSource {
    /// Create a source with no rate published yet
    pub fn new() -> Self {
        Self {
            rates: RwLock::new(None),
        }
    }

    /// Create a source with an initial rate pair
    pub fn with_rates(rates: ExchangeRates) -> Self {
        Self {
            rates: RwLock::new(Some(rates)),
        }
    }

    /// Publish a new rate pair
    pub fn set_rates(&self, rates: ExchangeRates) {
        let mut current = self.rates.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(rates);
        tracing::debug!(
            usd_to_htg = %rates.usd_to_htg(),
            htg_to_usd = %rates.htg_to_usd(),
            "Exchange rates updated"
        );
    }
}

impl Default for FixedRateSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    async fn current_rates(&self) -> RateResult<ExchangeRates> {
        let current = self.rates.read().unwrap_or_else(PoisonError::into_inner);
        (*current).ok_or(RateError::Unavailable)
    }
}
