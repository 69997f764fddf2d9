//! Rate error types

use rust_decimal::Decimal;
use thiserror::Error;

/// Exchange-rate errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RateError {
    /// Rates must be strictly positive
    #[error("Exchange rate must be positive, got {0}")]
    NonPositiveRate(Decimal),

    /// Conversion result does not fit in a Decimal
    #[error("Arithmetic overflow converting {amount} at rate {rate}")]
    Overflow { amount: Decimal, rate: Decimal },

    /// No rate has been published yet
    #[error("No exchange rate available")]
    Unavailable,
}

/// Result type for rate operations
pub type RateResult<T> = Result<T, RateError>;
