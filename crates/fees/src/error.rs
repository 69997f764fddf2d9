//! Fee engine errors

use kayicom_core::Amount;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from fee and commission calculation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeeError {
    #[error("Arithmetic overflow computing {percent}% of {amount}")]
    Overflow { amount: Amount, percent: Decimal },

    #[error("Percentage cannot be negative: {0}")]
    NegativePercentage(Decimal),

    #[error("Withdrawal of {amount} via {method} is outside the allowed range [{min}, {max}]")]
    OutsideWithdrawalLimit {
        method: String,
        amount: Amount,
        min: Decimal,
        max: Decimal,
    },

    #[error("Fee {fee} exceeds the withdrawal amount {amount}")]
    FeeExceedsAmount { fee: Amount, amount: Amount },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for FeeError {
    fn from(e: std::io::Error) -> Self {
        FeeError::IoError(e.to_string())
    }
}

impl From<serde_json::Error> for FeeError {
    fn from(e: serde_json::Error) -> Self {
        FeeError::ConfigError(e.to_string())
    }
}

/// Result type for fee operations
pub type FeeResult<T> = Result<T, FeeError>;
