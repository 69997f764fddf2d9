//! KAYICOM Core - Domain types
//!
//! This crate contains the fundamental types used across KAYICOM:
//! - `Amount`: Non-negative decimal wrapper for wallet amounts
//! - `Currency`: HTG / USD
//! - `input`: permissive form-field coercion, kept out of the fee math

pub mod amount;
pub mod currency;
pub mod input;

pub use amount::{Amount, AmountError};
pub use currency::Currency;
