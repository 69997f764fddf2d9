//! Currency - The two wallet currencies
//!
//! KAYICOM balances are held in Haitian gourdes and US dollars only.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Wallet currency
///
/// # Examples
/// ```
/// use kayicom_core::Currency;
///
/// let htg: Currency = "htg".parse().unwrap();
/// assert_eq!(htg, Currency::Htg);
/// assert_eq!(Currency::Usd.to_string(), "USD");
/// assert!("EUR".parse::<Currency>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Haitian gourde
    Htg,
    /// US dollar
    Usd,
}

impl Currency {
    /// The other wallet currency
    pub fn counterpart(&self) -> Currency {
        match self {
            Currency::Htg => Currency::Usd,
            Currency::Usd => Currency::Htg,
        }
    }
}
