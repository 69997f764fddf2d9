//! HTG/USD conversion and agent deposit verification

use kayicom_core::{Amount, Currency};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{RateError, RateResult};
use crate::types::{ensure_positive, ExchangeRates};

fn multiply(amount: Amount, rate: Decimal) -> RateResult<Amount> {
    ensure_positive(rate)?;
    amount
        .value()
        .checked_mul(rate)
        .map(Amount::new_unchecked)
        .ok_or(RateError::Overflow {
            amount: amount.value(),
            rate,
        })
}

/// `usd * rate`
pub fn usd_to_htg(usd: Amount, rate: Decimal) -> RateResult<Amount> {
    multiply(usd, rate)
}

/// `htg * rate_inverse`, where `rate_inverse` is the separately published
/// HTG→USD scalar (not `1 / usd_to_htg`).
pub fn htg_to_usd(htg: Amount, rate_inverse: Decimal) -> RateResult<Amount> {
    multiply(htg, rate_inverse)
}

/// Converts between the two wallet currencies with a fixed rate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateConverter {
    rates: ExchangeRates,
}

impl RateConverter {
    pub fn new(rates: ExchangeRates) -> Self {
        Self { rates }
    }

    pub fn usd_to_htg(&self, usd: Amount) -> RateResult<Amount> {
        usd_to_htg(usd, self.rates.usd_to_htg())
    }

    pub fn htg_to_usd(&self, htg: Amount) -> RateResult<Amount> {
        htg_to_usd(htg, self.rates.htg_to_usd())
    }

    /// Convert `amount` from `from` into `to`. Same-currency is the identity.
    pub fn convert(&self, amount: Amount, from: Currency, to: Currency) -> RateResult<Amount> {
        match (from, to) {
            (Currency::Usd, Currency::Htg) => self.usd_to_htg(amount),
            (Currency::Htg, Currency::Usd) => self.htg_to_usd(amount),
            _ => Ok(amount),
        }
    }
}

/// Expected vs received HTG for an agent-assisted USD deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepositVerification {
    /// `amount_usd * rate_used`
    pub expected_htg: Amount,
    pub received_htg: Amount,
    /// `received_htg - expected_htg`; negative when the agent collected too little
    pub difference: Decimal,
}

impl DepositVerification {
    pub fn is_exact(&self) -> bool {
        self.difference.is_zero()
    }

    pub fn is_short(&self) -> bool {
        self.difference < Decimal::ZERO
    }
}

/// Cross-check the HTG an agent collected against the USD credited.
pub fn verify_agent_deposit(
    amount_usd: Amount,
    amount_htg_received: Amount,
    rate_used: Decimal,
) -> RateResult<DepositVerification> {
    let expected_htg = usd_to_htg(amount_usd, rate_used)?;
    let difference = amount_htg_received.value() - expected_htg.value();

    if difference != Decimal::ZERO {
        tracing::debug!(
            %amount_usd,
            %expected_htg,
            received_htg = %amount_htg_received,
            %difference,
            "Agent deposit HTG mismatch"
        );
    }

    Ok(DepositVerification {
        expected_htg,
        received_htg: amount_htg_received,
        difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn amt(v: Decimal) -> Amount {
        Amount::new(v).unwrap()
    }

    fn converter(usd_to_htg: Decimal, htg_to_usd: Decimal) -> RateConverter {
        RateConverter::new(ExchangeRates::new(usd_to_htg, htg_to_usd).unwrap())
    }

    fn verify(received_htg: Decimal) -> DepositVerification {
        verify_agent_deposit(amt(dec!(50)), amt(received_htg), dec!(135)).unwrap()
    }

    #[test]
    fn test_usd_to_htg() {
        let htg = usd_to_htg(amt(dec!(50)), dec!(135)).unwrap();
        assert_eq!(htg.value(), dec!(6750));
    }

    #[test]
    fn test_htg_to_usd_uses_inverse_scalar() {
        let usd = htg_to_usd(amt(dec!(1000)), dec!(0.0074)).unwrap();
        assert_eq!(usd.value(), dec!(7.4));
    }

    #[test]
    fn test_zero_rate_rejected() {
        assert_eq!(
            usd_to_htg(amt(dec!(1)), Decimal::ZERO),
            Err(RateError::NonPositiveRate(Decimal::ZERO))
        );
    }

    #[test]
    fn test_round_trip_is_not_assumed_exact() {
        // 1 / 135 = 0.0074074..., published rounded to 0.0074
        let converter = converter(dec!(135), dec!(0.0074));

        let htg = converter.usd_to_htg(amt(dec!(100))).unwrap();
        assert_eq!(htg.value(), dec!(13500));

        let back = converter.htg_to_usd(htg).unwrap();
        assert_eq!(back.value(), dec!(99.9));
        assert_ne!(back.value(), dec!(100));
    }

    #[test]
    fn test_convert_dispatch() {
        let converter = converter(dec!(130), dec!(0.0077));
        let amount = amt(dec!(10));

        let htg = converter.convert(amount, Currency::Usd, Currency::Htg);
        assert_eq!(htg.unwrap().value(), dec!(1300));

        let usd = converter.convert(amount, Currency::Htg, Currency::Usd);
        assert_eq!(usd.unwrap().value(), dec!(0.077));

        let same = converter.convert(amount, Currency::Htg, Currency::Htg);
        assert_eq!(same.unwrap(), amount);
    }

    #[test]
    fn test_verify_agent_deposit() {
        let exact = verify(dec!(6750));
        assert_eq!(exact.expected_htg.value(), dec!(6750));
        assert!(exact.is_exact());

        let short = verify(dec!(6700));
        assert_eq!(short.difference, dec!(-50));
        assert!(short.is_short());

        let over = verify(dec!(6800));
        assert_eq!(over.difference, dec!(50));
        assert!(!over.is_short());
    }
}
