//! Form input coercion
//!
//! Wallet forms treat any unparsable or negative entry as zero
//! (`parseFloat(x) || 0` in the web client). That coercion belongs here, at
//! the input boundary, and nowhere else: fee and rate functions only accept
//! an already-validated [`Amount`].

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::Amount;

/// Parse a form field, falling back to zero for anything that is not a
/// non-negative number.
///
/// Leading numeric prefixes are honoured the way the browser parses them,
/// so `"12.5 USD"` yields `12.5`, `"1e3"` yields `1000` and `"abc"` yields `0`.
pub fn parse_lenient(raw: &str) -> Amount {
    let (mantissa, exponent) = numeric_prefix(raw.trim());
    let parsed = match exponent {
        Some(exponent) => Decimal::from_scientific(&format!("{mantissa}e{exponent}")),
        None => Decimal::from_str(mantissa),
    };
    parsed
        .ok()
        .and_then(|value| Amount::new(value).ok())
        .unwrap_or(Amount::ZERO)
}

/// Longest leading slice that looks like `[+-]digits[.digits][e[+-]digits]`,
/// split into mantissa and exponent.
fn numeric_prefix(s: &str) -> (&str, Option<&str>) {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut seen_dot = false;
    let mut seen_digit = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    let prefix = &s[..end];
    let mantissa = prefix.strip_suffix('.').unwrap_or(prefix);
    if !seen_digit || !matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        return (mantissa, None);
    }

    // Exponent only counts when at least one digit follows
    let exp_start = end + 1;
    let mut exp_end = exp_start;
    if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
        exp_end += 1;
    }
    let digits_start = exp_end;
    while matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
        exp_end += 1;
    }

    if exp_end == digits_start {
        (mantissa, None)
    } else {
        (mantissa, Some(&s[exp_start..exp_end]))
    }
}
