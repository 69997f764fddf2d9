//! Tier list diagnostics
//!
//! Advisory checks for an admin-configured tier list. The resolver never
//! calls this; it keeps first-match semantics whatever the list looks like.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::tier::FeeTier;

/// A problem found in a tier list. Indices refer to list positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum TierIssue {
    /// `min_amount > max_amount`; the tier can never match
    InvertedBounds { index: usize },
    /// Two tiers share part of their range; the earlier one wins there
    Overlap { first: usize, second: usize },
    /// A later tier lies entirely inside an earlier one and never matches
    Shadowed { index: usize, by: usize },
    /// No tier covers `(from, to)`
    Gap {
        after: usize,
        before: usize,
        from: Decimal,
        to: Decimal,
    },
}

impl fmt::Display for TierIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierIssue::InvertedBounds { index } => {
                write!(f, "tier #{index}: min_amount is above max_amount")
            }
            TierIssue::Overlap { first, second } => {
                write!(f, "tiers #{first} and #{second} overlap (#{first} wins)")
            }
            TierIssue::Shadowed { index, by } => write!(
                f,
                "tier #{index} is fully covered by tier #{by} and never matches"
            ),
            TierIssue::Gap {
                after,
                before,
                from,
                to,
            } => write!(
                f,
                "no tier covers amounts between {from} and {to} (after #{after}, before #{before})"
            ),
        }
    }
}

/// Check `tiers` for inverted bounds, overlaps, shadowed tiers and gaps.
///
/// Adjacent tiers are contiguous when the next lower bound is at most `step`
/// above the previous upper bound (`19.99` → `20` with a one-cent step).
pub fn diagnose(tiers: &[FeeTier], step: Decimal) -> Vec<TierIssue> {
    let mut issues = Vec::new();

    let valid: Vec<(usize, &FeeTier)> = tiers
        .iter()
        .enumerate()
        .filter(|(index, tier)| {
            if tier.min_amount > tier.max_amount {
                issues.push(TierIssue::InvertedBounds { index: *index });
                false
            } else {
                true
            }
        })
        .collect();

    for (i, (first, a)) in valid.iter().enumerate() {
        for (second, b) in valid.iter().skip(i + 1) {
            let intersects = a.min_amount <= b.max_amount && b.min_amount <= a.max_amount;
            if !intersects {
                continue;
            }
            if a.min_amount <= b.min_amount && b.max_amount <= a.max_amount {
                issues.push(TierIssue::Shadowed {
                    index: *second,
                    by: *first,
                });
            } else {
                issues.push(TierIssue::Overlap {
                    first: *first,
                    second: *second,
                });
            }
        }
    }

    let mut by_min = valid;
    by_min.sort_by(|(_, a), (_, b)| a.min_amount.cmp(&b.min_amount));

    let mut reach: Option<(usize, Decimal)> = None;
    for (index, tier) in by_min {
        if let Some((after, covered_to)) = reach {
            let gap = match tier.min_amount.checked_sub(covered_to) {
                Some(distance) => distance > step,
                None => tier.min_amount > covered_to,
            };
            if gap {
                issues.push(TierIssue::Gap {
                    after,
                    before: index,
                    from: covered_to,
                    to: tier.min_amount,
                });
            }
        }
        match reach {
            Some((_, covered_to)) if covered_to >= tier.max_amount => {}
            _ => reach = Some((index, tier.max_amount)),
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use kayicom_core::Amount;
    use rust_decimal_macros::dec;

    fn one() -> Amount {
        Amount::new(dec!(1)).unwrap()
    }

    const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

    #[test]
    fn test_contiguous_tiers_are_clean() {
        let tiers = vec![
            FeeTier::fixed(dec!(5), dec!(19.99), one()),
            FeeTier::percentage(dec!(20), dec!(99.99), one()),
            FeeTier::percentage(dec!(100), dec!(999999), one()),
        ];
        assert!(diagnose(&tiers, CENT).is_empty());
    }

    #[test]
    fn test_empty_list_is_clean() {
        assert!(diagnose(&[], CENT).is_empty());
    }

    #[test]
    fn test_inverted_bounds() {
        let tiers = vec![FeeTier::fixed(dec!(100), dec!(10), one())];
        assert_eq!(
            diagnose(&tiers, CENT),
            vec![TierIssue::InvertedBounds { index: 0 }]
        );
    }

    #[test]
    fn test_overlap() {
        let tiers = vec![
            FeeTier::fixed(dec!(0), dec!(100), one()),
            FeeTier::fixed(dec!(50), dec!(200), one()),
        ];
        assert_eq!(
            diagnose(&tiers, CENT),
            vec![TierIssue::Overlap {
                first: 0,
                second: 1,
            }]
        );
    }

    #[test]
    fn test_shared_boundary_is_overlap() {
        let tiers = vec![
            FeeTier::fixed(dec!(0), dec!(100), one()),
            FeeTier::fixed(dec!(100), dec!(200), one()),
        ];
        assert_eq!(
            diagnose(&tiers, CENT),
            vec![TierIssue::Overlap {
                first: 0,
                second: 1,
            }]
        );
    }

    #[test]
    fn test_shadowed() {
        let tiers = vec![
            FeeTier::fixed(dec!(0), dec!(1000), one()),
            FeeTier::fixed(dec!(10), dec!(20), one()),
        ];
        assert_eq!(
            diagnose(&tiers, CENT),
            vec![TierIssue::Shadowed { index: 1, by: 0 }]
        );
    }

    #[test]
    fn test_gap_reported_in_amount_order() {
        let tiers = vec![
            FeeTier::fixed(dec!(500), dec!(1000), one()),
            FeeTier::fixed(dec!(0), dec!(100), one()),
        ];
        assert_eq!(
            diagnose(&tiers, CENT),
            vec![TierIssue::Gap {
                after: 1,
                before: 0,
                from: dec!(100),
                to: dec!(500),
            }]
        );
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let tiers: Vec<FeeTier> = serde_json::from_str(
            r#"[
                { "min_amount": "-79228162514264337593543950335", "max_amount": "-79228162514264337593543950335", "value": 1 },
                { "min_amount": "79228162514264337593543950335", "max_amount": "79228162514264337593543950335", "value": 1 }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            diagnose(&tiers, CENT),
            vec![TierIssue::Gap {
                after: 0,
                before: 1,
                from: Decimal::MIN,
                to: Decimal::MAX,
            }]
        );
    }

    #[test]
    fn test_display() {
        let issue = TierIssue::Overlap {
            first: 0,
            second: 2,
        };
        assert_eq!(issue.to_string(), "tiers #0 and #2 overlap (#0 wins)");
    }
}
