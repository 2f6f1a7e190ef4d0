//! Input validation for matching markets.
//!
//! Checks structural integrity of a market before solving. Detects:
//! - Preference columns of the wrong length
//! - Capacity vectors of the wrong length, or zero capacities
//! - Preference columns that are not permutations of `0..=k`
//!
//! Checks run in that order and stop at the first violation, so the
//! permutation scan may assume well-shaped columns.
//!
//! # Reference
//! Gusfield & Irving (1989), "The Stable Marriage Problem", Ch. 1

use crate::error::MatchError;
use crate::models::{Market, Side};

/// Validates a market against the solver's preconditions.
///
/// Checks:
/// 1. Every preference column on each side has length `k + 1`, where
///    `k` is the opposite side's agent count
/// 2. Each capacity vector matches its side's agent count
/// 3. Every capacity is at least 1
/// 4. Every preference column is a permutation of `0..=k`
///
/// # Returns
/// `Ok(())` if all checks pass, or the first violation found.
pub fn validate(market: &Market) -> Result<(), MatchError> {
    check_shapes(Side::Proposers, &market.prop_prefs, market.responder_count())?;
    check_shapes(Side::Responders, &market.resp_prefs, market.proposer_count())?;

    check_caps(Side::Proposers, &market.prop_caps, market.proposer_count())?;
    check_caps(Side::Responders, &market.resp_caps, market.responder_count())?;

    check_permutations(Side::Proposers, &market.prop_prefs, market.responder_count())?;
    check_permutations(Side::Responders, &market.resp_prefs, market.proposer_count())?;

    Ok(())
}

/// Every column must rank all `opposite_count` partners plus the sentinel.
fn check_shapes(
    side: Side,
    prefs: &[Vec<usize>],
    opposite_count: usize,
) -> Result<(), MatchError> {
    let expected = opposite_count + 1;
    for (index, column) in prefs.iter().enumerate() {
        if column.len() != expected {
            return Err(MatchError::ShapeMismatch {
                side,
                agent: index + 1,
                found: column.len(),
                expected,
            });
        }
    }
    Ok(())
}

fn check_caps(side: Side, caps: &[usize], agent_count: usize) -> Result<(), MatchError> {
    if caps.len() != agent_count {
        return Err(MatchError::InvalidCapacity {
            side,
            detail: format!("length {} does not match agent count {agent_count}", caps.len()),
        });
    }
    for (index, &cap) in caps.iter().enumerate() {
        if cap == 0 {
            return Err(MatchError::InvalidCapacity {
                side,
                detail: format!("agent {} has capacity 0", index + 1),
            });
        }
    }
    Ok(())
}

/// Marks each value in a seen-table; any out-of-range or repeated value
/// means the column is not a permutation of `0..=opposite_count`.
fn check_permutations(
    side: Side,
    prefs: &[Vec<usize>],
    opposite_count: usize,
) -> Result<(), MatchError> {
    let mut seen = vec![false; opposite_count + 1];
    for (index, column) in prefs.iter().enumerate() {
        seen.fill(false);
        for &value in column {
            if value > opposite_count || seen[value] {
                return Err(MatchError::InvalidPreferenceOrder {
                    side,
                    agent: index + 1,
                    expected_max: opposite_count,
                });
            }
            seen[value] = true;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_market() -> Market {
        Market::college_admissions(
            vec![vec![1, 2, 0], vec![2, 1, 0], vec![1, 0, 2]],
            vec![vec![1, 2, 3, 0], vec![3, 1, 2, 0]],
            vec![2, 1],
        )
    }

    #[test]
    fn test_valid_market() {
        assert!(validate(&sample_market()).is_ok());
    }

    #[test]
    fn test_empty_market() {
        let market = Market::one_to_one(vec![], vec![]);
        assert!(validate(&market).is_ok());
    }

    #[test]
    fn test_short_preference_column() {
        let mut market = sample_market();
        market.prop_prefs[1] = vec![2, 0];
        assert_eq!(
            validate(&market),
            Err(MatchError::ShapeMismatch {
                side: Side::Proposers,
                agent: 2,
                found: 2,
                expected: 3,
            })
        );
    }

    #[test]
    fn test_caps_length_mismatch() {
        let mut market = sample_market();
        market.resp_caps = vec![2];
        assert_eq!(
            validate(&market),
            Err(MatchError::InvalidCapacity {
                side: Side::Responders,
                detail: "length 1 does not match agent count 2".into(),
            })
        );
    }

    #[test]
    fn test_zero_capacity() {
        let mut market = sample_market();
        market.resp_caps = vec![2, 0];
        assert_eq!(
            validate(&market),
            Err(MatchError::InvalidCapacity {
                side: Side::Responders,
                detail: "agent 2 has capacity 0".into(),
            })
        );
    }

    #[test]
    fn test_repeated_preference_value() {
        let mut market = sample_market();
        market.resp_prefs[0] = vec![1, 2, 2, 0];
        assert_eq!(
            validate(&market),
            Err(MatchError::InvalidPreferenceOrder {
                side: Side::Responders,
                agent: 1,
                expected_max: 3,
            })
        );
    }

    #[test]
    fn test_out_of_range_preference_value() {
        let mut market = sample_market();
        market.prop_prefs[2] = vec![1, 3, 0];
        assert_eq!(
            validate(&market),
            Err(MatchError::InvalidPreferenceOrder {
                side: Side::Proposers,
                agent: 3,
                expected_max: 2,
            })
        );
    }

    #[test]
    fn test_shape_reported_before_caps() {
        // Both a short column and a bad capacity vector: shapes win.
        let mut market = sample_market();
        market.prop_prefs[0] = vec![1, 0];
        market.resp_caps = vec![0, 0];
        assert!(matches!(
            validate(&market),
            Err(MatchError::ShapeMismatch { .. })
        ));
    }
}
