//! Deferred-acceptance solver.
//!
//! One proposal-queue engine serves all three market shapes: marriage
//! (one-to-one), college admissions (many-to-one), and many-to-many.
//! The proposing side offers down its preference columns one candidate
//! at a time; the responding side tentatively holds the best offers up
//! to capacity and releases a hold whenever a better offer arrives.
//! When the queue drains, the tentative holds are the final matching,
//! and it is the best stable matching for the proposing side.
//!
//! Processing order does not affect the result, only the trace; the
//! FIFO queue fixes a reproducible trace.
//!
//! # Complexity
//! O(total preference entries): each proposer walks its column at most
//! once, and each step costs O(log cap) heap work.
//!
//! # Reference
//! Gale & Shapley (1962), "College Admissions and the Stability of Marriage"
//! McVitie & Wilson (1971), "The Stable Marriage Problem"
//! Roth & Sotomayor (1990), "Two-Sided Matching", Ch. 2 and 5

use std::collections::VecDeque;

use crate::engine::holds::HoldHeap;
use crate::engine::rank::RankTable;
use crate::error::MatchError;
use crate::models::{Market, Matching, Side, UNMATCHED};
use crate::sparse::MatchLists;
use crate::validation;

/// Computes a stable matching by deferred acceptance.
///
/// `proposing` selects the offering side; the result is optimal for
/// that side among all stable matchings. Inputs are validated first
/// and the market is left untouched on error.
///
/// # Example
/// ```
/// use u_match::engine::deferred_acceptance;
/// use u_match::models::{Market, Side};
///
/// // Three students chasing one seat: the college keeps its favorite.
/// let market = Market::college_admissions(
///     vec![vec![1, 0], vec![1, 0], vec![1, 0]],
///     vec![vec![2, 1, 3, 0]],
///     vec![1],
/// );
/// let matching = deferred_acceptance(&market, Side::Proposers).unwrap();
/// assert_eq!(matching.dense(Side::Proposers), Some(vec![0, 1, 0]));
/// assert_eq!(matching.matches_of(Side::Responders, 1), &[2]);
/// ```
pub fn deferred_acceptance(market: &Market, proposing: Side) -> Result<Matching, MatchError> {
    validation::validate(market)?;

    let responding = proposing.opposite();
    let offer_prefs = market.prefs(proposing);
    let offer_caps = market.caps(proposing);
    let hold_caps = market.caps(responding);
    let offer_count = market.count(proposing);
    let hold_count = market.count(responding);

    let hold_ranks = RankTable::build(market.prefs(responding), offer_count);

    // A responder can hold at most one slot per distinct offerer, so
    // extra capacity beyond that never fills.
    let mut heaps: Vec<HoldHeap> = hold_caps
        .iter()
        .map(|&cap| HoldHeap::with_vacancies(cap.min(offer_count), hold_ranks.worst_rank()))
        .collect();

    let mut cursor = vec![0usize; offer_count];
    let mut need: Vec<usize> = offer_caps.to_vec();
    let mut exhausted = vec![false; offer_count];

    // Invariant: every agent with unfilled need and candidates left is
    // queued at least once. Duplicates arise from evictions and are
    // skipped as stale on pop.
    let mut queue: VecDeque<usize> = (0..offer_count).collect();

    while let Some(agent) = queue.pop_front() {
        if need[agent] == 0 || exhausted[agent] {
            continue;
        }

        let candidate = offer_prefs[agent][cursor[agent]];
        cursor[agent] += 1;

        if candidate == UNMATCHED {
            // Everything past the sentinel is worse than staying
            // unmatched, so the remaining slots stay open for good.
            exhausted[agent] = true;
            need[agent] = 0;
            continue;
        }

        let slot = candidate - 1;
        let rank = hold_ranks.rank(slot, agent + 1);
        if heaps[slot].accepts(rank) {
            let (_, evicted) = heaps[slot].replace_worst(rank, agent + 1);
            need[agent] -= 1;
            if need[agent] > 0 {
                queue.push_back(agent);
            }
            if evicted != UNMATCHED {
                let former = evicted - 1;
                if !exhausted[former] {
                    need[former] += 1;
                    queue.push_back(former);
                }
            }
        } else {
            queue.push_back(agent);
        }
    }

    Ok(collect_matching(&heaps, offer_count, hold_count, proposing))
}

/// Reads the final holds out of the heaps into mirrored match lists.
fn collect_matching(
    heaps: &[HoldHeap],
    offer_count: usize,
    hold_count: usize,
    proposing: Side,
) -> Matching {
    let mut offer_pairs = Vec::new();
    let mut hold_pairs = Vec::new();
    for (index, heap) in heaps.iter().enumerate() {
        let holder = index + 1;
        let mut held: Vec<usize> = heap.members().collect();
        held.sort_unstable();
        for &agent in &held {
            hold_pairs.push((holder, agent));
            offer_pairs.push((agent, holder));
        }
    }

    // Scanning holders in ascending order keeps both sides' buckets
    // ascending after the counting fill.
    let offer_lists = MatchLists::from_pairs(offer_count, &offer_pairs);
    let hold_lists = MatchLists::from_pairs(hold_count, &hold_pairs);

    match proposing {
        Side::Proposers => Matching {
            proposer_lists: offer_lists,
            responder_lists: hold_lists,
        },
        Side::Responders => Matching {
            proposer_lists: hold_lists,
            responder_lists: offer_lists,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::random_prefs;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_marriage_market() -> Market {
        Market::one_to_one(
            vec![vec![2, 1, 3, 0], vec![1, 3, 2, 0], vec![1, 2, 3, 0]],
            vec![vec![1, 3, 2, 0], vec![3, 1, 2, 0], vec![2, 3, 1, 0]],
        )
    }

    #[test]
    fn test_single_proposer_takes_first_choice() {
        let market = Market::one_to_one(vec![vec![1, 2, 0]], vec![vec![1, 0], vec![1, 0]]);
        let matching = deferred_acceptance(&market, Side::Proposers).unwrap();
        assert_eq!(matching.dense(Side::Proposers), Some(vec![1]));
        assert_eq!(matching.dense(Side::Responders), Some(vec![1, 0]));
    }

    #[test]
    fn test_contested_seat_goes_to_favorite() {
        let market = Market::college_admissions(
            vec![vec![1, 0], vec![1, 0], vec![1, 0]],
            vec![vec![2, 1, 3, 0]],
            vec![1],
        );
        let matching = deferred_acceptance(&market, Side::Proposers).unwrap();
        assert_eq!(matching.dense(Side::Proposers), Some(vec![0, 1, 0]));
        assert_eq!(matching.matches_of(Side::Responders, 1), &[2]);
    }

    #[test]
    fn test_three_by_three_proposer_optimal() {
        let matching = deferred_acceptance(&sample_marriage_market(), Side::Proposers).unwrap();
        assert_eq!(matching.dense(Side::Proposers), Some(vec![2, 3, 1]));
        assert_eq!(matching.dense(Side::Responders), Some(vec![3, 1, 2]));
    }

    #[test]
    fn test_direction_swap_favors_responders() {
        let matching = deferred_acceptance(&sample_marriage_market(), Side::Responders).unwrap();
        assert_eq!(matching.dense(Side::Responders), Some(vec![1, 3, 2]));
        assert_eq!(matching.dense(Side::Proposers), Some(vec![1, 3, 2]));
    }

    #[test]
    fn test_eviction_resumes_from_cursor() {
        // Responder 2 first holds proposer 1, then trades up; proposer
        // 1 ranks the sentinel next and never reaches responder 1.
        let market = Market::one_to_one(
            vec![vec![2, 0, 1], vec![2, 1, 0]],
            vec![vec![2, 1, 0], vec![2, 1, 0]],
        );
        let matching = deferred_acceptance(&market, Side::Proposers).unwrap();
        assert_eq!(matching.dense(Side::Proposers), Some(vec![0, 2]));
        assert_eq!(matching.dense(Side::Responders), Some(vec![0, 2]));
    }

    #[test]
    fn test_college_capacity_two_drops_worst() {
        let market = Market::college_admissions(
            vec![vec![1, 0], vec![1, 0], vec![1, 0]],
            vec![vec![1, 2, 3, 0]],
            vec![2],
        );
        let matching = deferred_acceptance(&market, Side::Proposers).unwrap();
        assert_eq!(matching.dense(Side::Proposers), Some(vec![1, 1, 0]));
        assert_eq!(matching.matches_of(Side::Responders, 1), &[1, 2]);
    }

    #[test]
    fn test_free_capacity_accepts_any_offer() {
        // The responder ranks vacancy first but has an open slot, and
        // open slots never turn an offer down.
        let market = Market::one_to_one(vec![vec![1, 0]], vec![vec![0, 1]]);
        let matching = deferred_acceptance(&market, Side::Proposers).unwrap();
        assert_eq!(matching.dense(Side::Proposers), Some(vec![1]));
    }

    #[test]
    fn test_many_to_many_fills_both_sides() {
        let market = Market::many_to_many(
            vec![vec![1, 2, 0], vec![2, 1, 0]],
            vec![vec![1, 2, 0], vec![2, 1, 0]],
            vec![2, 2],
            vec![2, 2],
        );
        let matching = deferred_acceptance(&market, Side::Proposers).unwrap();
        assert_eq!(matching.pair_count(), 4);
        assert_eq!(matching.matches_of(Side::Proposers, 1), &[1, 2]);
        assert_eq!(matching.matches_of(Side::Proposers, 2), &[1, 2]);
        assert_eq!(matching.matches_of(Side::Responders, 1), &[1, 2]);
        assert_eq!(matching.matches_of(Side::Responders, 2), &[1, 2]);
    }

    #[test]
    fn test_empty_market() {
        let market = Market::one_to_one(vec![], vec![]);
        let matching = deferred_acceptance(&market, Side::Proposers).unwrap();
        assert_eq!(matching.pair_count(), 0);
        assert_eq!(matching.dense(Side::Proposers), Some(vec![]));
    }

    #[test]
    fn test_invalid_market_rejected_before_solving() {
        let mut market = sample_marriage_market();
        market.prop_prefs[0] = vec![2, 2, 3, 0];
        assert!(matches!(
            deferred_acceptance(&market, Side::Proposers),
            Err(MatchError::InvalidPreferenceOrder { .. })
        ));
    }

    #[test]
    fn test_repeat_runs_identical() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (m_prefs, f_prefs) = random_prefs(&mut rng, 12, 9, true);
        let market = Market::one_to_one(m_prefs, f_prefs);
        let first = deferred_acceptance(&market, Side::Proposers).unwrap();
        let second = deferred_acceptance(&market, Side::Proposers).unwrap();
        assert_eq!(first, second);
    }
}
