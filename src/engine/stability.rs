//! Stability verification.
//!
//! Checks a finished matching for blocking pairs, the property the
//! solver guarantees by construction. Useful as an independent audit
//! in tests and on matchings produced elsewhere.
//!
//! # Reference
//! Roth & Sotomayor (1990), "Two-Sided Matching", Def. 2.3 and 5.3

use crate::engine::rank::RankTable;
use crate::models::{Market, Matching, Side, UNMATCHED};

/// Whether `matching` has no blocking pair in `market`.
///
/// A pair blocks when both ends would rather be matched to each other
/// than stand pat: the offering agent either has an unfilled slot and
/// finds the partner acceptable, or prefers the partner to its worst
/// current match; the holding agent either has a free slot (free slots
/// take any offer) or prefers the agent to its worst current hold.
/// `proposing` names the offering side, mirroring the solver call that
/// produced the matching.
///
/// Assumes a market that passes [`Market::validate`] and a matching
/// whose two lists mirror each other. O(m·n).
pub fn is_stable(market: &Market, matching: &Matching, proposing: Side) -> bool {
    let responding = proposing.opposite();
    let offer_prefs = market.prefs(proposing);
    let hold_prefs = market.prefs(responding);
    let offer_count = market.count(proposing);
    let hold_count = market.count(responding);
    let offer_lists = matching.lists(proposing);
    let hold_lists = matching.lists(responding);

    let offer_ranks = RankTable::build(offer_prefs, hold_count);
    let hold_ranks = RankTable::build(hold_prefs, offer_count);

    // Rank an offering agent must beat to want a new partner: the
    // sentinel's rank while a slot is open, its worst match once full.
    let mut offer_threshold = Vec::with_capacity(offer_count);
    for agent in 0..offer_count {
        let held = offer_lists.matches(agent + 1);
        let rank = if held.len() < market.caps(proposing)[agent] {
            offer_ranks.rank(agent, UNMATCHED)
        } else {
            held.iter()
                .map(|&partner| offer_ranks.rank(agent, partner))
                .max()
                .unwrap_or(0)
        };
        offer_threshold.push(rank);
    }

    // Same on the holding side, except an open slot beats everything.
    let mut hold_threshold = Vec::with_capacity(hold_count);
    for agent in 0..hold_count {
        let held = hold_lists.matches(agent + 1);
        let rank = if held.len() < market.caps(responding)[agent] {
            hold_ranks.worst_rank()
        } else {
            held.iter()
                .map(|&partner| hold_ranks.rank(agent, partner))
                .max()
                .unwrap_or(0)
        };
        hold_threshold.push(rank);
    }

    for agent in 0..offer_count {
        for partner in 1..=hold_count {
            if offer_ranks.rank(agent, partner) >= offer_threshold[agent] {
                continue;
            }
            if offer_lists.matches(agent + 1).contains(&partner) {
                continue;
            }
            if hold_ranks.rank(partner - 1, agent + 1) < hold_threshold[partner - 1] {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::deferred_acceptance;
    use crate::sparse::MatchLists;

    fn sample_marriage_market() -> Market {
        Market::one_to_one(
            vec![vec![2, 1, 3, 0], vec![1, 3, 2, 0], vec![1, 2, 3, 0]],
            vec![vec![1, 3, 2, 0], vec![3, 1, 2, 0], vec![2, 3, 1, 0]],
        )
    }

    fn pairing(prop_partners: &[usize]) -> Matching {
        let mut prop_pairs = Vec::new();
        let mut resp_pairs = Vec::new();
        for (index, &partner) in prop_partners.iter().enumerate() {
            if partner != UNMATCHED {
                prop_pairs.push((index + 1, partner));
                resp_pairs.push((partner, index + 1));
            }
        }
        resp_pairs.sort_unstable();
        Matching {
            proposer_lists: MatchLists::from_pairs(prop_partners.len(), &prop_pairs),
            responder_lists: MatchLists::from_pairs(prop_partners.len(), &resp_pairs),
        }
    }

    #[test]
    fn test_solver_output_is_stable() {
        let market = sample_marriage_market();
        let matching = deferred_acceptance(&market, Side::Proposers).unwrap();
        assert!(is_stable(&market, &matching, Side::Proposers));
    }

    #[test]
    fn test_solver_output_stable_both_directions() {
        let market = sample_marriage_market();
        let matching = deferred_acceptance(&market, Side::Responders).unwrap();
        assert!(is_stable(&market, &matching, Side::Responders));
    }

    #[test]
    fn test_blocking_pair_detected() {
        // Proposer 1 prefers responder 1 to its assigned responder 3,
        // and responder 1 prefers proposer 1 to its held proposer 2.
        let market = sample_marriage_market();
        assert!(!is_stable(&market, &pairing(&[3, 1, 2]), Side::Proposers));
    }

    #[test]
    fn test_other_stable_matching_accepted() {
        // The responder-optimal pairing has no blocking pair either.
        let market = sample_marriage_market();
        assert!(is_stable(&market, &pairing(&[1, 3, 2]), Side::Proposers));
    }

    #[test]
    fn test_mutual_free_slots_block() {
        let market = Market::one_to_one(vec![vec![1, 0]], vec![vec![1, 0]]);
        assert!(!is_stable(&market, &pairing(&[0]), Side::Proposers));
    }

    #[test]
    fn test_unacceptable_partner_does_not_block() {
        // The lone proposer prefers staying unmatched over responder 1.
        let market = Market::one_to_one(vec![vec![0, 1]], vec![vec![1, 0]]);
        assert!(is_stable(&market, &pairing(&[0]), Side::Proposers));
    }

    #[test]
    fn test_open_college_seat_blocks_with_unassigned_student() {
        let market = Market::college_admissions(
            vec![vec![1, 0], vec![1, 0]],
            vec![vec![1, 2, 0]],
            vec![2],
        );
        let unfilled = Matching {
            proposer_lists: MatchLists::from_pairs(2, &[(1, 1)]),
            responder_lists: MatchLists::from_pairs(1, &[(1, 1)]),
        };
        assert!(!is_stable(&market, &unfilled, Side::Proposers));
    }
}
