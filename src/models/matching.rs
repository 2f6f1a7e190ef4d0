//! Matching result model.

use serde::{Deserialize, Serialize};

use crate::models::{Side, UNMATCHED};
use crate::sparse::MatchLists;

/// A stable matching, stored from both sides' points of view.
///
/// The two [`MatchLists`] are mirror images: proposer `p` appears in
/// responder `r`'s bucket exactly when `r` appears in `p`'s bucket.
/// Partner ids within a bucket are in ascending order, so equal
/// matchings compare equal structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
    /// Per-proposer partner lists.
    pub proposer_lists: MatchLists,
    /// Per-responder partner lists.
    pub responder_lists: MatchLists,
}

impl Matching {
    /// Partner lists of `side`.
    pub fn lists(&self, side: Side) -> &MatchLists {
        match side {
            Side::Proposers => &self.proposer_lists,
            Side::Responders => &self.responder_lists,
        }
    }

    /// Partner ids of agent `agent` (1-based) on `side`, ascending.
    pub fn matches_of(&self, side: Side, agent: usize) -> &[usize] {
        self.lists(side).matches(agent)
    }

    /// Total number of matched pairs.
    pub fn pair_count(&self) -> usize {
        self.proposer_lists.total_matches()
    }

    /// Dense partner vector for `side`, if every agent there holds at
    /// most one partner.
    ///
    /// Entry `i` is the partner id of agent `i + 1`, or [`UNMATCHED`]
    /// for an agent without a partner. Returns `None` as soon as some
    /// agent holds two or more partners; use [`lists`](Self::lists)
    /// for the general shape.
    pub fn dense(&self, side: Side) -> Option<Vec<usize>> {
        let lists = self.lists(side);
        let mut out = Vec::with_capacity(lists.agent_count());
        for agent in 1..=lists.agent_count() {
            match lists.matches(agent) {
                [] => out.push(UNMATCHED),
                &[partner] => out.push(partner),
                _ => return None,
            }
        }
        Some(out)
    }
}
