//! Sparse match-set encoding.
//!
//! Match sets have variable size (a college may admit several students,
//! a single proposer holds at most one partner), so the per-side result
//! is stored CSR-style: one flat `values` array plus an `offsets` array
//! of length `count + 1`. Bucket `i` (the partners of agent `i`) is
//! `values[offsets[i - 1]..offsets[i]]`.
//!
//! Built by a counting pass followed by a filling pass, O(total
//! matches), with no allocation beyond the two output arrays.

use serde::{Deserialize, Serialize};

/// CSR-style per-agent match lists for one side of a market.
///
/// Agent ids are 1-based (id 0 is the unmatched sentinel and owns no
/// bucket); values are 1-based ids on the opposite side. Within each
/// bucket, partners are stored in ascending id order. Empty buckets are
/// valid and common — an unmatched agent simply has
/// `offsets[i - 1] == offsets[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchLists {
    /// Flattened partner ids, bucket by bucket.
    pub values: Vec<usize>,
    /// Bucket boundaries; `offsets[0] == 0`, last entry == `values.len()`.
    pub offsets: Vec<usize>,
}

impl MatchLists {
    /// Creates empty lists for `count` agents (every bucket empty).
    pub fn empty(count: usize) -> Self {
        Self {
            values: Vec::new(),
            offsets: vec![0; count + 1],
        }
    }

    /// Builds lists from `(agent, partner)` pairs via counting-then-filling.
    ///
    /// Both pair members are 1-based ids; `agent` selects the bucket.
    /// The fill is stable: pairs sharing an agent keep their input
    /// order, so feeding pairs in ascending partner order yields the
    /// ascending within-bucket convention used throughout this crate.
    pub fn from_pairs(count: usize, pairs: &[(usize, usize)]) -> Self {
        let mut offsets = vec![0usize; count + 1];

        // Counting pass: bucket sizes at offsets[agent].
        for &(agent, _) in pairs {
            offsets[agent] += 1;
        }

        // Exclusive prefix sum: offsets[agent] becomes the bucket start.
        let mut start = 0;
        for slot in offsets.iter_mut().skip(1) {
            let size = *slot;
            *slot = start;
            start += size;
        }

        // Filling pass: each write advances the bucket cursor, leaving
        // offsets[agent] at the bucket end — exactly the final layout.
        let mut values = vec![0usize; pairs.len()];
        for &(agent, partner) in pairs {
            values[offsets[agent]] = partner;
            offsets[agent] += 1;
        }

        Self { values, offsets }
    }

    /// Number of agents on this side.
    pub fn agent_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of matches across all agents.
    pub fn total_matches(&self) -> usize {
        self.values.len()
    }

    /// Partners of `agent` (1-based id), in ascending id order.
    ///
    /// # Panics
    /// Panics if `agent` is 0 or greater than [`agent_count`](Self::agent_count).
    pub fn matches(&self, agent: usize) -> &[usize] {
        &self.values[self.offsets[agent - 1]..self.offsets[agent]]
    }

    /// Whether `agent` (1-based id) has at least one partner.
    pub fn is_matched(&self, agent: usize) -> bool {
        !self.matches(agent).is_empty()
    }

    /// Iterates `(agent, partners)` over all agents, ids starting at 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        (1..=self.agent_count()).map(move |agent| (agent, self.matches(agent)))
    }
}
