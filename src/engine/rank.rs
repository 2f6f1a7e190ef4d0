//! Preference rank lookup table.
//!
//! Inverts a side's preference columns once so the proposal loop can
//! compare two partners in O(1) instead of scanning a column per
//! comparison. Standard ranking-matrix construction.
//!
//! # Reference
//! Gusfield & Irving (1989), "The Stable Marriage Problem", Ch. 1.2

/// Flat rank table for one side of a market.
///
/// Row `a` (0-based agent index) stores, for every partner id
/// `0..=k`, the position that id holds in agent `a + 1`'s preference
/// column. Lower rank is better; the sentinel's rank marks where the
/// agent starts preferring vacancy over a partner.
#[derive(Debug, Clone)]
pub struct RankTable {
    ranks: Vec<usize>,
    stride: usize,
}

impl RankTable {
    /// Builds the table from one side's preference columns.
    ///
    /// Columns must be permutations of `0..=opposite_count` (the
    /// solver validates before building).
    pub fn build(prefs: &[Vec<usize>], opposite_count: usize) -> Self {
        let stride = opposite_count + 1;
        let mut ranks = vec![0; prefs.len() * stride];
        for (agent, column) in prefs.iter().enumerate() {
            let row = &mut ranks[agent * stride..(agent + 1) * stride];
            for (position, &partner) in column.iter().enumerate() {
                row[partner] = position;
            }
        }
        Self { ranks, stride }
    }

    /// Rank of `partner` (an id, sentinel included) for 0-based `agent`.
    pub fn rank(&self, agent: usize, partner: usize) -> usize {
        self.ranks[agent * self.stride + partner]
    }

    /// A rank strictly worse than any stored one.
    ///
    /// Used as the standing rank of a vacant slot so that any agent on
    /// the opposite side outranks free capacity.
    pub fn worst_rank(&self) -> usize {
        self.stride
    }
}
