//! Tentative-hold storage for the responding side.

use crate::models::UNMATCHED;

/// Bounded max-heap of one responding agent's tentative holds.
///
/// Entries are `(rank, agent)` with the worst rank at the root, so the
/// accept-or-reject comparison of a proposal is one root read. Free
/// capacity is modeled as vacancy entries (agent [`UNMATCHED`]) carrying
/// a rank strictly worse than any real partner's, which keeps vacancies
/// at the root until they are all consumed.
#[derive(Debug)]
pub(crate) struct HoldHeap {
    entries: Vec<(usize, usize)>,
}

impl HoldHeap {
    /// A heap of `slots` vacancy entries at `worst_rank`.
    pub(crate) fn with_vacancies(slots: usize, worst_rank: usize) -> Self {
        Self {
            entries: vec![(worst_rank, UNMATCHED); slots],
        }
    }

    /// Whether an offer at `rank` beats the current worst entry.
    pub(crate) fn accepts(&self, rank: usize) -> bool {
        self.entries.first().is_some_and(|&(worst, _)| rank < worst)
    }

    /// Replaces the worst entry with `(rank, agent)` and returns it.
    ///
    /// Call only after [`accepts`](Self::accepts) returned true.
    pub(crate) fn replace_worst(&mut self, rank: usize, agent: usize) -> (usize, usize) {
        let evicted = self.entries[0];
        self.entries[0] = (rank, agent);
        self.sift_down();
        evicted
    }

    /// Real agents currently held, in heap order.
    pub(crate) fn members(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .filter(|&&(_, agent)| agent != UNMATCHED)
            .map(|&(_, agent)| agent)
    }

    fn sift_down(&mut self) {
        let len = self.entries.len();
        let mut index = 0;
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let mut worst = left;
            let right = left + 1;
            if right < len && self.entries[right].0 > self.entries[left].0 {
                worst = right;
            }
            if self.entries[worst].0 <= self.entries[index].0 {
                break;
            }
            self.entries.swap(index, worst);
            index = worst;
        }
    }
}
