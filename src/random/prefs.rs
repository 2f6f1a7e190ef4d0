//! Random preference scenario builder.
//!
//! Generates ready-to-use random markets for tests and benchmarks: one
//! preference table per side (each column an independent uniform random
//! permutation of the opposite side's ids plus the unmatched sentinel),
//! and optionally a capacity vector for the responder side.
//!
//! When `allow_unmatched` is `false`, the permutation is drawn over the
//! non-sentinel ids only and the sentinel placed at the final position.
//! Filtering the sentinel out of a full permutation after the fact
//! would not be uniform over the restricted space, so it is never done
//! that way here.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::RngCore;

use super::permutation::{randperm_fill_columns, shuffle};
use crate::models::UNMATCHED;

/// Generates random preference tables for both sides of a market.
///
/// Returns `(m_prefs, f_prefs)`: `m_prefs` has `m` columns, each a
/// permutation of `0..=n`; `f_prefs` has `n` columns, each a
/// permutation of `0..=m`. With `allow_unmatched` the sentinel may land
/// anywhere; otherwise it is pinned to the last (least preferred)
/// position of every column.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_match::random::random_prefs;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let (m_prefs, f_prefs) = random_prefs(&mut rng, 4, 3, false);
/// assert_eq!(m_prefs.len(), 4);
/// assert_eq!(f_prefs.len(), 3);
/// // Sentinel-last: being unmatched is everyone's least preferred outcome.
/// assert!(m_prefs.iter().all(|col| col[3] == 0));
/// assert!(f_prefs.iter().all(|col| col[4] == 0));
/// ```
pub fn random_prefs<R: Rng>(
    rng: &mut R,
    m: usize,
    n: usize,
    allow_unmatched: bool,
) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
    let m_prefs = random_pref_table(rng, m, n, allow_unmatched);
    let f_prefs = random_pref_table(rng, n, m, allow_unmatched);
    (m_prefs, f_prefs)
}

/// Generates random preferences plus responder capacities.
///
/// The college-admissions variant of [`random_prefs`]: returns
/// `(s_prefs, c_prefs, caps)` where `caps[j]` is an independent uniform
/// draw over `1..=max(1, ceil(m / 2))`. Callers wanting a different
/// capacity policy can combine [`random_prefs`] with [`random_caps`].
pub fn random_prefs_with_caps<R: Rng>(
    rng: &mut R,
    m: usize,
    n: usize,
    allow_unmatched: bool,
) -> (Vec<Vec<usize>>, Vec<Vec<usize>>, Vec<usize>) {
    let (s_prefs, c_prefs) = random_prefs(rng, m, n, allow_unmatched);
    let cap_max = m.div_ceil(2).max(1);
    let caps = random_caps(rng, n, 1..=cap_max);
    (s_prefs, c_prefs, caps)
}

/// Draws `count` independent capacities uniformly from `range`.
pub fn random_caps<R: Rng>(
    rng: &mut R,
    count: usize,
    range: RangeInclusive<usize>,
) -> Vec<usize> {
    (0..count).map(|_| rng.random_range(range.clone())).collect()
}

/// One side's table: `count` columns over opposite ids `0..=opposite`.
fn random_pref_table<R: RngCore>(
    rng: &mut R,
    count: usize,
    opposite: usize,
    allow_unmatched: bool,
) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0usize; opposite + 1]; count];
    if allow_unmatched {
        randperm_fill_columns(rng, &mut table);
    } else {
        // Permute the real ids only; the sentinel takes the last slot.
        for column in &mut table {
            for (i, v) in column[..opposite].iter_mut().enumerate() {
                *v = i + 1;
            }
            shuffle(rng, &mut column[..opposite]);
            column[opposite] = UNMATCHED;
        }
    }
    table
}
