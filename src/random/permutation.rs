//! Random permutations via Fisher–Yates.
//!
//! The shuffle walks the slice from the last element down to the first,
//! swapping each position with a uniformly drawn earlier one (inclusive
//! of itself). Every permutation is produced with equal probability;
//! the iteration direction only affects memory access order, not the
//! distribution. Swap indices come from the masked rejection sampler in
//! [`rand_below`](crate::random::rand_below), so there is no modulo
//! bias anywhere in the pipeline.
//!
//! # Reference
//! Knuth (1998), "The Art of Computer Programming", Vol. 2, §3.4.2,
//! Algorithm P (originally Fisher & Yates 1938; Durstenfeld 1964)

use rand::RngCore;

use super::integer::rand_below_nonzero;

/// Shuffles a slice in place into a uniformly random order.
pub fn shuffle<T, R: RngCore>(rng: &mut R, values: &mut [T]) {
    for i in (1..values.len()).rev() {
        let j = rand_below_nonzero(rng, i + 1);
        values.swap(i, j);
    }
}

/// Fills `out` with a uniformly random permutation of `0..out.len()`.
pub fn randperm_fill<R: RngCore>(rng: &mut R, out: &mut [usize]) {
    for (i, v) in out.iter_mut().enumerate() {
        *v = i;
    }
    shuffle(rng, out);
}

/// Fills each column with an independent random permutation of `0..len`.
///
/// Columns may have different lengths; each draws independently from
/// the same generator, one after another.
pub fn randperm_fill_columns<R: RngCore>(rng: &mut R, columns: &mut [Vec<usize>]) {
    for column in columns {
        randperm_fill(rng, column);
    }
}
