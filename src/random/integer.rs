//! Uniform random integers below a bound.
//!
//! Draws are taken by masked rejection sampling: mask the raw 64-bit
//! output down to the smallest power-of-two range covering the bound,
//! then redraw while the masked value is too large. No modulo, so no
//! modulo bias; the mask wastes less than half the masked range, so
//! the expected number of draws is below 2.
//!
//! # Reference
//! Knuth (1998), "The Art of Computer Programming", Vol. 2, §3.4.2

use rand::RngCore;

use crate::error::MatchError;

/// Returns a uniform random integer in `[0, bound)`.
///
/// `bound` of zero is a precondition violation and reported as
/// [`MatchError::InvalidBound`]. Any nonzero `usize` bound is accepted.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_match::random::rand_below;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let x = rand_below(&mut rng, 10).unwrap();
/// assert!(x < 10);
/// ```
pub fn rand_below<R: RngCore>(rng: &mut R, bound: usize) -> Result<usize, MatchError> {
    if bound == 0 {
        return Err(MatchError::InvalidBound);
    }
    Ok(rand_below_nonzero(rng, bound))
}

/// Unchecked variant for hot loops where the bound is structurally nonzero.
pub(crate) fn rand_below_nonzero<R: RngCore>(rng: &mut R, bound: usize) -> usize {
    debug_assert!(bound > 0);
    let bound = bound as u64;
    let mask = mask_covering(bound - 1);

    // Bounded retry loop; each draw succeeds with probability > 1/2.
    loop {
        let draw = rng.next_u64() & mask;
        if draw < bound {
            return draw as usize;
        }
    }
}

/// Smallest `2^b - 1` that is `>= max`.
fn mask_covering(max: u64) -> u64 {
    if max == 0 {
        0
    } else {
        u64::MAX >> max.leading_zeros()
    }
}
