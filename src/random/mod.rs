//! Random generation utilities for matching markets.
//!
//! Provides the unbiased building blocks used by the preference
//! scenario builder: rejection-sampled integers, Fisher–Yates
//! permutations, and the `random_prefs` family for producing complete
//! random markets.
//!
//! All functions take the generator as an explicit caller-owned
//! argument — there is no hidden process-wide random state. Tests and
//! benchmarks pass a seeded `SmallRng` for reproducibility.

mod integer;
mod permutation;
mod prefs;

pub use integer::rand_below;
pub use permutation::{randperm_fill, randperm_fill_columns, shuffle};
pub use prefs::{random_caps, random_prefs, random_prefs_with_caps};
