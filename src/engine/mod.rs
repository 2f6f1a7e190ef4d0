//! Deferred-acceptance solver and stability audit.
//!
//! Provides the proposal-queue matching engine and its supporting
//! structures.
//!
//! # Algorithm
//!
//! `deferred_acceptance` runs Gale–Shapley deferred acceptance with a
//! proposal queue: the proposing side offers down its preference
//! columns, the responding side holds the best offers up to capacity.
//! The outcome is stable and optimal for the proposing side.
//!
//! # Audit
//!
//! `is_stable` independently scans a matching for blocking pairs.
//!
//! # References
//!
//! - Gale & Shapley (1962), "College Admissions and the Stability of Marriage"
//! - Roth & Sotomayor (1990), "Two-Sided Matching: A Study in Game-Theoretic
//!   Modeling and Analysis"

mod deferred;
mod holds;
mod rank;
mod stability;

pub use deferred::deferred_acceptance;
pub use rank::RankTable;
pub use stability::is_stable;
