//! Two-sided matching algorithms for the U-Engine ecosystem.
//!
//! Provides deferred acceptance (Gale–Shapley) over one-to-one,
//! many-to-one, and many-to-many markets, plus the random scenario
//! generators used to exercise it. One engine serves all three market
//! shapes; a direction parameter selects which side proposes.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Market`, `Matching`, `Side`
//! - **`engine`**: The deferred-acceptance solver and `is_stable` audit
//! - **`sparse`**: `MatchLists`, the CSR-style match-set encoding
//! - **`random`**: Uniform integers, permutations, and preference scenarios
//! - **`validation`**: Input integrity checks (shapes, capacities, permutation columns)
//! - **`error`**: `MatchError` kinds for every rejected input
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem.
//! It contains only matching logic — no scheduling, packing, or
//! assignment-pricing concepts, and no I/O. Callers own the random
//! generator handle; a run never touches hidden state.
//!
//! # References
//!
//! - Gale & Shapley (1962), "College Admissions and the Stability of Marriage"
//! - Roth & Sotomayor (1990), "Two-Sided Matching"
//! - Gusfield & Irving (1989), "The Stable Marriage Problem: Structure and Algorithms"

pub mod engine;
pub mod error;
pub mod models;
pub mod random;
pub mod sparse;
pub mod validation;
