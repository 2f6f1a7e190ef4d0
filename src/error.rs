//! Error types for matching problems.
//!
//! All precondition violations are detected before the algorithm runs
//! and reported synchronously; the solver never returns a partial
//! matching. Inputs are the caller's responsibility — nothing here is
//! retried.

use thiserror::Error;

use crate::models::Side;

/// Errors reported by market validation and the random generators.
///
/// Each variant carries enough context to locate the offending column
/// or capacity entry. Agent indices in messages are 1-based, matching
/// the id convention used in preference columns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A preference column is not a permutation of `0..=k`
    /// (missing or duplicate entries, or an out-of-range value).
    #[error("{side} {agent}: preference order is not a permutation of 0..={expected_max}")]
    InvalidPreferenceOrder {
        /// Side owning the offending column.
        side: Side,
        /// 1-based id of the agent whose column is invalid.
        agent: usize,
        /// Largest id the column may contain (opposite-side count).
        expected_max: usize,
    },

    /// A capacity entry is zero, or the capacity vector has the wrong length.
    #[error("invalid {side} capacities: {detail}")]
    InvalidCapacity {
        /// Side owning the capacity vector.
        side: Side,
        /// What exactly is wrong with the vector.
        detail: String,
    },

    /// A preference column's length is inconsistent with the agent counts.
    #[error("{side} {agent}: preference column has {found} entries, expected {expected}")]
    ShapeMismatch {
        /// Side owning the offending column.
        side: Side,
        /// 1-based id of the agent whose column has the wrong length.
        agent: usize,
        /// Actual column length.
        found: usize,
        /// Expected column length (opposite-side count + 1).
        expected: usize,
    },

    /// Exclusive upper bound for a random draw was zero.
    #[error("random integer bound must be positive")]
    InvalidBound,
}
