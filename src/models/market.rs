//! Two-sided market model.
//!
//! A market holds the immutable inputs of one matching run: both
//! sides' preference columns and both sides' capacities. Proposers and
//! responders are positional labels, not semantic ones — the direction
//! parameter of the solver decides which side actually proposes.
//!
//! # Id Convention
//!
//! Agents on a side with `k` members carry ids `1..=k`; id `0` is the
//! sentinel meaning "unmatched" (proposer side) or "vacant slot"
//! (responder side). A preference column for an agent is a permutation
//! of `0..=k` over the *opposite* side's ids, most preferred first.
//! Vectors indexed by agent store the entry for id `x` at index `x - 1`.
//!
//! # Reference
//! Roth & Sotomayor (1990), "Two-Sided Matching", Ch. 2 and 5

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine;
use crate::error::MatchError;
use crate::models::Matching;
use crate::validation;

/// Sentinel id standing for "unmatched" / "vacant slot".
///
/// Never a real agent: it appears in preference columns as the point
/// below which an agent prefers staying alone, and in dense match
/// vectors for agents that ended up without a partner. It never
/// appears in sparse match values.
pub const UNMATCHED: usize = 0;

/// Selects which side of a [`Market`] proposes.
///
/// The deferred-acceptance engine is symmetric in the two sides; this
/// is the only place the distinction is made. The returned matching is
/// optimal for whichever side proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The side stored as `prop_*` proposes (e.g. students).
    Proposers,
    /// The side stored as `resp_*` proposes (e.g. colleges).
    Responders,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Side {
        match self {
            Side::Proposers => Side::Responders,
            Side::Responders => Side::Proposers,
        }
    }
}

impl fmt::Display for Side {
    // Lowercase role name, used in error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Proposers => write!(f, "proposer"),
            Side::Responders => write!(f, "responder"),
        }
    }
}

/// A two-sided matching market.
///
/// One struct serves all three arities: one-to-one (all capacities 1),
/// many-to-one (college admissions; responder capacities free), and
/// many-to-many (both capacity vectors free). Inputs are immutable for
/// the duration of a solver run.
///
/// # Example
/// ```
/// use u_match::models::{Market, Side};
///
/// // One proposer preferring responder 1, then 2, then staying alone;
/// // both responders prefer the proposer over a vacant slot.
/// let market = Market::one_to_one(
///     vec![vec![1, 2, 0]],
///     vec![vec![1, 0], vec![1, 0]],
/// );
/// let matching = market.solve(Side::Proposers).unwrap();
/// assert_eq!(matching.dense(Side::Proposers), Some(vec![1]));
/// assert_eq!(matching.dense(Side::Responders), Some(vec![1, 0]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    /// Proposer preference columns; column `i` is a permutation of
    /// `0..=responder_count` for proposer `i + 1`.
    pub prop_prefs: Vec<Vec<usize>>,
    /// Responder preference columns; column `j` is a permutation of
    /// `0..=proposer_count` for responder `j + 1`.
    pub resp_prefs: Vec<Vec<usize>>,
    /// Proposer capacities (all 1 outside many-to-many markets).
    pub prop_caps: Vec<usize>,
    /// Responder capacities.
    pub resp_caps: Vec<usize>,
}

impl Market {
    /// Creates a marriage market: every agent holds at most one partner.
    pub fn one_to_one(prop_prefs: Vec<Vec<usize>>, resp_prefs: Vec<Vec<usize>>) -> Self {
        let prop_caps = vec![1; prop_prefs.len()];
        let resp_caps = vec![1; resp_prefs.len()];
        Self {
            prop_prefs,
            resp_prefs,
            prop_caps,
            resp_caps,
        }
    }

    /// Creates a college-admissions market: students (proposer slot)
    /// hold one seat each, colleges hold up to `caps` students.
    pub fn college_admissions(
        s_prefs: Vec<Vec<usize>>,
        c_prefs: Vec<Vec<usize>>,
        caps: Vec<usize>,
    ) -> Self {
        let prop_caps = vec![1; s_prefs.len()];
        Self {
            prop_prefs: s_prefs,
            resp_prefs: c_prefs,
            prop_caps,
            resp_caps: caps,
        }
    }

    /// Creates a many-to-many market with capacities on both sides.
    pub fn many_to_many(
        prop_prefs: Vec<Vec<usize>>,
        resp_prefs: Vec<Vec<usize>>,
        prop_caps: Vec<usize>,
        resp_caps: Vec<usize>,
    ) -> Self {
        Self {
            prop_prefs,
            resp_prefs,
            prop_caps,
            resp_caps,
        }
    }

    /// Number of proposers.
    pub fn proposer_count(&self) -> usize {
        self.prop_prefs.len()
    }

    /// Number of responders.
    pub fn responder_count(&self) -> usize {
        self.resp_prefs.len()
    }

    /// Number of agents on `side`.
    pub fn count(&self, side: Side) -> usize {
        match side {
            Side::Proposers => self.proposer_count(),
            Side::Responders => self.responder_count(),
        }
    }

    /// Preference columns of `side`.
    pub fn prefs(&self, side: Side) -> &[Vec<usize>] {
        match side {
            Side::Proposers => &self.prop_prefs,
            Side::Responders => &self.resp_prefs,
        }
    }

    /// Capacities of `side`.
    pub fn caps(&self, side: Side) -> &[usize] {
        match side {
            Side::Proposers => &self.prop_caps,
            Side::Responders => &self.resp_caps,
        }
    }

    /// Checks all solver preconditions without solving.
    ///
    /// Scans shapes, capacities, and permutation columns in a fixed
    /// order and reports the first violation. [`solve`](Self::solve)
    /// runs the same checks before touching the market.
    pub fn validate(&self) -> Result<(), MatchError> {
        validation::validate(self)
    }

    /// Computes a stable matching with `proposing` as the offering side.
    ///
    /// Delegates to [`engine::deferred_acceptance`]; see there for the
    /// algorithm and its guarantees.
    pub fn solve(&self, proposing: Side) -> Result<Matching, MatchError> {
        engine::deferred_acceptance(self, proposing)
    }
}
