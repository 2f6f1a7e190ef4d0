//! Matching domain models.
//!
//! Provides the core data types for posing two-sided matching markets
//! and reading their solutions. Domain-agnostic within matching —
//! applicable to marriage markets, college admissions, and labor markets.
//!
//! # Domain Mappings
//!
//! | u-match | Admissions | Labor | Marriage |
//! |-----------|-----------|-------|----------|
//! | Proposer | Student | Worker | Suitor |
//! | Responder | College | Firm | Reviewer |
//! | Capacity | Seats | Positions | 1 |
//! | Matching | Enrollment | Hiring Plan | Pairing |

mod market;
mod matching;

pub use market::{Market, Side, UNMATCHED};
pub use matching::Matching;
