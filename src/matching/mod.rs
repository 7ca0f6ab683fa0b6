//! Candidate selection engine.
//!
//! # Algorithm
//!
//! 1. Partition the requested attribute names into required and optional,
//!    in enumeration order.
//! 2. **Required phase**: for each required attribute, eliminate every
//!    candidate that lacks the attribute or whose matcher scores it
//!    negative; accumulate non-negative scores per candidate.
//! 3. Resolve: an empty or singleton working set, or a unique minimum
//!    aggregate score, ends the call.
//! 4. **Optional phase**: same elimination-and-scoring procedure over the
//!    optional attributes, aggregates carried over.
//! 5. Resolve again; candidates still tied are returned together as an
//!    explicit ambiguous result.
//!
//! Result cardinality communicates the outcome: zero entries means no
//! candidate satisfies the requirements, one entry is a unique winner, and
//! more than one is unresolved ambiguity. The engine never arbitrarily
//! breaks a true tie; interpreting cardinality is the caller's job.

mod engine;
mod error;
mod types;

pub use engine::find_best_matches;
pub use error::MatchError;
pub use types::Candidate;
