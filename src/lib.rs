//! Configuration-attribute matching engine.
//!
//! The disambiguation core a dependency resolver needs when one module
//! offers several variants ("configurations") and the consumer's request
//! must pick among them. Given an ordered set of requested attributes, a
//! collection of attributed candidates, and a policy that classifies each
//! attribute as required or optional and scores value compatibility, the
//! engine returns the candidates that satisfy the request best:
//!
//! - **0 results**: no candidate is compatible
//! - **1 result**: unique winner
//! - **N results**: genuine ambiguity, reported rather than broken
//!
//! # Architecture
//!
//! Three layers, each a seam the caller can replace:
//!
//! - [`attributes`]: insertion-ordered name→value maps (ordering drives
//!   both processing order and deterministic tie reporting).
//! - [`policy`]: the [`AttributeMatcher`](policy::AttributeMatcher) /
//!   [`MatchPolicy`](policy::MatchPolicy) traits, plus a stock registry
//!   and matchers.
//! - [`matching`]: the two-phase filter-and-score engine itself.
//!
//! The engine is pure and synchronous: no I/O, no shared state, all
//! working structures scoped to a single call. It contains no knowledge of
//! dependency graphs, conflict resolution, or attribute semantics — those
//! live in the consuming resolution layer.
//!
//! # Examples
//!
//! ```
//! use attrmatch::attributes::Attributes;
//! use attrmatch::matching::{find_best_matches, Candidate};
//! use attrmatch::policy::{FnMatcher, MatcherRegistry};
//!
//! let policy = MatcherRegistry::new()
//!     .with_exact("os")
//!     .with_matcher("arch", FnMatcher::optional(|req: &str, cand: &str| {
//!         if req == cand { 0 } else if cand == "universal" { 1 } else { -1 }
//!     }));
//!
//! let requested = Attributes::from([("os", "linux"), ("arch", "x64")]);
//! let candidates = vec![
//!     Candidate::new("fat-binary", Attributes::from([("os", "linux"), ("arch", "universal")])),
//!     Candidate::new("native", Attributes::from([("os", "linux"), ("arch", "x64")])),
//! ];
//!
//! let winners = find_best_matches(&policy, &requested, &candidates)?;
//! assert_eq!(winners, vec![&"native"]);
//! # Ok::<(), attrmatch::matching::MatchError>(())
//! ```

pub mod attributes;
pub mod matching;
pub mod policy;
