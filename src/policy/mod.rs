//! Matching policy seam.
//!
//! The engine never compares attribute values itself. Everything
//! value-related goes through two traits:
//!
//! - [`AttributeMatcher`]: required/optional flag plus the scoring function
//!   for a single attribute name.
//! - [`MatchPolicy`]: resolves an attribute name to its matcher.
//!
//! Callers with their own policy objects implement these directly.
//! [`MatcherRegistry`] is the stock implementation: a builder-style ordered
//! registry of named matchers, with [`ExactMatcher`] and [`FnMatcher`]
//! covering the common cases.

mod registry;
mod types;

pub use registry::{ExactMatcher, FnMatcher, MatcherRegistry};
pub use types::{AttributeMatcher, MatchPolicy};
