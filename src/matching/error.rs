//! Engine error type.

use thiserror::Error;

/// Configuration defects surfaced by the matching engine.
///
/// "No compatible candidate" and "multiple equally good candidates" are NOT
/// errors — they are valid results (empty and multi-element, respectively)
/// left to the caller to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The policy supplied no matcher for a requested attribute name.
    ///
    /// This is a caller/policy bug, not a data condition, and is never
    /// silently treated as "no match".
    #[error("no matcher configured for attribute `{name}`")]
    UnconfiguredAttribute {
        /// The attribute name the policy failed to resolve.
        name: String,
    },
}
