//! Core traits for attribute matching policies.

/// Compatibility and preference scoring for one attribute name.
///
/// # Scoring contract
///
/// `score(requested, candidate)` returns an integer distance:
///
/// - negative → incompatible; the candidate is eliminated outright
/// - `0` → exact match
/// - positive → compatible but imperfect; lower is strictly preferred
///
/// Scores for all attributes processed during a call are summed into a
/// per-candidate aggregate; the lowest aggregate wins when unique.
///
/// # Examples
///
/// ```ignore
/// // A matcher that tolerates a fallback value at a cost of 1.
/// struct JavaVersion;
///
/// impl AttributeMatcher for JavaVersion {
///     fn is_required(&self) -> bool { true }
///     fn score(&self, requested: &str, candidate: &str) -> i32 {
///         if requested == candidate { 0 }
///         else if candidate == "any" { 1 }
///         else { -1 }
///     }
/// }
/// ```
pub trait AttributeMatcher: Send + Sync {
    /// Whether this attribute participates in the required phase.
    ///
    /// Required attributes are applied first, and a unique winner after the
    /// required phase short-circuits optional processing entirely. Note that
    /// `false` here does **not** exempt candidates from elimination: a
    /// candidate missing an optional attribute, or scoring negative on it,
    /// is dropped during the optional phase exactly as a required attribute
    /// would drop it. The flag controls processing order and early
    /// resolution, nothing else.
    fn is_required(&self) -> bool;

    /// Scores a candidate value against the requested value.
    fn score(&self, requested: &str, candidate: &str) -> i32;
}

/// Resolves attribute names to their matchers.
///
/// The policy must supply a matcher for every name in the requested
/// attribute set; `None` is treated by the engine as a configuration defect
/// ([`MatchError::UnconfiguredAttribute`](crate::matching::MatchError)),
/// never as "no match".
pub trait MatchPolicy: Send + Sync {
    /// Returns the matcher registered for `name`, if any.
    fn attribute_matcher(&self, name: &str) -> Option<&dyn AttributeMatcher>;
}
