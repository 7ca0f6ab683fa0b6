//! Stock policy implementation and matchers.

use indexmap::IndexMap;

use super::types::{AttributeMatcher, MatchPolicy};

/// Exact string equality: `0` on match, `-1` otherwise.
#[derive(Debug, Clone, Copy)]
pub struct ExactMatcher {
    required: bool,
}

impl ExactMatcher {
    /// A required exact matcher.
    pub fn required() -> Self {
        Self { required: true }
    }

    /// An optional exact matcher.
    pub fn optional() -> Self {
        Self { required: false }
    }
}

impl AttributeMatcher for ExactMatcher {
    fn is_required(&self) -> bool {
        self.required
    }

    fn score(&self, requested: &str, candidate: &str) -> i32 {
        if requested == candidate {
            0
        } else {
            -1
        }
    }
}

/// Closure-backed matcher for ad-hoc scoring policies.
///
/// # Examples
///
/// ```
/// use attrmatch::policy::{AttributeMatcher, FnMatcher};
///
/// // Prefer the exact architecture, accept "universal" at a distance of 1.
/// let arch = FnMatcher::optional(|requested: &str, candidate: &str| {
///     if requested == candidate { 0 }
///     else if candidate == "universal" { 1 }
///     else { -1 }
/// });
///
/// assert_eq!(arch.score("x64", "universal"), 1);
/// assert_eq!(arch.score("x64", "arm64"), -1);
/// ```
pub struct FnMatcher<F> {
    required: bool,
    score_fn: F,
}

impl<F: Fn(&str, &str) -> i32 + Send + Sync> FnMatcher<F> {
    /// A required matcher backed by `score_fn`.
    pub fn required(score_fn: F) -> Self {
        Self {
            required: true,
            score_fn,
        }
    }

    /// An optional matcher backed by `score_fn`.
    pub fn optional(score_fn: F) -> Self {
        Self {
            required: false,
            score_fn,
        }
    }
}

impl<F: Fn(&str, &str) -> i32 + Send + Sync> AttributeMatcher for FnMatcher<F> {
    fn is_required(&self) -> bool {
        self.required
    }

    fn score(&self, requested: &str, candidate: &str) -> i32 {
        (self.score_fn)(requested, candidate)
    }
}

/// Builder-style ordered registry of named matchers.
///
/// # Examples
///
/// ```
/// use attrmatch::policy::{FnMatcher, MatcherRegistry, MatchPolicy};
///
/// let policy = MatcherRegistry::new()
///     .with_exact("os")
///     .with_matcher("arch", FnMatcher::optional(|req: &str, cand: &str| {
///         if req == cand { 0 } else { -1 }
///     }));
///
/// assert!(policy.attribute_matcher("os").is_some());
/// assert!(policy.attribute_matcher("flavor").is_none());
/// ```
#[derive(Default)]
pub struct MatcherRegistry {
    matchers: IndexMap<String, Box<dyn AttributeMatcher>>,
}

impl MatcherRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            matchers: IndexMap::new(),
        }
    }

    /// Registers a matcher for `name`.
    pub fn with_matcher<M: AttributeMatcher + 'static>(
        mut self,
        name: impl Into<String>,
        matcher: M,
    ) -> Self {
        self.matchers.insert(name.into(), Box::new(matcher));
        self
    }

    /// Registers a required exact-equality matcher for `name`.
    pub fn with_exact(self, name: impl Into<String>) -> Self {
        self.with_matcher(name, ExactMatcher::required())
    }

    /// Registers an optional exact-equality matcher for `name`.
    pub fn with_optional_exact(self, name: impl Into<String>) -> Self {
        self.with_matcher(name, ExactMatcher::optional())
    }

    /// Number of registered matchers.
    pub fn matcher_count(&self) -> usize {
        self.matchers.len()
    }
}

impl MatchPolicy for MatcherRegistry {
    fn attribute_matcher(&self, name: &str) -> Option<&dyn AttributeMatcher> {
        self.matchers.get(name).map(|m| m.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher_scores() {
        let m = ExactMatcher::required();
        assert_eq!(m.score("linux", "linux"), 0);
        assert_eq!(m.score("linux", "windows"), -1);
        assert!(m.is_required());
        assert!(!ExactMatcher::optional().is_required());
    }

    #[test]
    fn test_fn_matcher_flag_and_score() {
        let m = FnMatcher::required(|req: &str, cand: &str| if req == cand { 0 } else { 2 });
        assert!(m.is_required());
        assert_eq!(m.score("a", "a"), 0);
        assert_eq!(m.score("a", "b"), 2);
    }

    #[test]
    fn test_registry_lookup() {
        let policy = MatcherRegistry::new()
            .with_exact("os")
            .with_optional_exact("arch");

        assert!(policy.attribute_matcher("os").unwrap().is_required());
        assert!(!policy.attribute_matcher("arch").unwrap().is_required());
        assert!(policy.attribute_matcher("missing").is_none());
        assert_eq!(policy.matcher_count(), 2);
    }

    #[test]
    fn test_registry_reregister_replaces() {
        let policy = MatcherRegistry::new()
            .with_exact("os")
            .with_optional_exact("os");

        assert_eq!(policy.matcher_count(), 1);
        assert!(!policy.attribute_matcher("os").unwrap().is_required());
    }
}
