//! Insertion-ordered name→value attribute map.

use indexmap::IndexMap;

/// An ordered mapping of attribute names to opaque string values.
///
/// Values are never interpreted by the matching engine itself; they are only
/// ever handed to policy-supplied matchers. Iteration yields entries in
/// insertion order, which is what makes attribute processing and result
/// ordering deterministic.
///
/// # Examples
///
/// ```
/// use attrmatch::attributes::Attributes;
///
/// let requested = Attributes::new()
///     .with("os", "linux")
///     .with("arch", "x64");
///
/// assert_eq!(requested.get("os"), Some("linux"));
/// assert_eq!(requested.names().collect::<Vec<_>>(), vec!["os", "arch"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds an attribute, builder-style. Re-inserting a name overwrites the
    /// value but keeps the name's original position.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Returns the value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns `true` if `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates attribute names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl<N: Into<String>, V: Into<String>, const K: usize> From<[(N, V); K]> for Attributes {
    fn from(pairs: [(N, V); K]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let attrs = Attributes::new()
            .with("zeta", "1")
            .with("alpha", "2")
            .with("mid", "3");

        let names: Vec<&str> = attrs.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let attrs = Attributes::new()
            .with("a", "1")
            .with("b", "2")
            .with("a", "updated");

        assert_eq!(attrs.get("a"), Some("updated"));
        let names: Vec<&str> = attrs.names().collect();
        assert_eq!(names, vec!["a", "b"], "overwrite must not move the name");
    }

    #[test]
    fn test_get_and_contains() {
        let attrs = Attributes::from([("os", "linux")]);
        assert!(attrs.contains("os"));
        assert!(!attrs.contains("arch"));
        assert_eq!(attrs.get("arch"), None);
    }

    #[test]
    fn test_from_iterator() {
        let attrs: Attributes = vec![("k1", "v1"), ("k2", "v2")].into_iter().collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("k2"), Some("v2"));
    }

    #[test]
    fn test_empty() {
        let attrs = Attributes::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.len(), 0);
        assert_eq!(attrs.iter().count(), 0);
    }
}
