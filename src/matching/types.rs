//! Candidate representation.

use crate::attributes::Attributes;

/// One selectable option: an opaque identity paired with its attributes.
///
/// The identity type `T` is entirely the caller's — a configuration name,
/// an index into a graph, a rich struct. The engine only ever hands
/// references to it back out.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate<T> {
    /// Caller-defined identity, returned in the result.
    pub id: T,
    /// The candidate's own attribute map.
    pub attributes: Attributes,
}

impl<T> Candidate<T> {
    /// Creates a candidate.
    pub fn new(id: T, attributes: Attributes) -> Self {
        Self { id, attributes }
    }
}
