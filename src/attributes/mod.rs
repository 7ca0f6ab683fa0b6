//! Ordered attribute maps.
//!
//! Both the requested-attribute set and each candidate's own attribute set
//! are name→value maps whose *insertion order* matters: requested attributes
//! are processed in enumeration order, and candidate order breaks nothing —
//! it is preserved all the way into the result. [`Attributes`] wraps an
//! insertion-ordered map to make that ordering explicit.

mod map;

pub use map::Attributes;
