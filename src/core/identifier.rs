//! Identifier trait shared by states and events.
//!
//! States and events are opaque values: the machine only compares them,
//! hashes them as lookup keys and displays them in logs and diagrams.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for state and event identifiers.
///
/// Implemented automatically for every type that is cloneable, comparable,
/// hashable and printable, so `&'static str`, `String`, integers and enums
/// generated by [`fsm_ids!`](crate::fsm_ids) all work out of the box.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into transitions and notifications
/// - `Eq` + `Hash`: identifiers key the state registry
/// - `Debug`: identifiers show up in diagnostics
/// - `Display`: identifiers are rendered in logs and DOT output
///
/// # Example
///
/// ```rust
/// use statenest::core::Identifier;
///
/// fn label<I: Identifier>(id: &I) -> String {
///     id.to_string()
/// }
///
/// assert_eq!(label(&"off-hook"), "off-hook");
/// assert_eq!(label(&42u32), "42");
/// ```
pub trait Identifier: Clone + Eq + Hash + Debug + Display {}

impl<T> Identifier for T where T: Clone + Eq + Hash + Debug + Display {}
