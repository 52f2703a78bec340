//! Core building blocks of the state machine.
//!
//! This module contains the leaf types every other layer is assembled from:
//! - Identifier bound shared by states and events
//! - Guard predicates over fire data
//! - Immutable transitions and per-event transition tables
//! - Ordered, optionally named entry/exit hooks

mod guard;
mod hook;
mod identifier;
mod transition;

pub use guard::Guard;
pub use hook::{HookError, HookFn, HookList};
pub use identifier::Identifier;
pub use transition::{EventTransitions, Transition};
