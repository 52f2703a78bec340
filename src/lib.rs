//! Statenest: a hierarchical finite state machine
//!
//! States and events are plain identifiers. Transitions are declared per
//! state, optionally gated by guards over the data passed to `fire`. States
//! can be nested: an event a sub-state does not handle bubbles up to its
//! parent chain, and a sub-state's own transitions shadow its ancestors'.
//!
//! # Core Concepts
//!
//! - **Transitions**: `(state, event) -> target`, tried in declaration order
//! - **Guards**: predicates over fire data that gate a transition
//! - **Sub-states**: single-parent nesting with event bubbling
//! - **Hooks**: entry/exit callbacks told whether the move stays within a
//!   containing state
//! - **Storage**: the current state is owned by the machine or delegated to
//!   external getter/setter callbacks
//!
//! # Example
//!
//! ```rust
//! use statenest::StateMachine;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let started = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&started);
//!
//! let mut phone = StateMachine::<&str, &str, String>::new("off-hook");
//!
//! phone
//!     .configure("off-hook")
//!     .permit_if_labeled("call-dialed", "ringing", "Number is valid", |n: &String| {
//!         n.starts_with("123")
//!     })
//!     .permit_if_labeled("call-dialed", "beeping", "Number is in-valid", |n: &String| {
//!         !n.starts_with("123")
//!     });
//!
//! phone
//!     .configure("ringing")
//!     .permit("call-connected", "connected");
//!
//! phone
//!     .configure("connected")
//!     .on_entry(move |is_sub_state, _, _| {
//!         if !is_sub_state {
//!             counter.set(counter.get() + 1);
//!         }
//!         Ok(())
//!     })
//!     .permit("place-on-hold", "on-hold");
//!
//! phone
//!     .configure("on-hold")
//!     .sub_state_of("connected")
//!     .unwrap()
//!     .permit("call-connected", "connected");
//!
//! phone.fire_with("call-dialed", &"123-4567".to_string()).unwrap();
//! phone.fire("call-connected").unwrap();
//! phone.fire("place-on-hold").unwrap();
//! assert!(phone.is_in_state(&"connected"));
//!
//! // Returning from hold re-enters "connected" as a sub-state move.
//! phone.fire("call-connected").unwrap();
//! assert_eq!(started.get(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod diagram;
pub mod graph;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Guard, HookError, Identifier, Transition};
pub use diagram::MachineDescription;
pub use graph::{ConfigError, StateConfig, StateGraph};
pub use machine::{FireError, FireOutcome, HookPhase, StateChange, StateMachine};
pub use validation::ConfigViolation;
