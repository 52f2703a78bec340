//! The runtime side of the crate: firing events against a current state.
//!
//! # Key Concepts
//!
//! - **StateMachine**: resolves events through the state hierarchy, runs
//!   exit/entry hooks and notifies listeners
//! - **StateStore**: where the current state lives, owned or delegated
//! - **FireOutcome**: what a call to `fire` did, including the silent cases

mod engine;
pub mod error;
mod store;

pub(crate) use engine::Listener;
pub use engine::{ChangeListener, FireOutcome, StateChange, StateListener, StateMachine};
pub use error::{FireError, HookPhase};
pub use store::{DelegatedState, OwnedState, StateStore};
