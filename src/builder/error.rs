//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state), .initial_with(f) or .delegated(get, set) before .build()")]
    MissingInitialState,

    #[error("A change listener needs machine-owned state. Use .on_state(f) with delegated state")]
    ChangeListenerRequiresOwnedState,

    #[error("A state listener needs delegated state. Use .on_change(f) with machine-owned state")]
    StateListenerRequiresDelegatedState,
}
