//! Configuration problems reported by validation.

use thiserror::Error;

/// A configuration that is legal but cannot behave as written.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("transition '{state}' --{event}--> '{target}' is unreachable: an earlier unguarded transition for the same event always wins")]
    ShadowedTransition {
        state: String,
        event: String,
        target: String,
    },

    #[error("state '{state}' is a sub-state of '{parent}', which was never configured")]
    UnknownParent { state: String, parent: String },
}
