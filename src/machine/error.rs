//! Errors surfaced by `fire`.

use crate::core::HookError;
use std::fmt;
use thiserror::Error;

/// Which hook list was running when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    Entry,
    Exit,
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry => f.write_str("entry"),
            Self::Exit => f.write_str("exit"),
        }
    }
}

/// Errors that can occur while firing an event.
///
/// A failed `fire` gives no rollback: exit hooks may have run and, for an
/// entry failure, the new state has already been written.
#[derive(Debug, Error)]
pub enum FireError {
    #[error("{phase} hook failed in state '{state}': {source}")]
    Hook {
        phase: HookPhase,
        state: String,
        #[source]
        source: HookError,
    },
}

impl FireError {
    /// The phase whose hook failed.
    pub fn phase(&self) -> HookPhase {
        match self {
            FireError::Hook { phase, .. } => *phase,
        }
    }
}
