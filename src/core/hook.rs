//! Entry and exit hooks attached to states.
//!
//! Hooks run synchronously inside `fire`. Each receives the sub-state flag,
//! the fire data and the state it is attached to. A hook that returns an
//! error aborts the transition in progress.

use thiserror::Error;

/// Failure reported by an entry or exit hook.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct HookError {
    message: String,
}

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Type alias for hook callbacks.
///
/// Arguments are `(is_sub_state, data, state)`.
pub type HookFn<S, D> = Box<dyn FnMut(bool, &D, &S) -> Result<(), HookError>>;

struct HookEntry<S, D> {
    name: Option<String>,
    callback: HookFn<S, D>,
}

/// Ordered list of hooks, optionally keyed by name.
///
/// Unnamed hooks are appended. Adding a hook under a name that is already
/// present drops the old hook and appends the new one at the end.
pub struct HookList<S, D> {
    entries: Vec<HookEntry<S, D>>,
}

impl<S, D> HookList<S, D> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, callback: HookFn<S, D>) {
        self.entries.push(HookEntry {
            name: None,
            callback,
        });
    }

    pub fn push_named(&mut self, name: impl Into<String>, callback: HookFn<S, D>) {
        let name = name.into();
        self.entries
            .retain(|entry| entry.name.as_deref() != Some(name.as_str()));
        self.entries.push(HookEntry {
            name: Some(name),
            callback,
        });
    }

    /// Run every hook in registration order, stopping at the first failure.
    pub fn run(&mut self, is_sub_state: bool, data: &D, state: &S) -> Result<(), HookError> {
        for entry in &mut self.entries {
            (entry.callback)(is_sub_state, data, state)?;
        }
        Ok(())
    }

    /// Hook names in registration order; `None` marks an unnamed hook.
    pub fn names(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.entries.iter().map(|entry| entry.name.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, D> Default for HookList<S, D> {
    fn default() -> Self {
        Self::new()
    }
}
