//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::Identifier;
use crate::machine::{
    ChangeListener, DelegatedState, Listener, OwnedState, StateChange, StateListener,
    StateMachine, StateStore,
};

enum Storage<S> {
    Initial(S),
    Producer(Box<dyn FnOnce() -> S>),
    Delegated(DelegatedState<S>),
}

/// Builder for constructing state machines with a fluent API.
///
/// Picks one of the two storage modes and the listener that matches it.
///
/// # Example
///
/// ```rust
/// use statenest::builder::StateMachineBuilder;
///
/// let mut machine = StateMachineBuilder::<&str>::new()
///     .initial("idle")
///     .on_change(|change| println!("{} -> {}", change.from, change.to))
///     .build()
///     .unwrap();
///
/// machine.configure("idle").permit("start", "running");
/// machine.fire("start").unwrap();
/// assert_eq!(machine.current_state(), "running");
/// ```
pub struct StateMachineBuilder<S, E = S, D = ()> {
    storage: Option<Storage<S>>,
    on_change: Option<ChangeListener<S, E, D>>,
    on_state: Option<StateListener<S>>,
}

impl<S, E, D> StateMachineBuilder<S, E, D>
where
    S: Identifier + 'static,
    E: Identifier,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            storage: None,
            on_change: None,
            on_state: None,
        }
    }

    /// Own the state, starting at `state`.
    pub fn initial(mut self, state: S) -> Self {
        self.storage = Some(Storage::Initial(state));
        self
    }

    /// Own the state, starting at whatever `producer` returns at build time.
    pub fn initial_with<F>(mut self, producer: F) -> Self
    where
        F: FnOnce() -> S + 'static,
    {
        self.storage = Some(Storage::Producer(Box::new(producer)));
        self
    }

    /// Keep the state outside the machine, behind `getter` and `setter`.
    pub fn delegated<G, W>(mut self, getter: G, setter: W) -> Self
    where
        G: Fn() -> S + 'static,
        W: FnMut(S) + 'static,
    {
        self.storage = Some(Storage::Delegated(DelegatedState::new(getter, setter)));
        self
    }

    /// Report every transition of an owned-state machine.
    pub fn on_change<F>(mut self, listener: F) -> Self
    where
        F: for<'a> FnMut(&StateChange<'a, S, E, D>) + 'static,
    {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// Report each new state of a delegated machine, starting at build time.
    pub fn on_state<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&S) + 'static,
    {
        self.on_state = Some(Box::new(listener));
        self
    }

    /// Build the state machine.
    /// Returns an error if no storage was chosen or the listener does not fit it.
    pub fn build(self) -> Result<StateMachine<S, E, D>, BuildError> {
        let storage = self.storage.ok_or(BuildError::MissingInitialState)?;
        let delegated = matches!(storage, Storage::Delegated(_));

        if delegated && self.on_change.is_some() {
            return Err(BuildError::ChangeListenerRequiresOwnedState);
        }
        if !delegated && self.on_state.is_some() {
            return Err(BuildError::StateListenerRequiresDelegatedState);
        }

        let store: Box<dyn StateStore<S>> = match storage {
            Storage::Initial(state) => Box::new(OwnedState::new(state)),
            Storage::Producer(producer) => Box::new(OwnedState::from_producer(producer)),
            Storage::Delegated(store) => Box::new(store),
        };

        let listener = match (self.on_change, self.on_state) {
            (Some(listener), _) => Listener::Change(listener),
            (None, Some(listener)) => Listener::State(listener),
            (None, None) => Listener::None,
        };

        Ok(StateMachine::assemble(store, listener))
    }
}

impl<S, E, D> Default for StateMachineBuilder<S, E, D>
where
    S: Identifier + 'static,
    E: Identifier,
{
    fn default() -> Self {
        Self::new()
    }
}
