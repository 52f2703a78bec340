//! Hierarchical state machine that resolves events and runs hooks.

use crate::core::{HookError, Identifier};
use crate::graph::{StateConfig, StateGraph};
use crate::machine::error::{FireError, HookPhase};
use crate::machine::store::{DelegatedState, OwnedState, StateStore};
use std::collections::HashSet;
use std::fmt::Display;

/// Result of firing an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FireOutcome<S> {
    /// The machine moved to a new state.
    Transitioned { from: S, to: S, is_sub_state: bool },

    /// A transition matched but targets the current state; nothing ran.
    SelfTransition { state: S },

    /// No transition matched on the current state or any ancestor.
    Unhandled,
}

impl<S> FireOutcome<S> {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Details of a completed transition, passed to change listeners.
#[derive(Debug)]
pub struct StateChange<'a, S, E, D> {
    pub to: &'a S,
    pub event: &'a E,
    pub from: &'a S,
    pub is_sub_state: bool,
    pub data: &'a D,
}

/// Listener for owned-state machines, told about every transition.
pub type ChangeListener<S, E, D> = Box<dyn for<'a> FnMut(&StateChange<'a, S, E, D>)>;

/// Listener for delegated-state machines, told only the new state.
pub type StateListener<S> = Box<dyn FnMut(&S)>;

pub(crate) enum Listener<S, E, D> {
    None,
    Change(ChangeListener<S, E, D>),
    State(StateListener<S>),
}

/// Hierarchical finite state machine.
///
/// `S` is the state identifier, `E` the event identifier (defaults to `S`)
/// and `D` the data passed to guards and hooks when firing (defaults to `()`).
///
/// # Example
///
/// ```rust
/// use statenest::{FireOutcome, StateMachine};
///
/// let mut light = StateMachine::<&str>::new("off");
///
/// light.configure("off").permit("turn-on", "red");
/// light.configure("on").permit("turn-off", "off");
/// light
///     .configure("red")
///     .sub_state_of("on")
///     .unwrap()
///     .permit("tick", "green");
///
/// light.fire("turn-on").unwrap();
/// assert_eq!(light.current_state(), "red");
/// assert!(light.is_in_state(&"on"));
///
/// // "red" does not handle "turn-off" itself; its parent "on" does.
/// let outcome = light.fire("turn-off").unwrap();
/// assert!(outcome.is_transitioned());
/// assert_eq!(light.current_state(), "off");
/// ```
pub struct StateMachine<S, E = S, D = ()> {
    graph: StateGraph<S, E, D>,
    store: Box<dyn StateStore<S>>,
    listener: Listener<S, E, D>,
}

impl<S, E, D> StateMachine<S, E, D>
where
    S: Identifier + 'static,
    E: Identifier,
{
    /// Create a machine that owns its state, starting at `initial`.
    pub fn new(initial: S) -> Self {
        Self::assemble(Box::new(OwnedState::new(initial)), Listener::None)
    }

    /// Create a machine that owns its state, evaluating `producer` once.
    pub fn from_producer<F>(producer: F) -> Self
    where
        F: FnOnce() -> S,
    {
        Self::assemble(Box::new(OwnedState::from_producer(producer)), Listener::None)
    }

    /// Create an owned-state machine that reports every transition to `listener`.
    pub fn with_change_listener<F>(initial: S, listener: F) -> Self
    where
        F: for<'a> FnMut(&StateChange<'a, S, E, D>) + 'static,
    {
        Self::assemble(
            Box::new(OwnedState::new(initial)),
            Listener::Change(Box::new(listener)),
        )
    }

    /// Create a machine whose state lives behind `getter` and `setter`.
    pub fn delegated<G, W>(getter: G, setter: W) -> Self
    where
        G: Fn() -> S + 'static,
        W: FnMut(S) + 'static,
    {
        Self::assemble(Box::new(DelegatedState::new(getter, setter)), Listener::None)
    }

    /// Delegated machine that reports each new state to `listener`.
    ///
    /// The listener is called once right away with the initial state.
    pub fn delegated_with_listener<G, W, F>(getter: G, setter: W, listener: F) -> Self
    where
        G: Fn() -> S + 'static,
        W: FnMut(S) + 'static,
        F: FnMut(&S) + 'static,
    {
        Self::assemble(
            Box::new(DelegatedState::new(getter, setter)),
            Listener::State(Box::new(listener)),
        )
    }

    /// Create a machine over a custom state store.
    pub fn with_store<T>(store: T) -> Self
    where
        T: StateStore<S> + 'static,
    {
        Self::assemble(Box::new(store), Listener::None)
    }

    pub(crate) fn assemble(store: Box<dyn StateStore<S>>, mut listener: Listener<S, E, D>) -> Self {
        let initial = store.get();
        let mut graph = StateGraph::new();
        graph.get_or_create(&initial);

        if let Listener::State(notify) = &mut listener {
            notify(&initial);
        }

        Self {
            graph,
            store,
            listener,
        }
    }

    /// Start or continue configuring `state`.
    pub fn configure(&mut self, state: S) -> StateConfig<'_, S, E, D> {
        StateConfig::new(&mut self.graph, state)
    }

    /// Fire `event` with default data.
    pub fn fire(&mut self, event: E) -> Result<FireOutcome<S>, FireError>
    where
        D: Default,
    {
        let data = D::default();
        self.fire_with(event, &data)
    }

    /// Fire `event`, passing `data` to guards, hooks and the change listener.
    ///
    /// The current state is tried first, then each ancestor in turn. An event
    /// nothing handles is not an error and leaves the machine untouched.
    pub fn fire_with(&mut self, event: E, data: &D) -> Result<FireOutcome<S>, FireError> {
        let current = self.store.get();
        let target = self
            .graph
            .ancestors(&current)
            .find_map(|state| self.graph.transition(state, &event, data))
            .map(|transition| transition.target().clone());

        match target {
            Some(target) => self.transition(current, event, target, data),
            None => {
                tracing::trace!("event '{}' not handled in state '{}'", event, current);
                Ok(FireOutcome::Unhandled)
            }
        }
    }

    fn transition(
        &mut self,
        from: S,
        event: E,
        to: S,
        data: &D,
    ) -> Result<FireOutcome<S>, FireError> {
        if from == to {
            tracing::trace!("suppressed self transition on '{}' in '{}'", event, from);
            return Ok(FireOutcome::SelfTransition { state: from });
        }

        let is_sub_state = self.graph.is_within(&from, &to);

        self.graph
            .get_or_create(&from)
            .run_exit(is_sub_state, data)
            .map_err(|source| hook_failure(HookPhase::Exit, &from, source))?;

        self.store.set(to.clone());

        self.graph
            .get_or_create(&to)
            .run_entry(is_sub_state, data)
            .map_err(|source| hook_failure(HookPhase::Entry, &to, source))?;

        match &mut self.listener {
            Listener::Change(notify) => notify(&StateChange {
                to: &to,
                event: &event,
                from: &from,
                is_sub_state,
                data,
            }),
            Listener::State(notify) => notify(&to),
            Listener::None => {}
        }

        tracing::debug!(
            "transitioned '{}' -> '{}' on '{}' (sub-state: {})",
            from,
            to,
            event,
            is_sub_state
        );

        Ok(FireOutcome::Transitioned {
            from,
            to,
            is_sub_state,
        })
    }

    /// The current state, read through the state store.
    pub fn current_state(&self) -> S {
        self.store.get()
    }

    /// True when `state` is the current state or one of its ancestors.
    pub fn is_in_state(&self, state: &S) -> bool {
        let current = self.store.get();
        self.graph.is_within(&current, state)
    }

    /// Events with a transition on the current state or any ancestor.
    ///
    /// Guards are not evaluated, so this lists events that may be accepted,
    /// nearest state first, without duplicates.
    pub fn permitted_events(&self) -> Vec<E> {
        let current = self.store.get();
        let mut seen = HashSet::new();
        let mut events = Vec::new();

        for state in self.graph.ancestors(&current) {
            let Some(node) = self.graph.node(state) else {
                continue;
            };
            for event in node.events() {
                if seen.insert(event) {
                    events.push(event.clone());
                }
            }
        }

        events
    }

    /// The configured state graph.
    pub fn graph(&self) -> &StateGraph<S, E, D> {
        &self.graph
    }
}

fn hook_failure<S: Display>(phase: HookPhase, state: &S, source: HookError) -> FireError {
    tracing::warn!("{} hook failed in state '{}': {}", phase, state, source);
    FireError::Hook {
        phase,
        state: state.to_string(),
        source,
    }
}
