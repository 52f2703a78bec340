//! Fluent configuration handle for one state.

use super::error::ConfigError;
use super::StateGraph;
use crate::core::{Guard, HookError, Identifier};

/// Chainable handle returned by `configure`.
///
/// Every call accumulates onto the same node, so a state may be configured
/// across several statements.
///
/// # Example
///
/// ```rust
/// use statenest::StateMachine;
///
/// let mut phone = StateMachine::<&str>::new("connected");
///
/// phone
///     .configure("on-hold")
///     .sub_state_of("connected")
///     .unwrap()
///     .permit("call-connected", "connected");
///
/// phone
///     .configure("connected")
///     .permit("hang-up", "off-hook")
///     .permit("place-on-hold", "on-hold");
///
/// phone.fire("place-on-hold").unwrap();
/// assert!(phone.is_in_state(&"connected"));
/// ```
pub struct StateConfig<'a, S, E, D> {
    graph: &'a mut StateGraph<S, E, D>,
    state: S,
}

impl<'a, S: Identifier, E: Identifier, D> StateConfig<'a, S, E, D> {
    pub(crate) fn new(graph: &'a mut StateGraph<S, E, D>, state: S) -> Self {
        graph.get_or_create(&state);
        Self { graph, state }
    }

    /// The state being configured.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Allow `event` to move this state to `target`.
    pub fn permit(self, event: E, target: S) -> Self {
        self.graph.get_or_create(&self.state).permit(event, target);
        self
    }

    /// Allow `event` to move to `target` when `guard` admits the fire data.
    pub fn permit_if<F>(self, event: E, target: S, guard: F) -> Self
    where
        F: Fn(&D) -> bool + 'static,
    {
        self.graph
            .get_or_create(&self.state)
            .permit_guarded(event, target, Guard::new(guard), None);
        self
    }

    /// Like [`permit_if`](Self::permit_if), with a label shown in diagrams.
    pub fn permit_if_labeled<F>(
        self,
        event: E,
        target: S,
        label: impl Into<String>,
        guard: F,
    ) -> Self
    where
        F: Fn(&D) -> bool + 'static,
    {
        self.graph.get_or_create(&self.state).permit_guarded(
            event,
            target,
            Guard::new(guard),
            Some(label.into()),
        );
        self
    }

    /// Nest this state inside `parent`.
    ///
    /// Events this state does not handle bubble to the parent chain.
    pub fn sub_state_of(self, parent: S) -> Result<Self, ConfigError> {
        self.graph.set_parent(&self.state, parent)?;
        Ok(self)
    }

    /// Run `hook` whenever this state is entered.
    pub fn on_entry<F>(self, hook: F) -> Self
    where
        F: FnMut(bool, &D, &S) -> Result<(), HookError> + 'static,
    {
        self.graph
            .get_or_create(&self.state)
            .add_entry_hook(None, Box::new(hook));
        self
    }

    /// Run `hook` on entry, replacing any earlier entry hook with this name.
    pub fn on_entry_named<F>(self, name: impl Into<String>, hook: F) -> Self
    where
        F: FnMut(bool, &D, &S) -> Result<(), HookError> + 'static,
    {
        self.graph
            .get_or_create(&self.state)
            .add_entry_hook(Some(name.into()), Box::new(hook));
        self
    }

    /// Run `hook` whenever this state is left.
    pub fn on_exit<F>(self, hook: F) -> Self
    where
        F: FnMut(bool, &D, &S) -> Result<(), HookError> + 'static,
    {
        self.graph
            .get_or_create(&self.state)
            .add_exit_hook(None, Box::new(hook));
        self
    }

    /// Run `hook` on exit, replacing any earlier exit hook with this name.
    pub fn on_exit_named<F>(self, name: impl Into<String>, hook: F) -> Self
    where
        F: FnMut(bool, &D, &S) -> Result<(), HookError> + 'static,
    {
        self.graph
            .get_or_create(&self.state)
            .add_exit_hook(Some(name.into()), Box::new(hook));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Graph = StateGraph<&'static str, &'static str, u32>;

    #[test]
    fn configure_creates_node_immediately() {
        let mut graph = Graph::new();
        let config = StateConfig::new(&mut graph, "idle");

        assert_eq!(config.state(), &"idle");
        assert!(graph.contains(&"idle"));
    }

    #[test]
    fn chained_calls_accumulate() {
        let mut graph = Graph::new();
        StateConfig::new(&mut graph, "idle")
            .permit("start", "running")
            .permit_if("boost", "turbo", |n: &u32| *n > 3)
            .permit_if_labeled("boost", "running", "small boost", |_: &u32| true)
            .on_entry(|_, _, _| Ok(()))
            .on_exit_named("cleanup", |_, _, _| Ok(()));
        StateConfig::new(&mut graph, "idle").permit("stop", "stopped");

        let node = graph.node(&"idle").unwrap();
        assert_eq!(node.transitions().count(), 4);
        assert_eq!(node.entry_hooks().len(), 1);
        assert_eq!(node.exit_hooks().names().collect::<Vec<_>>(), vec![Some("cleanup")]);
        assert_eq!(
            graph.transition(&"idle", &"boost", &1).map(|t| *t.target()),
            Some("running")
        );
        assert_eq!(
            graph.transition(&"idle", &"boost", &9).map(|t| *t.target()),
            Some("turbo")
        );
    }

    #[test]
    fn sub_state_of_propagates_cycle_error() {
        let mut graph = Graph::new();
        StateConfig::new(&mut graph, "child")
            .sub_state_of("parent")
            .unwrap();

        let result = StateConfig::new(&mut graph, "parent").sub_state_of("child");
        assert!(matches!(result, Err(ConfigError::ParentCycle { .. })));
    }
}
