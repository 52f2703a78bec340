//! Configuration of a single state.

use crate::core::{EventTransitions, Guard, HookError, HookFn, HookList, Identifier, Transition};

/// One state's transitions, hooks and parent link.
pub struct StateNode<S, E, D> {
    state: S,
    events: Vec<EventTransitions<S, E, D>>,
    entry_hooks: HookList<S, D>,
    exit_hooks: HookList<S, D>,
    parent: Option<S>,
}

impl<S: Identifier, E: Identifier, D> StateNode<S, E, D> {
    /// Create a node with no transitions, hooks or parent.
    pub fn new(state: S) -> Self {
        Self {
            state,
            events: Vec::new(),
            entry_hooks: HookList::new(),
            exit_hooks: HookList::new(),
            parent: None,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&S> {
        self.parent.as_ref()
    }

    pub(crate) fn set_parent(&mut self, parent: S) {
        self.parent = Some(parent);
    }

    /// Append an unconditional transition for `event`.
    pub fn permit(&mut self, event: E, target: S) {
        let transition = Transition::new(self.state.clone(), event.clone(), target);
        self.event_table(event).push(transition);
    }

    /// Append a guarded transition for `event`.
    pub fn permit_guarded(&mut self, event: E, target: S, guard: Guard<D>, label: Option<String>) {
        let transition =
            Transition::guarded(self.state.clone(), event.clone(), target, guard, label);
        self.event_table(event).push(transition);
    }

    pub fn add_entry_hook(&mut self, name: Option<String>, hook: HookFn<S, D>) {
        match name {
            Some(name) => self.entry_hooks.push_named(name, hook),
            None => self.entry_hooks.push(hook),
        }
    }

    pub fn add_exit_hook(&mut self, name: Option<String>, hook: HookFn<S, D>) {
        match name {
            Some(name) => self.exit_hooks.push_named(name, hook),
            None => self.exit_hooks.push(hook),
        }
    }

    /// First transition declared on this node for `event` whose guard admits `data`.
    ///
    /// Parents are not consulted.
    pub fn transition(&self, event: &E, data: &D) -> Option<&Transition<S, E, D>> {
        self.events
            .iter()
            .find(|table| table.event() == event)
            .and_then(|table| table.select(data))
    }

    /// Events with at least one transition, in first-permit order.
    pub fn events(&self) -> impl Iterator<Item = &E> + '_ {
        self.events
            .iter()
            .filter(|table| !table.is_empty())
            .map(|table| table.event())
    }

    /// Every transition on this node, grouped by event in first-permit order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<S, E, D>> + '_ {
        self.events.iter().flat_map(|table| table.transitions())
    }

    pub fn event_tables(&self) -> &[EventTransitions<S, E, D>] {
        &self.events
    }

    pub fn entry_hooks(&self) -> &HookList<S, D> {
        &self.entry_hooks
    }

    pub fn exit_hooks(&self) -> &HookList<S, D> {
        &self.exit_hooks
    }

    pub(crate) fn run_entry(&mut self, is_sub_state: bool, data: &D) -> Result<(), HookError> {
        self.entry_hooks.run(is_sub_state, data, &self.state)
    }

    pub(crate) fn run_exit(&mut self, is_sub_state: bool, data: &D) -> Result<(), HookError> {
        self.exit_hooks.run(is_sub_state, data, &self.state)
    }

    fn event_table(&mut self, event: E) -> &mut EventTransitions<S, E, D> {
        let index = match self.events.iter().position(|table| *table.event() == event) {
            Some(index) => index,
            None => {
                self.events.push(EventTransitions::new(event));
                self.events.len() - 1
            }
        };
        &mut self.events[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Node = StateNode<&'static str, u8, ()>;

    #[test]
    fn new_node_is_empty() {
        let node = Node::new("state");

        assert_eq!(node.state(), &"state");
        assert!(node.parent().is_none());
        assert!(node.event_tables().is_empty());
        assert!(node.entry_hooks().is_empty());
        assert!(node.exit_hooks().is_empty());
    }

    #[test]
    fn permit_groups_transitions_by_event() {
        let mut node = Node::new("state");
        node.permit(1, "one");
        node.permit(2, "two");
        node.permit(1, "uno");

        let targets: Vec<_> = node.transitions().map(|t| *t.target()).collect();
        assert_eq!(targets, vec!["one", "uno", "two"]);
        assert_eq!(node.events().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn transition_looks_up_by_event() {
        let mut node = Node::new("state");
        node.permit(1, "11");
        node.permit(2, "22");

        let transition = node.transition(&2, &()).unwrap();
        assert_eq!(transition.source(), &"state");
        assert_eq!(transition.event(), &2);
        assert_eq!(transition.target(), &"22");
        assert!(node.transition(&3, &()).is_none());
    }

    #[test]
    fn guarded_transition_is_skipped_when_rejected() {
        let mut node = Node::new("state");
        node.permit_guarded(1, "never", Guard::new(|_: &()| false), None);
        node.permit(1, "fallback");

        assert_eq!(node.transition(&1, &()).map(|t| *t.target()), Some("fallback"));
    }

    #[test]
    fn parent_can_be_set() {
        let mut node = Node::new("state");
        node.set_parent("parent");

        assert_eq!(node.parent(), Some(&"parent"));
    }

    #[test]
    fn entry_and_exit_hooks_receive_own_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut node = Node::new("state");

        let entry_log = Rc::clone(&seen);
        node.add_entry_hook(
            None,
            Box::new(move |sub: bool, _: &(), state: &&'static str| {
                entry_log.borrow_mut().push(format!("entry {state} {sub}"));
                Ok(())
            }),
        );
        let exit_log = Rc::clone(&seen);
        node.add_exit_hook(
            Some("named".to_string()),
            Box::new(move |sub: bool, _: &(), state: &&'static str| {
                exit_log.borrow_mut().push(format!("exit {state} {sub}"));
                Ok(())
            }),
        );

        node.run_entry(false, &()).unwrap();
        node.run_exit(true, &()).unwrap();

        assert_eq!(*seen.borrow(), vec!["entry state false", "exit state true"]);
        assert_eq!(node.exit_hooks().names().collect::<Vec<_>>(), vec![Some("named")]);
        assert_eq!(node.entry_hooks().len(), 1);
    }
}
