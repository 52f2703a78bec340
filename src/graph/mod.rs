//! Registry of configured states and their hierarchy.
//!
//! The graph keeps nodes in registration order, materializes an empty node
//! the first time an unknown state is looked up mutably, and rejects parent
//! links that would make the hierarchy cyclic.

mod config;
pub mod error;
mod node;

pub use config::StateConfig;
pub use error::ConfigError;
pub use node::StateNode;

use crate::core::{Identifier, Transition};
use std::collections::HashMap;

/// All known states, in the order they were first referenced.
pub struct StateGraph<S, E, D> {
    nodes: Vec<StateNode<S, E, D>>,
    index: HashMap<S, usize>,
}

impl<S: Identifier, E: Identifier, D> StateGraph<S, E, D> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Look up a node without creating it.
    pub fn node(&self, state: &S) -> Option<&StateNode<S, E, D>> {
        self.index.get(state).map(|&i| &self.nodes[i])
    }

    /// Return the node for `state`, creating a blank one if it was never seen.
    pub fn get_or_create(&mut self, state: &S) -> &mut StateNode<S, E, D> {
        let index = match self.index.get(state) {
            Some(&index) => index,
            None => {
                tracing::trace!("materializing state node '{}'", state);
                self.nodes.push(StateNode::new(state.clone()));
                let index = self.nodes.len() - 1;
                self.index.insert(state.clone(), index);
                index
            }
        };
        &mut self.nodes[index]
    }

    /// Set or replace the parent of `state`.
    ///
    /// Fails without touching the graph if `parent` is `state` itself or
    /// one of its descendants.
    pub fn set_parent(&mut self, state: &S, parent: S) -> Result<(), ConfigError> {
        if self.is_within(&parent, state) {
            return Err(ConfigError::ParentCycle {
                state: state.to_string(),
                parent: parent.to_string(),
            });
        }
        self.get_or_create(state).set_parent(parent);
        Ok(())
    }

    /// First transition declared directly on `state` for `event` that admits `data`.
    pub fn transition(&self, state: &S, event: &E, data: &D) -> Option<&Transition<S, E, D>> {
        self.node(state)?.transition(event, data)
    }

    /// Walk from `state` up through its parents, nearest first.
    pub fn ancestors<'a>(&'a self, state: &'a S) -> Ancestors<'a, S, E, D> {
        Ancestors {
            graph: self,
            next: Some(state),
        }
    }

    /// True when `candidate` is `state` or one of its ancestors.
    pub fn is_within(&self, state: &S, candidate: &S) -> bool {
        self.ancestors(state).any(|s| s == candidate)
    }

    /// Nodes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StateNode<S, E, D>> + '_ {
        self.nodes.iter()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: Identifier, E: Identifier, D> Default for StateGraph<S, E, D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a state and its ancestors.
pub struct Ancestors<'a, S, E, D> {
    graph: &'a StateGraph<S, E, D>,
    next: Option<&'a S>,
}

impl<'a, S: Identifier, E: Identifier, D> Iterator for Ancestors<'a, S, E, D> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.graph.node(current).and_then(|node| node.parent());
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Graph = StateGraph<&'static str, &'static str, ()>;

    fn nested() -> Graph {
        let mut graph = Graph::new();
        graph.set_parent(&"child", "parent").unwrap();
        graph.set_parent(&"parent", "root").unwrap();
        graph
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let mut graph = Graph::new();
        graph.get_or_create(&"a").permit("go", "b");
        graph.get_or_create(&"a").permit("back", "c");

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.node(&"a").unwrap().transitions().count(), 2);
    }

    #[test]
    fn node_does_not_create() {
        let graph = Graph::new();

        assert!(graph.node(&"ghost").is_none());
        assert!(graph.is_empty());
    }

    #[test]
    fn permit_does_not_register_target() {
        let mut graph = Graph::new();
        graph.get_or_create(&"a").permit("go", "b");

        assert!(graph.contains(&"a"));
        assert!(!graph.contains(&"b"));
    }

    #[test]
    fn iter_follows_registration_order() {
        let mut graph = Graph::new();
        graph.get_or_create(&"z");
        graph.get_or_create(&"a");
        graph.get_or_create(&"m");
        graph.get_or_create(&"z");

        let order: Vec<_> = graph.iter().map(|n| *n.state()).collect();
        assert_eq!(order, vec!["z", "a", "m"]);
    }

    #[test]
    fn ancestors_walk_nearest_first() {
        let graph = nested();

        let chain: Vec<_> = graph.ancestors(&"child").copied().collect();
        assert_eq!(chain, vec!["child", "parent", "root"]);
    }

    #[test]
    fn ancestors_of_unknown_state_is_just_itself() {
        let graph = Graph::new();

        let chain: Vec<_> = graph.ancestors(&"loose").copied().collect();
        assert_eq!(chain, vec!["loose"]);
    }

    #[test]
    fn is_within_checks_self_and_ancestors() {
        let graph = nested();

        assert!(graph.is_within(&"child", &"child"));
        assert!(graph.is_within(&"child", &"parent"));
        assert!(graph.is_within(&"child", &"root"));
        assert!(!graph.is_within(&"root", &"child"));
        assert!(!graph.is_within(&"child", &"elsewhere"));
    }

    #[test]
    fn self_parent_is_rejected() {
        let mut graph = Graph::new();

        let err = graph.set_parent(&"a", "a").unwrap_err();
        assert_eq!(
            err,
            ConfigError::ParentCycle {
                state: "a".to_string(),
                parent: "a".to_string(),
            }
        );
    }

    #[test]
    fn indirect_cycle_is_rejected_and_previous_parent_kept() {
        let mut graph = nested();
        graph.set_parent(&"root", "top").unwrap();

        assert!(graph.set_parent(&"root", "child").is_err());
        assert_eq!(graph.node(&"root").unwrap().parent(), Some(&"top"));
    }

    #[test]
    fn parent_can_be_reassigned() {
        let mut graph = nested();
        graph.set_parent(&"child", "root").unwrap();

        let chain: Vec<_> = graph.ancestors(&"child").copied().collect();
        assert_eq!(chain, vec!["child", "root"]);
    }

    #[test]
    fn transition_does_not_bubble() {
        let mut graph = nested();
        graph.get_or_create(&"parent").permit("go", "away");

        assert!(graph.transition(&"child", &"go", &()).is_none());
        assert_eq!(
            graph.transition(&"parent", &"go", &()).map(|t| *t.target()),
            Some("away")
        );
    }
}
