//! Diagnostic export of a configured machine.
//!
//! [`MachineDescription`] is a plain, serializable snapshot of the state
//! graph: states in registration order with their transitions, hooks and
//! parent. It renders to Graphviz DOT and to JSON.

use crate::core::Identifier;
use crate::graph::{StateGraph, StateNode};
use crate::machine::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for guarded transitions that were given no name.
pub const DEFAULT_GUARD_LABEL: &str = "condition";

/// Name used for hooks registered without a name.
pub const DEFAULT_HOOK_NAME: &str = "listener";

/// One outgoing transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDescription {
    pub event: String,
    pub target: String,
    /// Guard label; `None` for unguarded transitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<String>,
}

/// One configured state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDescription {
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub transitions: Vec<TransitionDescription>,
    /// Entry hook names in run order; `None` marks an unnamed hook.
    pub entry_hooks: Vec<Option<String>>,
    /// Exit hook names in run order; `None` marks an unnamed hook.
    pub exit_hooks: Vec<Option<String>>,
}

/// Serializable view of a whole state graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDescription {
    pub states: Vec<StateDescription>,
}

impl MachineDescription {
    pub fn from_graph<S: Identifier, E: Identifier, D>(graph: &StateGraph<S, E, D>) -> Self {
        Self {
            states: graph.iter().map(describe_node).collect(),
        }
    }

    /// Render as a Graphviz digraph. Same text as the `Display` impl.
    pub fn to_dot(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn describe_node<S: Identifier, E: Identifier, D>(node: &StateNode<S, E, D>) -> StateDescription {
    StateDescription {
        state: node.state().to_string(),
        parent: node.parent().map(ToString::to_string),
        transitions: node
            .transitions()
            .map(|t| TransitionDescription {
                event: t.event().to_string(),
                target: t.target().to_string(),
                guard: t
                    .is_guarded()
                    .then(|| t.guard_label().unwrap_or(DEFAULT_GUARD_LABEL).to_string()),
            })
            .collect(),
        entry_hooks: node.entry_hooks().names().map(|n| n.map(String::from)).collect(),
        exit_hooks: node.exit_hooks().names().map(|n| n.map(String::from)).collect(),
    }
}

/// Graphviz DOT.
///
/// Transition edges come first. Hook edges follow under a
/// `node [shape=box];` directive, which is only written when at least one
/// hook exists. Identifiers are quoted without escaping.
impl fmt::Display for MachineDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;

        for state in &self.states {
            for transition in &state.transitions {
                match &transition.guard {
                    Some(guard) => writeln!(
                        f,
                        "    \"{}\" -> \"{}\" [label=\"{} [{}]\"];",
                        state.state, transition.target, transition.event, guard
                    )?,
                    None => writeln!(
                        f,
                        "    \"{}\" -> \"{}\" [label=\"{}\"];",
                        state.state, transition.target, transition.event
                    )?,
                }
            }
        }

        let has_hooks = self
            .states
            .iter()
            .any(|s| !s.entry_hooks.is_empty() || !s.exit_hooks.is_empty());

        if has_hooks {
            writeln!(f, "    node [shape=box];")?;
            for state in &self.states {
                for name in &state.entry_hooks {
                    write_hook_edge(f, &state.state, name.as_deref(), "On Entry")?;
                }
                for name in &state.exit_hooks {
                    write_hook_edge(f, &state.state, name.as_deref(), "On Exit")?;
                }
            }
        }

        writeln!(f, "}}")
    }
}

fn write_hook_edge(
    f: &mut fmt::Formatter<'_>,
    state: &str,
    name: Option<&str>,
    label: &str,
) -> fmt::Result {
    writeln!(
        f,
        "    \"{}\" -> \"{}\" [label=\"{}\"];",
        state,
        name.unwrap_or(DEFAULT_HOOK_NAME),
        label
    )
}

impl<S, E, D> StateMachine<S, E, D>
where
    S: Identifier + 'static,
    E: Identifier,
{
    /// Snapshot of the configured graph.
    pub fn describe(&self) -> MachineDescription {
        MachineDescription::from_graph(self.graph())
    }

    /// The configured graph as Graphviz DOT.
    pub fn to_dot_graph(&self) -> String {
        self.describe().to_dot()
    }
}
