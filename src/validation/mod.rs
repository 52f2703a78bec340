//! Validation of a configured state graph.
//!
//! Configuration mistakes never make `fire` fail; they make it silently do
//! something other than intended. Validation inspects the whole graph and
//! uses Stillwater's `Validation` type to report every problem at once
//! instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use statenest::validation::ConfigViolation;
//! use statenest::StateMachine;
//! use stillwater::validation::Validation;
//!
//! let mut machine = StateMachine::<&str>::new("a");
//! machine.configure("a").permit("go", "b").permit("go", "c");
//!
//! match machine.validate() {
//!     Validation::Failure(violations) => {
//!         assert!(violations
//!             .iter()
//!             .any(|v| matches!(v, ConfigViolation::ShadowedTransition { .. })));
//!     }
//!     Validation::Success(_) => panic!("expected a shadowed transition"),
//! }
//! ```

mod violations;

pub use violations::ConfigViolation;

use crate::core::Identifier;
use crate::graph::{StateGraph, StateNode};
use crate::machine::StateMachine;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating a graph.
pub type GraphValidation = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Check every node of `graph`, accumulating ALL violations.
pub fn validate_graph<S: Identifier, E: Identifier, D>(graph: &StateGraph<S, E, D>) -> GraphValidation {
    let mut checks: Vec<GraphValidation> = Vec::new();

    for node in graph.iter() {
        checks.extend(shadowed_transitions(node));

        if let Some(parent) = node.parent() {
            if !graph.contains(parent) {
                checks.push(Validation::fail(ConfigViolation::UnknownParent {
                    state: node.state().to_string(),
                    parent: parent.to_string(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn shadowed_transitions<S: Identifier, E: Identifier, D>(
    node: &StateNode<S, E, D>,
) -> Vec<GraphValidation> {
    let mut checks = Vec::new();

    for table in node.event_tables() {
        let Some(open) = table.transitions().iter().position(|t| !t.is_guarded()) else {
            continue;
        };
        for shadowed in &table.transitions()[open + 1..] {
            checks.push(Validation::fail(ConfigViolation::ShadowedTransition {
                state: node.state().to_string(),
                event: table.event().to_string(),
                target: shadowed.target().to_string(),
            }));
        }
    }

    checks
}

impl<S, E, D> StateMachine<S, E, D>
where
    S: Identifier + 'static,
    E: Identifier,
{
    /// Validate the configured graph.
    pub fn validate(&self) -> GraphValidation {
        validate_graph(self.graph())
    }
}
