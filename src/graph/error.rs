//! Configuration errors.

use thiserror::Error;

/// Errors raised while configuring the state graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("making '{state}' a sub-state of '{parent}' would create a cycle")]
    ParentCycle { state: String, parent: String },
}
