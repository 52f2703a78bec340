//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder for choosing the storage mode and
//! listener of a machine, and a macro for declaring identifier enums.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
