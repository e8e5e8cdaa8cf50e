//! Core rule types and matching logic.
//!
//! This module contains the building blocks the engine dispatches over:
//! - The equality layer: `State` and `Operand` comparison semantics
//! - Guard predicates and transition functions
//! - Validated rules and the append-only rule table
//!
//! Nothing here performs I/O; transition functions are the only place
//! caller side effects run.

mod guard;
mod operand;
mod rule;
mod state;
mod table;

pub use guard::Guard;
pub use operand::{AnyOperand, Operand, Payload};
pub use rule::{BoxError, Rule, Transition, TransitionFailure, TransitionFn};
pub use state::{display_eq, ByDisplay, State};
pub use table::RuleTable;
