//! Efsm: an extended finite-state-machine engine
//!
//! An [`Efsm`] is a frozen table of transition rules. Given a caller
//! context, a current state and an operand, [`Efsm::transit`] finds the
//! rule keyed on that (state, operand) pair, checks its guard against the
//! context, and returns the state the rule's transition function computes.
//!
//! # Core Concepts
//!
//! - **State**: any type implementing [`State`], compared intrinsically or
//!   by display form
//! - **Operand**: the input selecting a rule, compared structurally
//! - **Guard**: pure predicate over (context, state, operand)
//! - **Rule table**: built once, rejecting duplicate (state, operand) pairs,
//!   then shared read-only between threads
//!
//! # Example
//!
//! ```rust
//! use efsm::{build, Efsm, IllegalTransitReason};
//!
//! struct Ctx {
//!     bias: i32,
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Op {
//!     Add { diff: i32 },
//!     Sub,
//! }
//!
//! let machine: Efsm<Ctx, i32, Op> = build(|b| {
//!     b.from(1).on(Op::Add { diff: 10 }).to(|ctx: &Ctx, from, op| match op {
//!         Op::Add { diff } => Ok(from + ctx.bias + diff),
//!         Op::Sub => Ok(*from),
//!     });
//!     b.from(20).on(Op::Sub).to(|ctx: &Ctx, from, _| Ok(from + ctx.bias - 5));
//! })
//! .unwrap();
//!
//! assert_eq!(machine.transit(&Ctx { bias: 5 }, 1, Op::Add { diff: 10 }).unwrap(), 16);
//! assert_eq!(machine.transit(&Ctx { bias: 3 }, 20, Op::Sub).unwrap(), 18);
//!
//! let err = machine.transit(&Ctx { bias: 3 }, 10, Op::Sub).unwrap_err();
//! assert_eq!(err.reason(), Some(IllegalTransitReason::NoMatchingRule));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod fsm;

// Re-export commonly used types
pub use builder::{build, build_validated, build_with, try_build, DefinitionError, EfsmBuilder};
pub use config::{DuplicatePolicy, EfsmConfig};
pub use crate::core::{AnyOperand, Guard, Operand, State, Transition, TransitionFailure};
pub use engine::{Efsm, IllegalTransitReason, TransitError};
pub use fsm::{build_fsm, Fsm, FsmBuilder};
