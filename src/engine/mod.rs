//! Dispatch engine.
//!
//! A built [`Efsm`] owns an immutable snapshot of its rules and exposes
//! `transit` as a plain function of (context, state, operand). The
//! [`transit_effect`](Efsm::transit_effect) shell lifts the same dispatch
//! into a Stillwater effect whose environment is the context.
//!
//! # Key Concepts
//!
//! - **Shape match**: a rule keyed on the queried (state, operand) pair
//! - **Guard**: decides whether a shape-matched rule fires
//! - **Illegal transit**: nothing fired; the input state comes back unchanged

mod effect;
mod error;
mod machine;

pub use error::{IllegalTransitReason, TransitError};
pub use machine::Efsm;
