//! Context-free facade for plain state × operand machines.
//!
//! [`Fsm`] fixes the context to `()` and its builder only accepts constant
//! targets, which covers the common case of a transition table without
//! guards or computed states.

use crate::builder::{DefinitionError, EfsmBuilder, FromBuilder, OnBuilder};
use crate::config::EfsmConfig;
use crate::core::{Operand, State};
use crate::engine::{Efsm, TransitError};

/// Finite-state machine without context.
pub struct Fsm<S, O> {
    machine: Efsm<(), S, O>,
}

impl<S: State, O: Operand> Fsm<S, O> {
    pub fn transit(&self, from: S, operand: O) -> Result<S, TransitError<S, O>> {
        self.machine.transit(&(), from, operand)
    }

    pub fn can_transit(&self, from: &S, operand: &O) -> bool {
        self.machine.can_transit(&(), from, operand)
    }

    /// The underlying context-aware machine.
    pub fn machine(&self) -> &Efsm<(), S, O> {
        &self.machine
    }
}

impl<S, O> Clone for Fsm<S, O> {
    fn clone(&self) -> Self {
        Self {
            machine: self.machine.clone(),
        }
    }
}

/// Builder handed to [`build_fsm`] configurators.
pub struct FsmBuilder<S, O> {
    inner: EfsmBuilder<(), S, O>,
}

impl<S: State, O: Operand> FsmBuilder<S, O> {
    pub fn from(&self, state: S) -> FsmFromBuilder<'_, S, O> {
        FsmFromBuilder {
            inner: self.inner.from(state),
        }
    }
}

pub struct FsmFromBuilder<'a, S, O> {
    inner: FromBuilder<'a, (), S, O>,
}

impl<'a, S: State, O: Operand> FsmFromBuilder<'a, S, O> {
    pub fn on(&self, operand: O) -> FsmOnBuilder<'a, S, O> {
        FsmOnBuilder {
            inner: self.inner.on(operand),
        }
    }

    pub fn on_func<F>(&self, configure: F)
    where
        F: FnOnce(&FsmFromBuilder<'a, S, O>),
    {
        configure(self)
    }
}

pub struct FsmOnBuilder<'a, S, O> {
    inner: OnBuilder<'a, (), S, O>,
}

impl<S: State, O: Operand> FsmOnBuilder<'_, S, O> {
    /// Register an unconditional rule landing on `state`.
    pub fn to(self, state: S) {
        self.inner.to_const(state)
    }
}

/// Build a context-free machine.
///
/// # Example
///
/// ```
/// use efsm::build_fsm;
/// use efsm::state_enum;
///
/// state_enum! {
///     enum Job {
///         Idle,
///         Running,
///         Done,
///     }
/// }
///
/// let fsm = build_fsm(|b| {
///     b.from(Job::Idle).on("start").to(Job::Running);
///     b.from(Job::Running).on("finish").to(Job::Done);
/// })
/// .unwrap();
///
/// assert_eq!(fsm.transit(Job::Idle, "start").unwrap(), Job::Running);
/// assert!(fsm.transit(Job::Idle, "finish").is_err());
/// ```
pub fn build_fsm<S, O, F>(configure: F) -> Result<Fsm<S, O>, DefinitionError>
where
    S: State,
    O: Operand,
    F: FnOnce(&FsmBuilder<S, O>),
{
    let builder = FsmBuilder {
        inner: EfsmBuilder::new(EfsmConfig::default()),
    };
    configure(&builder);

    Ok(Fsm {
        machine: builder.inner.finish()?,
    })
}
