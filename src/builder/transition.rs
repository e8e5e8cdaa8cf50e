//! Staged builders for a single rule: source state, operand, guard, target.

use crate::builder::machine::EfsmBuilder;
use crate::core::{Guard, Operand, State, Transition, TransitionFailure};

/// Stage holding the source state.
pub struct FromBuilder<'a, C, S, O> {
    builder: &'a EfsmBuilder<C, S, O>,
    from: S,
}

impl<'a, C, S, O> FromBuilder<'a, C, S, O>
where
    C: 'static,
    S: State,
    O: Operand,
{
    pub(crate) fn new(builder: &'a EfsmBuilder<C, S, O>, from: S) -> Self {
        Self { builder, from }
    }

    /// Select the operand the rule reacts to.
    pub fn on(&self, operand: O) -> OnBuilder<'a, C, S, O> {
        OnBuilder {
            builder: self.builder,
            from: self.from.clone(),
            operand,
        }
    }

    /// Run a nested configurator against this source state, to register
    /// several operands under it.
    pub fn on_func<F>(&self, configure: F)
    where
        F: FnOnce(&FromBuilder<'a, C, S, O>),
    {
        configure(self)
    }

    pub fn state(&self) -> &S {
        &self.from
    }
}

/// Stage holding the source state and operand.
pub struct OnBuilder<'a, C, S, O> {
    builder: &'a EfsmBuilder<C, S, O>,
    from: S,
    operand: O,
}

impl<'a, C, S, O> OnBuilder<'a, C, S, O>
where
    C: 'static,
    S: State,
    O: Operand,
{
    /// Gate the rule with a guard closure.
    pub fn when<F>(self, predicate: F) -> GuardBuilder<'a, C, S, O>
    where
        F: Fn(&C, &S, &O) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Gate the rule with a prepared guard.
    pub fn guard(self, guard: Guard<C, S, O>) -> GuardBuilder<'a, C, S, O> {
        GuardBuilder {
            builder: self.builder,
            from: self.from,
            operand: self.operand,
            guard: Some(guard),
        }
    }

    /// Register an unconditional rule computing its target.
    pub fn to<F>(self, transition: F)
    where
        F: Fn(&C, &S, &O) -> Result<S, TransitionFailure<S>> + Send + Sync + 'static,
    {
        self.unguarded().to(transition)
    }

    /// Register an unconditional rule with a fixed target.
    pub fn to_const(self, to: S) {
        self.unguarded().to_const(to)
    }

    fn unguarded(self) -> GuardBuilder<'a, C, S, O> {
        GuardBuilder {
            builder: self.builder,
            from: self.from,
            operand: self.operand,
            guard: None,
        }
    }
}

/// Final stage; registering consumes it.
pub struct GuardBuilder<'a, C, S, O> {
    builder: &'a EfsmBuilder<C, S, O>,
    from: S,
    operand: O,
    guard: Option<Guard<C, S, O>>,
}

impl<C, S, O> GuardBuilder<'_, C, S, O>
where
    C: 'static,
    S: State,
    O: Operand,
{
    /// Register the rule with a transition function.
    pub fn to<F>(self, transition: F)
    where
        F: Fn(&C, &S, &O) -> Result<S, TransitionFailure<S>> + Send + Sync + 'static,
    {
        self.register(Transition::new(transition))
    }

    /// Register the rule with a fixed target.
    pub fn to_const(self, to: S) {
        self.register(Transition::constant(to))
    }

    fn register(self, transition: Transition<C, S, O>) {
        // Faults are recorded by the builder and reported by the build call.
        let _ = self
            .builder
            .register(self.from, self.operand, self.guard, Some(transition));
    }
}
